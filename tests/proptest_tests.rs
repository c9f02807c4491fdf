//! Property-based tests using proptest.
//!
//! These tests verify invariants that should hold for all inputs,
//! helping discover edge cases that manual tests might miss.

use cc_fields::{
    cvv, detect::detect_provider, expiry, luhn, CreditCardFieldsValidator, FieldMap, Options,
    Provider,
};
use chrono::NaiveDate;
use proptest::prelude::*;

// =============================================================================
// STRATEGIES
// =============================================================================

/// Generates a random digit string of a length within range.
fn digit_string_range(range: std::ops::RangeInclusive<usize>) -> impl Strategy<Value = String> {
    proptest::collection::vec(prop::char::range('0', '9'), range)
        .prop_map(|chars| chars.into_iter().collect())
}

/// Generates a Luhn-valid number with the given prefix and total length.
fn luhn_number(prefix: &'static str, len: usize) -> impl Strategy<Value = String> {
    digit_string_range(len - prefix.len() - 1..=len - prefix.len() - 1).prop_map(move |body| {
        let partial: Vec<u8> = prefix
            .bytes()
            .chain(body.bytes())
            .map(|b| b - b'0')
            .collect();
        let check = luhn::generate_check_digit(&partial);
        format!("{}{}{}", prefix, body, check)
    })
}

/// Inserts single spaces between random digits.
fn with_spaces(number: String) -> impl Strategy<Value = String> {
    let len = number.len();
    proptest::collection::vec(any::<bool>(), len).prop_map(move |gaps| {
        let mut result = String::with_capacity(len * 2);
        for (c, gap) in number.chars().zip(gaps) {
            result.push(c);
            if gap {
                result.push(' ');
            }
        }
        result
    })
}

/// Textbook Luhn, written independently of the crate.
fn reference_luhn(number: &str) -> bool {
    let digits: Vec<u32> = number.chars().map(|c| c.to_digit(10).unwrap_or(0)).collect();
    if digits.is_empty() {
        return false;
    }
    let mut sum = 0;
    for (i, d) in digits.iter().rev().enumerate() {
        if i % 2 == 1 {
            let doubled = d * 2;
            sum += if doubled > 9 { doubled - 9 } else { doubled };
        } else {
            sum += d;
        }
    }
    sum % 10 == 0
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 10, 16).unwrap()
}

// =============================================================================
// LUHN PROPERTIES
// =============================================================================

proptest! {
    /// The crate's Luhn agrees with the textbook algorithm on digit strings.
    #[test]
    fn luhn_matches_reference(number in digit_string_range(0..=25)) {
        prop_assert_eq!(luhn::is_valid(&number), reference_luhn(&number));
    }

    /// Non-digits count as zero.
    #[test]
    fn luhn_non_digits_are_zero(number in "[0-9a-z]{1,20}") {
        let zeroed: String = number
            .chars()
            .map(|c| if c.is_ascii_digit() { c } else { '0' })
            .collect();
        prop_assert_eq!(luhn::is_valid(&number), luhn::is_valid(&zeroed));
    }

    /// Appending the generated check digit always yields a valid number.
    #[test]
    fn check_digit_completes_number(number in digit_string_range(1..=18)) {
        let mut digits: Vec<u8> = number.bytes().map(|b| b - b'0').collect();
        digits.push(luhn::generate_check_digit(&digits));
        prop_assert!(luhn::validate(&digits));
    }

    /// Changing a single digit breaks a valid number.
    #[test]
    fn single_digit_change_detected(
        number in luhn_number("4", 16),
        pos in 0usize..16,
        delta in 1u8..10,
    ) {
        let mut digits: Vec<u8> = number.bytes().map(|b| b - b'0').collect();
        digits[pos] = (digits[pos] + delta) % 10;
        prop_assert!(!luhn::validate(&digits));
    }
}

// =============================================================================
// DETECTION PROPERTIES
// =============================================================================

proptest! {
    /// Spaces between digits never change the detected provider.
    #[test]
    fn detection_ignores_spaces(spaced in digit_string_range(10..=19).prop_flat_map(with_spaces)) {
        let bare: String = spaced.chars().filter(|c| *c != ' ').collect();
        prop_assert_eq!(detect_provider(&spaced), detect_provider(&bare));
    }

    /// Any character other than a digit or a space defeats detection.
    #[test]
    fn detection_rejects_other_characters(
        number in digit_string_range(12..=18),
        pos in 0usize..12,
        c in "[a-zA-Z./+-]",
    ) {
        let mut number = number;
        number.insert_str(pos, &c);
        prop_assert_eq!(detect_provider(&number), None);
    }

    /// Generated Visa numbers are detected as Visa.
    #[test]
    fn visa_numbers_detected(number in luhn_number("4", 16)) {
        prop_assert_eq!(detect_provider(&number), Some(Provider::Visa));
    }

    /// Generated Amex numbers are detected as Amex.
    #[test]
    fn amex_numbers_detected(number in prop_oneof![luhn_number("34", 15), luhn_number("37", 15)]) {
        prop_assert_eq!(detect_provider(&number), Some(Provider::Amex));
    }

    /// Detection never panics.
    #[test]
    fn detection_never_panics(input in ".*") {
        let _ = detect_provider(&input);
    }
}

// =============================================================================
// CVV AND EXPIRY PROPERTIES
// =============================================================================

proptest! {
    /// A CVV is valid exactly when it has the provider's length in digits.
    #[test]
    fn cvv_length_rule(input in "[0-9]{0,6}", provider in prop::sample::select(Provider::ALL.to_vec())) {
        let expected = input.len() == cvv::cvv_length_for_provider(provider);
        prop_assert_eq!(cvv::is_valid_cvv(&input, Some(provider)), expected);
    }

    /// Without a provider no CVV is valid.
    #[test]
    fn cvv_needs_provider(input in ".*") {
        prop_assert!(!cvv::is_valid_cvv(&input, None));
    }

    /// Months 1 to 12 parse, with or without leading zeros.
    #[test]
    fn month_range(month in 1u32..=12, zeros in 0usize..3) {
        let value = format!("{}{}", "0".repeat(zeros), month);
        prop_assert_eq!(expiry::parse_month(&value), Some(month));
    }

    /// Months past 12 never parse.
    #[test]
    fn month_out_of_range(month in 13u32..10_000) {
        prop_assert_eq!(expiry::parse_month(&month.to_string()), None);
    }

    /// A year parses exactly when it is two digits and not before this year.
    #[test]
    fn year_rule(yy in 0u32..100) {
        let value = format!("{:02}", yy);
        let expected = (2000 + yy as i32 >= 2026).then_some(2000 + yy as i32);
        prop_assert_eq!(expiry::parse_year(&value, today()), expected);
    }
}

// =============================================================================
// VALIDATOR PROPERTIES
// =============================================================================

fn record_strategy() -> impl Strategy<Value = FieldMap> {
    (
        proptest::option::of("[0-9 ]{0,20}"),
        proptest::option::of("[0-9]{0,5}"),
        proptest::option::of("[0-9a-z.+-]{0,3}"),
        proptest::option::of("[0-9]{0,3}"),
        proptest::option::of("[A-Za-z ]{0,12}"),
    )
        .prop_map(|(number, cvv, month, year, owner)| {
            let mut record = FieldMap::new();
            let fields = [
                ("cc_number", number),
                ("cc_cvv", cvv),
                ("cc_month", month),
                ("cc_year", year),
                ("cc_owner", owner),
            ];
            for (name, value) in fields {
                if let Some(value) = value {
                    record.set(name, value);
                }
            }
            record
        })
}

proptest! {
    /// Validating twice records exactly the same errors as validating once.
    #[test]
    fn validation_is_idempotent(record in record_strategy()) {
        let validator = CreditCardFieldsValidator::from_options(Options::new()).unwrap();
        let mut record = record;

        validator.validate_at(&mut record, today()).unwrap();
        let first = record.errors().clone();
        validator.validate_at(&mut record, today()).unwrap();
        prop_assert_eq!(record.errors(), &first);
    }

    /// Errors are only ever recorded against configured fields, at most one each.
    #[test]
    fn errors_only_on_configured_fields(record in record_strategy()) {
        let validator = CreditCardFieldsValidator::from_options(Options::new()).unwrap();
        let mut record = record;
        validator.validate_at(&mut record, today()).unwrap();

        let configured = validator.config().validated_fields();
        prop_assert!(record.errors().len() <= configured.len());
        for (field, _) in record.errors().iter() {
            prop_assert!(configured.contains(&field));
        }
    }
}
