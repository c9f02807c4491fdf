//! Fuzz target for record validation.
//!
//! Tests that validation never panics on arbitrary field values and that a
//! second pass records nothing new.

#![no_main]

use arbitrary::Arbitrary;
use cc_fields::{CreditCardFieldsValidator, FieldMap, Options};
use chrono::NaiveDate;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
struct Input<'a> {
    number: Option<&'a str>,
    cvv: Option<&'a str>,
    month: Option<&'a str>,
    year: Option<&'a str>,
    owner: Option<&'a str>,
    days_from_epoch: u16,
}

fuzz_target!(|input: Input<'_>| {
    let Some(today) = NaiveDate::from_ymd_opt(2000, 1, 1)
        .and_then(|d| d.checked_add_days(chrono::Days::new(input.days_from_epoch.into())))
    else {
        return;
    };

    let mut record = FieldMap::new();
    for (name, value) in [
        ("cc_number", input.number),
        ("cc_cvv", input.cvv),
        ("cc_month", input.month),
        ("cc_year", input.year),
        ("cc_owner", input.owner),
    ] {
        if let Some(value) = value {
            record.set(name, value);
        }
    }

    let validator = match CreditCardFieldsValidator::from_options(Options::new()) {
        Ok(validator) => validator,
        Err(_) => return,
    };
    if validator.validate_at(&mut record, today).is_err() {
        return;
    }
    let first = record.errors().clone();
    let _ = validator.validate_at(&mut record, today);
    assert_eq!(record.errors(), &first, "second pass changed the errors");
});
