//! Card provider detection using prefix and length matching.
//!
//! A number belongs to a provider when its leading digits fall in one of the
//! provider's ranges *and* its total length is one the provider issues. The
//! table is evaluated top to bottom and the first match wins.
//!
//! | Provider | Prefix | Length |
//! |----------|--------|--------|
//! | Visa | 4 | 13, 16 |
//! | Mastercard | 51-55, 2221-2720 | 16 |
//! | Dankort | 5019 | 16 |
//! | Solo | 63345-63349, 6767 | 16, 18, 19 |
//! | Maestro | 50, 56-58, 6304, 6390, 67 | 12-19 |
//! | Diners Club | 300-305, 36, 38 | 14 |
//! | American Express | 34, 37 | 15 |
//! | Discover | 6011, 65 | 16 |
//! | JCB | 2131, 1800 / 35 | 15 / 16 |
//! | China UnionPay | 620-625 | 16-19 |

use crate::Provider;
use zeroize::Zeroizing;

/// Detects the provider of a raw card number as typed into a form.
///
/// Every ASCII space is removed first; any other non-digit character means
/// no provider matches.
///
/// # Example
///
/// ```
/// use cc_fields::detect::detect_provider;
/// use cc_fields::Provider;
///
/// assert_eq!(detect_provider("4111 1111 1111 1111"), Some(Provider::Visa));
/// assert_eq!(detect_provider("378282246310005"), Some(Provider::Amex));
/// assert_eq!(detect_provider("0000"), None);
/// ```
pub fn detect_provider(raw: &str) -> Option<Provider> {
    let digits = to_digits(raw)?;
    detect_digits(&digits)
}

/// Converts a raw number into digit values, dropping spaces.
///
/// Returns `None` if anything other than digits and spaces is present. The
/// buffer is wiped on drop.
pub fn to_digits(raw: &str) -> Option<Zeroizing<Vec<u8>>> {
    let mut digits = Zeroizing::new(Vec::with_capacity(raw.len()));
    for c in raw.chars() {
        match c {
            '0'..='9' => digits.push((c as u8) - b'0'),
            ' ' => {}
            _ => return None,
        }
    }
    Some(digits)
}

/// Detects the provider from a sequence of digits (0-9).
///
/// # Example
///
/// ```
/// use cc_fields::detect::detect_digits;
/// use cc_fields::Provider;
///
/// let amex = [3, 7, 8, 2, 8, 2, 2, 4, 6, 3, 1, 0, 0, 0, 5];
/// assert_eq!(detect_digits(&amex), Some(Provider::Amex));
/// ```
#[inline]
pub fn detect_digits(digits: &[u8]) -> Option<Provider> {
    let len = digits.len();

    // Dankort and Solo are sub-ranges of the Maestro umbrella and must
    // come before it
    match digits {
        [4, ..] if len == 13 || len == 16 => Some(Provider::Visa),

        [5, 1..=5, ..] if len == 16 => Some(Provider::MasterCard),
        [2, 2, 2, 1..=9, ..] // 2221-2229
        | [2, 2, 3..=9, _, ..] // 2230-2299
        | [2, 3..=6, _, _, ..] // 2300-2699
        | [2, 7, 0..=1, _, ..] // 2700-2719
        | [2, 7, 2, 0, ..] // 2720
            if len == 16 =>
        {
            Some(Provider::MasterCard)
        }

        [5, 0, 1, 9, ..] if len == 16 => Some(Provider::Dankort),

        [6, 3, 3, 4, 5..=9, ..] | [6, 7, 6, 7, ..] if matches!(len, 16 | 18 | 19) => {
            Some(Provider::Solo)
        }

        [5, 0 | 6 | 7 | 8, ..] | [6, 3, 0, 4, ..] | [6, 3, 9, 0, ..] | [6, 7, ..]
            if (12..=19).contains(&len) =>
        {
            Some(Provider::Maestro)
        }

        [3, 0, 0..=5, ..] | [3, 6 | 8, ..] if len == 14 => Some(Provider::DinersClub),

        [3, 4 | 7, ..] if len == 15 => Some(Provider::Amex),

        [6, 0, 1, 1, ..] | [6, 5, ..] if len == 16 => Some(Provider::Discover),

        [2, 1, 3, 1, ..] | [1, 8, 0, 0, ..] if len == 15 => Some(Provider::Jcb),
        [3, 5, ..] if len == 16 => Some(Provider::Jcb),

        [6, 2, 0..=5, ..] if (16..=19).contains(&len) => Some(Provider::ChinaUnion),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visa_detection() {
        assert_eq!(detect_provider("4111111111111111"), Some(Provider::Visa));
        assert_eq!(detect_provider("4222222222222"), Some(Provider::Visa));
        // 19-digit Visa is outside the accepted lengths
        assert_eq!(detect_provider("4111111111111111111"), None);
        assert_eq!(detect_provider("411111111111111"), None);
    }

    #[test]
    fn test_mastercard_detection() {
        // 51-55 range
        assert_eq!(detect_provider("5105105105105100"), Some(Provider::MasterCard));
        assert_eq!(detect_provider("5555555555554444"), Some(Provider::MasterCard));
        // 2221-2720 range, both ends
        assert_eq!(detect_provider("2221000000000009"), Some(Provider::MasterCard));
        assert_eq!(detect_provider("2720990000000007"), Some(Provider::MasterCard));
        assert_eq!(detect_provider("2223000048400011"), Some(Provider::MasterCard));
        // Just outside the 2-series range
        assert_eq!(detect_provider("2220990000000000"), None);
        assert_eq!(detect_provider("2721000000000000"), None);
    }

    #[test]
    fn test_maestro_detection() {
        assert_eq!(detect_provider("6759649826438453"), Some(Provider::Maestro));
        assert_eq!(detect_provider("6304000000000000"), Some(Provider::Maestro));
        assert_eq!(detect_provider("5018000000000009"), Some(Provider::Maestro));
        // 12 and 19 digits are both in range
        assert_eq!(detect_provider("630400000000"), Some(Provider::Maestro));
        assert_eq!(detect_provider("6390000000000000000"), Some(Provider::Maestro));
        assert_eq!(detect_provider("63040000000"), None);
    }

    #[test]
    fn test_diners_club_detection() {
        assert_eq!(detect_provider("30569309025904"), Some(Provider::DinersClub));
        assert_eq!(detect_provider("36255264496934"), Some(Provider::DinersClub));
        assert_eq!(detect_provider("38520000023237"), Some(Provider::DinersClub));
        assert_eq!(detect_provider("30669309025904"), None);
    }

    #[test]
    fn test_amex_detection() {
        assert_eq!(detect_provider("378282246310005"), Some(Provider::Amex));
        assert_eq!(detect_provider("340000000000009"), Some(Provider::Amex));
        assert_eq!(detect_provider("3782822463100050"), None);
    }

    #[test]
    fn test_discover_detection() {
        assert_eq!(detect_provider("6011111111111117"), Some(Provider::Discover));
        assert_eq!(detect_provider("6500000000000002"), Some(Provider::Discover));
    }

    #[test]
    fn test_jcb_detection() {
        assert_eq!(detect_provider("3530111333300000"), Some(Provider::Jcb));
        assert_eq!(detect_provider("213100000000001"), Some(Provider::Jcb));
        assert_eq!(detect_provider("180000000000002"), Some(Provider::Jcb));
    }

    #[test]
    fn test_solo_detection() {
        assert_eq!(detect_provider("6334500000000003"), Some(Provider::Solo));
        assert_eq!(detect_provider("6767000000000000"), Some(Provider::Solo));
        assert_eq!(detect_provider("676700000000000000"), Some(Provider::Solo));
        // 63344 is below the Solo range
        assert_eq!(detect_provider("6334400000000000"), None);
        // 6767 at a non-Solo length falls back to Maestro
        assert_eq!(detect_provider("67670000000000000"), Some(Provider::Maestro));
    }

    #[test]
    fn test_china_union_detection() {
        assert_eq!(detect_provider("6212345678901232"), Some(Provider::ChinaUnion));
        assert_eq!(detect_provider("6250000000000000000"), Some(Provider::ChinaUnion));
        assert_eq!(detect_provider("6260000000000000"), None);
    }

    #[test]
    fn test_dankort_detection() {
        assert_eq!(detect_provider("5019717010103742"), Some(Provider::Dankort));
    }

    #[test]
    fn test_spaces_are_stripped() {
        assert_eq!(detect_provider("4111 1111 1111 1111"), Some(Provider::Visa));
        assert_eq!(detect_provider(" 3782 822463 10005 "), Some(Provider::Amex));
    }

    #[test]
    fn test_other_separators_are_rejected() {
        assert_eq!(detect_provider("4111-1111-1111-1111"), None);
        assert_eq!(detect_provider("4111\t1111111111111"), None);
        assert_eq!(detect_provider("4111x11111111111"), None);
    }

    #[test]
    fn test_unknown_and_empty() {
        assert_eq!(detect_provider(""), None);
        assert_eq!(detect_provider("   "), None);
        assert_eq!(detect_provider("0000"), None);
        assert_eq!(detect_provider("123"), None);
        assert_eq!(detect_digits(&[]), None);
    }
}
