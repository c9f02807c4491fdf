//! Luhn algorithm implementation for card number checksums.
//!
//! The Luhn algorithm (also known as the "modulus 10" algorithm) is a checksum
//! formula that catches single-digit transcription errors in card numbers.

/// Lookup table for doubled digits: double the value, subtract 9 if >= 10.
/// Index is the digit (0-9), value is the transformed result.
const DOUBLE_TABLE: [u8; 10] = [0, 2, 4, 6, 8, 1, 3, 5, 7, 9];

/// Validates a card number given as text.
///
/// The number is expected to have its spaces already removed. Characters
/// that are not ASCII digits count as zero.
///
/// # Example
///
/// ```
/// use cc_fields::luhn::is_valid;
///
/// assert!(is_valid("4111111111111111"));
/// assert!(!is_valid("4111111111111110"));
/// ```
pub fn is_valid(number: &str) -> bool {
    let digits: Vec<u8> = number
        .chars()
        .map(|c| c.to_digit(10).map_or(0, |d| d as u8))
        .collect();
    validate(&digits)
}

/// Validates a sequence of digits using the Luhn algorithm.
///
/// # Arguments
///
/// * `digits` - A slice of digits (0-9) representing the card number.
///
/// # Returns
///
/// `true` if the checksum is valid, `false` otherwise. An empty slice is
/// never valid.
///
/// # Algorithm
///
/// 1. Starting from the rightmost digit (check digit), moving left
/// 2. Double every second digit
/// 3. If doubling results in a number > 9, subtract 9
/// 4. Sum all digits
/// 5. If the sum is divisible by 10, the number is valid
///
/// # Example
///
/// ```
/// use cc_fields::luhn::validate;
///
/// let digits = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert!(validate(&digits));
/// ```
#[inline]
pub fn validate(digits: &[u8]) -> bool {
    if digits.is_empty() {
        return false;
    }

    compute_checksum(digits) % 10 == 0
}

/// Computes the Luhn sum (not reduced modulo 10) for a sequence of digits.
#[inline]
pub fn compute_checksum(digits: &[u8]) -> u32 {
    // Rightmost digit is position 0 and is kept as-is; odd positions are doubled
    digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &digit)| {
            if i % 2 == 1 {
                DOUBLE_TABLE[digit as usize] as u32
            } else {
                digit as u32
            }
        })
        .sum()
}

/// Generates the check digit for a partial card number.
///
/// Given digits without the check digit, computes what the check digit
/// should be for the number to pass Luhn validation.
///
/// # Example
///
/// ```
/// use cc_fields::luhn::generate_check_digit;
///
/// let partial = [4, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1];
/// assert_eq!(generate_check_digit(&partial), 1);
/// ```
#[inline]
pub fn generate_check_digit(digits: &[u8]) -> u8 {
    // Every existing digit shifts one position left once the check digit
    // is appended, so the doubling parity flips
    let sum: u32 = digits
        .iter()
        .rev()
        .enumerate()
        .map(|(i, &digit)| {
            if i % 2 == 0 {
                DOUBLE_TABLE[digit as usize] as u32
            } else {
                digit as u32
            }
        })
        .sum();

    ((10 - (sum % 10)) % 10) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_numbers() {
        assert!(is_valid("4111111111111111"));
        assert!(is_valid("4012888888881881"));
        assert!(is_valid("378282246310005"));
        assert!(is_valid("371449635398431"));
        assert!(is_valid("5019717010103742"));
        assert!(is_valid("30569309025904"));
    }

    #[test]
    fn test_invalid_numbers() {
        // Changed last digit
        assert!(!is_valid("4111111111111110"));
        assert!(!is_valid("4111111111111112"));
        assert!(!is_valid("1234567890123456"));
    }

    #[test]
    fn test_non_digits_count_as_zero() {
        // "x" stands in for 0
        assert_eq!(is_valid("41x1"), is_valid("4101"));
        assert!(is_valid("0x"));
    }

    #[test]
    fn test_generate_check_digit() {
        let partial = [5, 5, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
        assert_eq!(generate_check_digit(&partial), 4);

        let partial = [3, 7, 8, 2, 8, 2, 2, 4, 6, 3, 1, 0, 0, 0];
        assert_eq!(generate_check_digit(&partial), 5);
    }

    #[test]
    fn test_empty_input() {
        assert!(!validate(&[]));
        assert!(!is_valid(""));
    }

    #[test]
    fn test_single_digit() {
        assert!(validate(&[0]));
        assert!(!validate(&[1]));
        assert!(!validate(&[5]));
    }

    #[test]
    fn test_double_table_values() {
        for i in 0..10 {
            let doubled = i * 2;
            let expected = if doubled > 9 { doubled - 9 } else { doubled };
            assert_eq!(DOUBLE_TABLE[i], expected as u8);
        }
    }
}
