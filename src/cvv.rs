//! CVV/CVC/CID field rules.
//!
//! # Length Requirements
//!
//! - American Express: 4 digits (printed on front)
//! - All other providers: 3 digits (printed on back)
//!
//! A CVV can only be judged once the card number's provider is known; with
//! no detected provider every CVV is invalid.
//!
//! # Example
//!
//! ```
//! use cc_fields::cvv::check_cvv;
//! use cc_fields::Provider;
//!
//! assert!(check_cvv("123", Some(Provider::Visa)).is_ok());
//! assert!(check_cvv("1234", Some(Provider::Amex)).is_ok());
//! assert!(check_cvv("123", Some(Provider::Amex)).is_err());
//! assert!(check_cvv("123", None).is_err());
//! ```

use crate::Provider;
use std::fmt;

/// Reasons a CVV value fails validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CvvError {
    /// No provider was detected for the card number.
    NoProvider,
    /// The CVV contains a character that is not an ASCII digit.
    InvalidCharacter {
        /// Position of the invalid character.
        position: usize,
    },
    /// The CVV length doesn't match the provider's requirement.
    WrongLength {
        /// The detected provider.
        provider: Provider,
        /// Actual number of characters.
        length: usize,
        /// Required number of digits.
        expected: usize,
    },
}

impl fmt::Display for CvvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoProvider => write!(f, "CVV cannot be checked without a card provider"),
            // The character itself is card data and is not echoed
            Self::InvalidCharacter { position } => {
                write!(f, "invalid character at position {}", position)
            }
            Self::WrongLength {
                provider,
                length,
                expected,
            } => {
                write!(
                    f,
                    "{} cards require {} digit CVV, got {}",
                    provider.name(),
                    expected,
                    length
                )
            }
        }
    }
}

impl std::error::Error for CvvError {}

/// Returns the required CVV length for a provider.
#[inline]
pub const fn cvv_length_for_provider(provider: Provider) -> usize {
    match provider {
        Provider::Amex => 4,
        _ => 3,
    }
}

/// Checks a CVV against the provider detected for the card number.
///
/// The whole value must be exactly the required number of ASCII digits.
pub fn check_cvv(input: &str, provider: Option<Provider>) -> Result<(), CvvError> {
    let provider = provider.ok_or(CvvError::NoProvider)?;

    if let Some(position) = input.chars().position(|c| !c.is_ascii_digit()) {
        return Err(CvvError::InvalidCharacter { position });
    }

    let expected = cvv_length_for_provider(provider);
    let length = input.len();
    if length != expected {
        return Err(CvvError::WrongLength {
            provider,
            length,
            expected,
        });
    }

    Ok(())
}

/// Returns true if the CVV is valid for the detected provider.
#[inline]
pub fn is_valid_cvv(input: &str, provider: Option<Provider>) -> bool {
    check_cvv(input, provider).is_ok()
}
