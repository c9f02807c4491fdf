//! # cc_fields
//!
//! Credit card form field validation for Rust.
//!
//! Checks the card fields attached to any record (a form submission, a model,
//! a JSON object) and records at most one error per field.
//!
//! ## Features
//!
//! - Card provider detection (10 providers)
//! - Luhn algorithm validation
//! - CVV length per provider
//! - Expiry month/year syntax and "not in the past" checks
//! - Per-field custom error messages with a pluggable default catalog
//! - Either a single owner field or separate first/last name fields
//!
//! ## Quick Start
//!
//! ```rust
//! use cc_fields::{CreditCardFieldsValidator, ErrorKind, FieldMap, Options, Provider};
//! use chrono::NaiveDate;
//!
//! let validator = CreditCardFieldsValidator::from_options(
//!     Options::new()
//!         .number("credit_card_number")
//!         .providers([Provider::Visa, Provider::Amex]),
//! )
//! .unwrap();
//!
//! let mut record = FieldMap::new();
//! record
//!     .set("credit_card_number", "5555555555554444")
//!     .set("cc_cvv", "123")
//!     .set("cc_month", "12")
//!     .set("cc_year", "29");
//!
//! let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
//! validator.validate_at(&mut record, today).unwrap();
//!
//! let errors = record.errors();
//! assert_eq!(errors.get("credit_card_number").unwrap().kind, ErrorKind::NotSupported);
//! assert_eq!(errors.get("cc_owner").unwrap().message, "can't be blank");
//! assert_eq!(errors.len(), 2);
//! ```
//!
//! ## Custom Records
//!
//! Implement [`Record`] to validate your own types in place:
//!
//! ```rust
//! use cc_fields::{FieldError, FieldValue, Record};
//!
//! struct Payment {
//!     number: Option<String>,
//!     errors: Vec<(String, FieldError)>,
//! }
//!
//! impl Record for Payment {
//!     fn field(&self, name: &str) -> FieldValue<'_> {
//!         match name {
//!             "cc_number" => self.number.as_deref().into(),
//!             _ => FieldValue::Absent,
//!         }
//!     }
//!
//!     fn has_error(&self, name: &str) -> bool {
//!         self.errors.iter().any(|(field, _)| field == name)
//!     }
//!
//!     fn add_error(&mut self, name: &str, error: FieldError) {
//!         self.errors.push((name.to_string(), error));
//!     }
//! }
//! ```
//!
//! ## Supported Providers
//!
//! | Provider | Id | Prefix | Length | CVV |
//! |----------|----|--------|--------|-----|
//! | Visa | `visa` | 4 | 13, 16 | 3 |
//! | Mastercard | `master_card` | 51-55, 2221-2720 | 16 | 3 |
//! | Maestro | `maestro` | 50, 56-58, 6304, 6390, 67 | 12-19 | 3 |
//! | Diners Club | `diners_club` | 300-305, 36, 38 | 14 | 3 |
//! | American Express | `amex` | 34, 37 | 15 | 4 |
//! | Discover | `discover` | 6011, 65 | 16 | 3 |
//! | JCB | `jcb` | 2131, 1800, 35 | 15, 16 | 3 |
//! | Solo | `solo` | 63345-63349, 6767 | 16, 18, 19 | 3 |
//! | China UnionPay | `china_union` | 620-625 | 16-19 | 3 |
//! | Dankort | `dankort` | 5019 | 16 | 3 |
//!
//! China UnionPay numbers are not Luhn checked.
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | JSON options and records |
//! | `parallel` | Rayon-based batch validation |
//! | `cli` | Command-line tool |
//!
//! ## Security
//!
//! - Card number and CVV copies are zeroized after each validation pass
//! - Logging records field names and error kinds, never field values
//! - `FieldMap`'s `Debug` output lists field names only
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod batch;
pub mod cvv;
pub mod detect;
pub mod error;
pub mod expiry;
pub mod luhn;
pub mod message;
pub mod options;
pub mod provider;
pub mod record;
pub mod validate;

// Re-export main types at crate root
pub use error::{ConfigError, ErrorKind, FieldError, FieldTypeError};
pub use message::{DefaultCatalog, MessageCatalog};
pub use options::{Config, FieldSpec, Holder, Options};
pub use provider::Provider;
pub use record::{Errors, FieldMap, FieldValue, Record};
pub use validate::CreditCardFieldsValidator;
