//! Validation orchestration for a record's credit card fields.
//!
//! [`CreditCardFieldsValidator`] runs a fixed sequence of rules over the
//! configured fields of a [`Record`]:
//!
//! 1. Presence of every configured field
//! 2. Provider detection on the card number
//! 3. Card number: known provider, Luhn checksum, allow-list
//! 4. CVV length for the detected provider
//! 5. Expiry month syntax and range
//! 6. Expiry year syntax and range
//! 7. Expiry date not in the past (only if 5 and 6 left no error)
//!
//! A field keeps the first error it receives; later rules never replace it.
//! Running the validator again on an unchanged record therefore records
//! nothing new.

use crate::cvv;
use crate::detect::detect_provider;
use crate::error::{ConfigError, ErrorKind, FieldError, FieldTypeError};
use crate::expiry::{self, Clock, ExpiredField, SystemClock};
use crate::luhn;
use crate::message::{DefaultCatalog, MessageCatalog, MessageResolver};
use crate::options::{Config, Options};
use crate::record::{FieldValue, Record};
use crate::Provider;
use chrono::NaiveDate;
use std::fmt;
use tracing::{debug, trace, warn};
use zeroize::Zeroizing;

/// Validates the credit card fields of records against one [`Config`].
///
/// The validator is immutable after construction and can be shared across
/// threads; each call only touches the record it is given.
///
/// # Example
///
/// ```
/// use cc_fields::{CreditCardFieldsValidator, ErrorKind, FieldMap, Options};
/// use chrono::NaiveDate;
///
/// let validator = CreditCardFieldsValidator::from_options(Options::new()).unwrap();
/// let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
///
/// let mut record = FieldMap::new();
/// record
///     .set("cc_number", "4111 1111 1111 1111")
///     .set("cc_cvv", "123")
///     .set("cc_month", "1")
///     .set("cc_year", "30")
///     .set("cc_owner", "Jane Doe");
///
/// validator.validate_at(&mut record, today).unwrap();
/// assert!(record.errors().is_empty());
///
/// record.set("cc_cvv", "12");
/// validator.validate_at(&mut record, today).unwrap();
/// assert_eq!(record.errors().get("cc_cvv").unwrap().kind, ErrorKind::Invalid);
/// ```
pub struct CreditCardFieldsValidator {
    config: Config,
    catalog: Box<dyn MessageCatalog + Send + Sync>,
}

impl CreditCardFieldsValidator {
    /// Creates a validator using the [`DefaultCatalog`] messages.
    pub fn new(config: Config) -> Self {
        Self::with_catalog(config, DefaultCatalog)
    }

    /// Creates a validator whose default messages come from `catalog`.
    pub fn with_catalog<C>(config: Config, catalog: C) -> Self
    where
        C: MessageCatalog + Send + Sync + 'static,
    {
        Self {
            config,
            catalog: Box::new(catalog),
        }
    }

    /// Builds the configuration from `options` and creates a validator.
    pub fn from_options(options: Options) -> Result<Self, ConfigError> {
        Ok(Self::new(options.build()?))
    }

    /// Returns the configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Validates `record` as of the local system date.
    pub fn validate<R: Record + ?Sized>(&self, record: &mut R) -> Result<(), FieldTypeError> {
        self.validate_with_clock(record, &SystemClock)
    }

    /// Validates `record` as of the date reported by `clock`.
    pub fn validate_with_clock<R, C>(&self, record: &mut R, clock: &C) -> Result<(), FieldTypeError>
    where
        R: Record + ?Sized,
        C: Clock + ?Sized,
    {
        self.validate_at(record, clock.today())
    }

    /// Validates `record` as of `today`.
    ///
    /// Validation failures are recorded on the record. `Err` is returned
    /// only when a configured field holds a non-text value, in which case
    /// nothing is recorded.
    pub fn validate_at<R: Record + ?Sized>(
        &self,
        record: &mut R,
        today: NaiveDate,
    ) -> Result<(), FieldTypeError> {
        let snapshot = self.read_fields(record)?;
        let config = &self.config;

        for field in config.validated_fields() {
            if record.field(field).is_blank() {
                self.report(record, field, ErrorKind::Blank);
            }
        }

        let provider = detect_provider(&snapshot.number);
        trace!(provider = ?provider, "detected card provider");

        if let Some(kind) = self.check_number(&snapshot.number, provider) {
            self.report(record, config.number_field(), kind);
        }

        if let Err(err) = cvv::check_cvv(&snapshot.cvv, provider) {
            debug!(reason = %err, "cvv rejected");
            self.report(record, config.cvv_field(), ErrorKind::Invalid);
        }

        let month = expiry::parse_month(&snapshot.month);
        if month.is_none() {
            self.report(record, config.month_field(), ErrorKind::Invalid);
        }

        let year = expiry::parse_year(&snapshot.year, today);
        if year.is_none() {
            self.report(record, config.year_field(), ErrorKind::Invalid);
        }

        if record.has_error(config.month_field()) || record.has_error(config.year_field()) {
            return Ok(());
        }
        if let (Some(month), Some(year)) = (month, year) {
            match expiry::check_expiry(year, month, today) {
                Some(ExpiredField::Year) => {
                    self.report(record, config.year_field(), ErrorKind::Invalid)
                }
                Some(ExpiredField::Month) => {
                    self.report(record, config.month_field(), ErrorKind::Invalid)
                }
                None => {}
            }
        }

        Ok(())
    }

    /// Checks the type of every configured field and copies out the values
    /// the rules need.
    fn read_fields<R: Record + ?Sized>(&self, record: &R) -> Result<Snapshot, FieldTypeError> {
        for field in self.config.validated_fields() {
            if let FieldValue::Other { type_name } = record.field(field) {
                warn!(field, type_name, "credit card field is not a string");
                return Err(FieldTypeError {
                    field: field.to_string(),
                    type_name,
                });
            }
        }

        let text = |name: &str| record.field(name).as_text().unwrap_or_default().to_string();
        Ok(Snapshot {
            number: Zeroizing::new(text(self.config.number_field())),
            cvv: Zeroizing::new(text(self.config.cvv_field())),
            month: text(self.config.month_field()),
            year: text(self.config.year_field()),
        })
    }

    /// Returns the error kind for the card number, if any.
    ///
    /// An unknown provider and a failed checksum are both `Invalid`; the
    /// allow-list is only consulted for structurally valid numbers.
    fn check_number(&self, number: &str, provider: Option<Provider>) -> Option<ErrorKind> {
        let Some(provider) = provider else {
            return Some(ErrorKind::Invalid);
        };
        if provider.uses_luhn() {
            let digits = Zeroizing::new(number.replace(' ', ""));
            if !luhn::is_valid(&digits) {
                return Some(ErrorKind::Invalid);
            }
        }
        (!self.config.allows(provider)).then_some(ErrorKind::NotSupported)
    }

    fn report<R: Record + ?Sized>(&self, record: &mut R, field: &str, kind: ErrorKind) {
        if record.has_error(field) {
            return;
        }
        let message = MessageResolver::new(self.config.messages(), self.catalog.as_ref())
            .resolve(field, kind);
        debug!(field, kind = %kind, "credit card field rejected");
        record.add_error(field, FieldError::new(kind, message));
    }
}

impl fmt::Debug for CreditCardFieldsValidator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreditCardFieldsValidator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Field values copied out of the record for one pass.
struct Snapshot {
    number: Zeroizing<String>,
    cvv: Zeroizing<String>,
    month: String,
    year: String,
}
