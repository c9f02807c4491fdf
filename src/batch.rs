//! Batch validation of many records against one configuration.
//!
//! Every record in a batch is validated against the same `today`, so a
//! batch that straddles midnight at the end of a month judges every record
//! alike. With the `parallel` feature records are validated on the rayon
//! thread pool; the validator is shared, each record is touched by one
//! thread only.

use crate::error::FieldTypeError;
use crate::record::Record;
use crate::validate::CreditCardFieldsValidator;
use chrono::NaiveDate;

/// Outcome counts for a batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Records with no field errors.
    pub valid: usize,
    /// Records with at least one field error.
    pub invalid: usize,
    /// Records rejected because a field held a non-text value.
    pub type_errors: usize,
}

/// Validates every record, returning one result per record in input order.
///
/// # Example
///
/// ```
/// use cc_fields::batch::validate_batch;
/// use cc_fields::{CreditCardFieldsValidator, FieldMap, Options};
/// use chrono::NaiveDate;
///
/// let validator = CreditCardFieldsValidator::from_options(Options::new()).unwrap();
/// let mut records = vec![FieldMap::new(), FieldMap::new()];
/// records[1].set_non_text("cc_year", 30_u8);
///
/// let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
/// let results = validate_batch(&validator, &mut records, today);
/// assert!(results[0].is_ok());
/// assert!(results[1].is_err());
/// ```
pub fn validate_batch<R: Record>(
    validator: &CreditCardFieldsValidator,
    records: &mut [R],
    today: NaiveDate,
) -> Vec<Result<(), FieldTypeError>> {
    records
        .iter_mut()
        .map(|record| validator.validate_at(record, today))
        .collect()
}

/// Validates every record in parallel.
///
/// # Feature
///
/// Requires the `parallel` feature to be enabled.
#[cfg(feature = "parallel")]
pub fn validate_batch_parallel<R: Record + Send>(
    validator: &CreditCardFieldsValidator,
    records: &mut [R],
    today: NaiveDate,
) -> Vec<Result<(), FieldTypeError>> {
    use rayon::prelude::*;
    records
        .par_iter_mut()
        .map(|record| validator.validate_at(record, today))
        .collect()
}

/// Validates every record and counts the outcomes.
///
/// `is_valid` tells whether a record is free of errors once validated; for
/// [`FieldMap`](crate::FieldMap) that is `|r| r.errors().is_empty()`.
pub fn summarize<R, F>(
    validator: &CreditCardFieldsValidator,
    records: &mut [R],
    today: NaiveDate,
    is_valid: F,
) -> BatchSummary
where
    R: Record,
    F: Fn(&R) -> bool,
{
    let mut summary = BatchSummary::default();
    for record in records.iter_mut() {
        match validator.validate_at(record, today) {
            Err(_) => summary.type_errors += 1,
            Ok(()) if is_valid(&*record) => summary.valid += 1,
            Ok(()) => summary.invalid += 1,
        }
    }
    summary
}
