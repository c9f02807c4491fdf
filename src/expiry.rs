//! Expiry month and year field rules.
//!
//! Card forms carry the expiry as two separate fields: a month (`"1"`-`"12"`,
//! optionally zero-padded) and a two-digit year. Two-digit years always mean
//! the 21st century (`"29"` is 2029).
//!
//! A card stays valid through the last day of its expiry month, so an expiry
//! of the current month is not yet past.
//!
//! All rules take "today" as an argument; [`Clock`] supplies it so callers
//! can pin the date in tests.
//!
//! # Example
//!
//! ```
//! use cc_fields::expiry::{check_expiry, parse_month, parse_year, ExpiredField};
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2026, 10, 16).unwrap();
//!
//! assert_eq!(parse_month("1"), Some(1));
//! assert_eq!(parse_month("13"), None);
//! assert_eq!(parse_year("27", today), Some(2027));
//! assert_eq!(parse_year("25", today), None);
//!
//! assert_eq!(check_expiry(2026, 10, today), None);
//! assert_eq!(check_expiry(2026, 1, today), Some(ExpiredField::Month));
//! ```

use chrono::{Datelike, Local, NaiveDate};

/// The century prefix applied to two-digit years.
pub const CENTURY: i32 = 2000;

/// Source of the current date.
pub trait Clock {
    /// Returns today's date.
    fn today(&self) -> NaiveDate;
}

/// Reads the date from the local system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Always returns the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Which expiry field an elapsed date is reported against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiredField {
    /// The expiry year lies before the current year.
    Year,
    /// The expiry year is the current year but the month has elapsed.
    Month,
}

/// Parses a month field value.
///
/// Returns the month when the whole value is ASCII digits with a numeric
/// value of 1 to 12. Signs, decimals and surrounding whitespace are rejected.
pub fn parse_month(value: &str) -> Option<u32> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    value.parse().ok().filter(|m| (1..=12).contains(m))
}

/// Parses a two-digit year field value into a four-digit year.
///
/// Returns `None` unless the value is exactly two ASCII digits and the year
/// is not before `today`'s year.
pub fn parse_year(value: &str, today: NaiveDate) -> Option<i32> {
    match value.as_bytes() {
        &[tens @ b'0'..=b'9', ones @ b'0'..=b'9'] => {
            let year = CENTURY + ((tens - b'0') * 10 + (ones - b'0')) as i32;
            (year >= today.year()).then_some(year)
        }
        _ => None,
    }
}

/// Returns the last calendar day of the given month.
///
/// Returns `None` for a month outside 1-12 or a year chrono cannot represent.
pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let next_month_start = if month == 12 {
        NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?
    } else {
        NaiveDate::from_ymd_opt(year, month.checked_add(1)?, 1)?
    };
    // Reject month 0, which would otherwise resolve to January's start
    NaiveDate::from_ymd_opt(year, month, 1)?;
    next_month_start.pred_opt()
}

/// Returns true if the whole of the given month lies before `today`.
///
/// An unrepresentable month is never reported as past.
pub fn month_end_is_past(year: i32, month: u32, today: NaiveDate) -> bool {
    last_day_of_month(year, month).is_some_and(|end| end < today)
}

/// Checks an already-parsed expiry against `today`.
///
/// Returns the field to blame when the expiry month has fully elapsed, or
/// `None` when the card is still current.
pub fn check_expiry(year: i32, month: u32, today: NaiveDate) -> Option<ExpiredField> {
    let end = last_day_of_month(year, month)?;
    if end >= today {
        return None;
    }
    if end.year() < today.year() {
        Some(ExpiredField::Year)
    } else {
        Some(ExpiredField::Month)
    }
}
