//! The record capability the validator works against.
//!
//! The validator never owns the data it checks. It reads named fields
//! through [`Record::field`] and reports failures through
//! [`Record::add_error`]. [`FieldMap`] is a ready-made record for callers
//! that keep form input in a map.

use crate::error::FieldError;
use std::collections::BTreeMap;
use std::fmt;

/// The current value of a named field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// The field is unset (null).
    Absent,
    /// The field holds text.
    Text(&'a str),
    /// The field holds something that is not text.
    Other {
        /// Name of the held type, for error reporting.
        type_name: &'static str,
    },
}

impl<'a> FieldValue<'a> {
    /// Returns the text, treating absent as empty. `None` for non-text.
    #[inline]
    pub fn as_text(&self) -> Option<&'a str> {
        match *self {
            Self::Absent => Some(""),
            Self::Text(s) => Some(s),
            Self::Other { .. } => None,
        }
    }

    /// Returns true for absent, empty, or whitespace-only text.
    #[inline]
    pub fn is_blank(&self) -> bool {
        self.as_text().is_some_and(|s| s.trim().is_empty())
    }
}

impl<'a> From<Option<&'a str>> for FieldValue<'a> {
    fn from(value: Option<&'a str>) -> Self {
        value.map_or(Self::Absent, Self::Text)
    }
}

/// Read access to field values plus an error sink.
///
/// Implementations keep at most one error per field; the validator only
/// calls [`add_error`](Record::add_error) for fields where
/// [`has_error`](Record::has_error) is false.
pub trait Record {
    /// Returns the current value of `name`.
    fn field(&self, name: &str) -> FieldValue<'_>;

    /// Returns true if `name` already carries an error.
    fn has_error(&self, name: &str) -> bool;

    /// Records an error against `name`.
    fn add_error(&mut self, name: &str, error: FieldError);
}

/// Accumulated field errors, in the order they were first recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Errors {
    entries: Vec<(String, FieldError)>,
}

impl Errors {
    /// Creates an empty error set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `error` against `field` unless the field already has one.
    ///
    /// Returns true if the error was recorded.
    pub fn add(&mut self, field: &str, error: FieldError) -> bool {
        if self.contains(field) {
            return false;
        }
        self.entries.push((field.to_string(), error));
        true
    }

    /// Returns the error recorded against `field`.
    pub fn get(&self, field: &str) -> Option<&FieldError> {
        self.entries
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, error)| error)
    }

    /// Returns true if `field` has an error.
    pub fn contains(&self, field: &str) -> bool {
        self.get(field).is_some()
    }

    /// Number of fields with an error.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no field has an error.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(field, error)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldError)> {
        self.entries.iter().map(|(name, error)| (name.as_str(), error))
    }

    /// Removes every error.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[derive(Clone, PartialEq, Eq)]
enum Slot {
    Text(String),
    Other(&'static str),
}

/// A map-backed [`Record`].
///
/// `Debug` output never shows field values, only which fields are set.
#[derive(Clone, Default)]
pub struct FieldMap {
    values: BTreeMap<String, Slot>,
    errors: Errors,
}

impl FieldMap {
    /// Creates an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a text field.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.values.insert(name.into(), Slot::Text(value.into()));
        self
    }

    /// Sets a field to a non-text value.
    ///
    /// Only the value's type name is kept; validating a record with such a
    /// field fails with a [`FieldTypeError`](crate::FieldTypeError).
    pub fn set_non_text<T>(&mut self, name: impl Into<String>, _value: T) -> &mut Self {
        self.set_type_name(name, std::any::type_name::<T>())
    }

    /// Sets a field to a non-text value described only by its type name.
    pub fn set_type_name(&mut self, name: impl Into<String>, type_name: &'static str) -> &mut Self {
        self.values.insert(name.into(), Slot::Other(type_name));
        self
    }

    /// Unsets a field.
    pub fn remove(&mut self, name: &str) -> &mut Self {
        self.values.remove(name);
        self
    }

    /// Returns the errors recorded so far.
    pub fn errors(&self) -> &Errors {
        &self.errors
    }

    /// Returns the errors mutably, e.g. to clear them between passes.
    pub fn errors_mut(&mut self) -> &mut Errors {
        &mut self.errors
    }

    /// Builds a record from a JSON object.
    ///
    /// Strings become text fields and `null` leaves the field unset. Any
    /// other JSON type is kept as a non-text value.
    #[cfg(feature = "serde")]
    pub fn from_json(object: &serde_json::Map<String, serde_json::Value>) -> Self {
        use serde_json::Value;

        let mut record = Self::new();
        for (name, value) in object {
            match value {
                Value::Null => {}
                Value::String(s) => {
                    record.set(name.as_str(), s.as_str());
                }
                Value::Bool(_) => {
                    record.set_type_name(name.as_str(), "Boolean");
                }
                Value::Number(_) => {
                    record.set_type_name(name.as_str(), "Number");
                }
                Value::Array(_) => {
                    record.set_type_name(name.as_str(), "Array");
                }
                Value::Object(_) => {
                    record.set_type_name(name.as_str(), "Object");
                }
            }
        }
        record
    }
}

impl Record for FieldMap {
    fn field(&self, name: &str) -> FieldValue<'_> {
        match self.values.get(name) {
            None => FieldValue::Absent,
            Some(Slot::Text(s)) => FieldValue::Text(s.as_str()),
            Some(Slot::Other(type_name)) => FieldValue::Other {
                type_name: *type_name,
            },
        }
    }

    fn has_error(&self, name: &str) -> bool {
        self.errors.contains(name)
    }

    fn add_error(&mut self, name: &str, error: FieldError) {
        self.errors.add(name, error);
    }
}

impl fmt::Debug for FieldMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Values are card data; only show which fields are set
        f.debug_struct("FieldMap")
            .field("fields", &self.values.keys().collect::<Vec<_>>())
            .field("errors", &self.errors)
            .finish()
    }
}
