//! Error types for credit card field validation.
//!
//! Two disjoint classes live here:
//!
//! - [`ErrorKind`] / [`FieldError`] describe *validation* outcomes. They are
//!   recorded on the record being validated and never returned as `Err`.
//! - [`FieldTypeError`] and [`ConfigError`] describe *usage* failures: a field
//!   holding something other than text, or an options set that cannot be
//!   turned into a configuration.

use std::fmt;

/// The taxonomy of per-field validation failures.
///
/// A field carries at most one of these per validation pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ErrorKind {
    /// The field is absent, empty, or whitespace only.
    Blank,
    /// The field is present but fails a format, checksum or date rule.
    Invalid,
    /// The card number is valid but its provider is not in the allow-list.
    NotSupported,
}

impl ErrorKind {
    /// All kinds, in the order they are documented.
    pub const ALL: [ErrorKind; 3] = [Self::Blank, Self::Invalid, Self::NotSupported];

    /// Returns the snake_case key used in configuration and message catalogs.
    #[inline]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Blank => "blank",
            Self::Invalid => "invalid",
            Self::NotSupported => "not_supported",
        }
    }

    /// Parses a snake_case key. Unrecognized keys yield `None`.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "blank" => Some(Self::Blank),
            "invalid" => Some(Self::Invalid),
            "not_supported" => Some(Self::NotSupported),
            _ => None,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A validation error recorded against a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldError {
    /// What went wrong.
    pub kind: ErrorKind,
    /// The resolved, human-readable message.
    pub message: String,
}

impl FieldError {
    /// Creates a new field error.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// A validated field holds a value that is neither absent nor text.
///
/// This is a usage error, not a validation failure: the whole validation
/// call is aborted before any [`FieldError`] is recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldTypeError {
    /// The configured field name.
    pub field: String,
    /// The name of the type that was found instead of a string.
    pub type_name: &'static str,
}

impl fmt::Display for FieldTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} is a {}, String expected",
            self.field, self.type_name
        )
    }
}

impl std::error::Error for FieldTypeError {}

/// Errors raised while turning [`Options`](crate::Options) into a
/// [`Config`](crate::Config).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Only one of `first_name`/`last_name` was given and no `owner`.
    IncompleteName {
        /// The option that was supplied.
        given: &'static str,
        /// The option that is missing.
        missing: &'static str,
    },

    /// A provider id in the allow-list is not a known provider.
    UnknownProvider(String),

    /// A field spec resolved to an empty field name.
    EmptyFieldName {
        /// The option whose field name is empty.
        option: &'static str,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompleteName { given, missing } => {
                write!(
                    f,
                    "`{}` given without `{}`: set both, or use `owner`",
                    given, missing
                )
            }
            Self::UnknownProvider(id) => write!(f, "unknown card provider `{}`", id),
            Self::EmptyFieldName { option } => {
                write!(f, "option `{}` has an empty field name", option)
            }
        }
    }
}

impl std::error::Error for ConfigError {}
