//! Error message resolution.
//!
//! A message is looked up in two steps: a per-field override configured by
//! the caller, then the [`MessageCatalog`] default for the error kind.

use crate::error::ErrorKind;
use std::collections::BTreeMap;

/// Supplies the default message for an error kind.
///
/// Implement this to plug in a translation backend. Closures taking an
/// [`ErrorKind`] and returning a `String` implement it too.
pub trait MessageCatalog {
    /// Returns the message for `kind`.
    fn translate(&self, kind: ErrorKind) -> String;
}

impl<F> MessageCatalog for F
where
    F: Fn(ErrorKind) -> String,
{
    fn translate(&self, kind: ErrorKind) -> String {
        self(kind)
    }
}

/// English messages matching the wording most web frameworks ship.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCatalog;

impl MessageCatalog for DefaultCatalog {
    fn translate(&self, kind: ErrorKind) -> String {
        match kind {
            ErrorKind::Blank => "can't be blank",
            ErrorKind::Invalid => "is invalid",
            ErrorKind::NotSupported => "is not supported",
        }
        .to_string()
    }
}

/// Per-field message overrides, keyed by field name then error kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomMessages {
    by_field: BTreeMap<String, BTreeMap<ErrorKind, String>>,
}

impl CustomMessages {
    /// Creates an empty set of overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the override for one field and kind, replacing any earlier one.
    pub fn insert(&mut self, field: impl Into<String>, kind: ErrorKind, message: impl Into<String>) {
        self.by_field
            .entry(field.into())
            .or_default()
            .insert(kind, message.into());
    }

    /// Returns the override for a field and kind, if configured.
    pub fn get(&self, field: &str, kind: ErrorKind) -> Option<&str> {
        self.by_field
            .get(field)
            .and_then(|kinds| kinds.get(&kind))
            .map(String::as_str)
    }

    /// Returns true if no override is configured.
    pub fn is_empty(&self) -> bool {
        self.by_field.values().all(BTreeMap::is_empty)
    }
}

/// Resolves the message for a failed rule.
pub struct MessageResolver<'a> {
    custom: &'a CustomMessages,
    catalog: &'a dyn MessageCatalog,
}

impl<'a> MessageResolver<'a> {
    /// Creates a resolver over the given overrides and fallback catalog.
    pub fn new(custom: &'a CustomMessages, catalog: &'a dyn MessageCatalog) -> Self {
        Self { custom, catalog }
    }

    /// Returns the custom message for `field`/`kind` if one is configured,
    /// otherwise the catalog's message for `kind`.
    pub fn resolve(&self, field: &str, kind: ErrorKind) -> String {
        match self.custom.get(field, kind) {
            Some(message) => message.to_string(),
            None => self.catalog.translate(kind),
        }
    }
}
