//! Validator options and the immutable configuration built from them.
//!
//! Each card field is named by a [`FieldSpec`]: either a bare field name or a
//! field name with per-kind message overrides. Roles left unset use the
//! default field names (`cc_number`, `cc_cvv`, ...).
//!
//! # Example
//!
//! ```
//! use cc_fields::{ErrorKind, FieldSpec, Options, Provider};
//!
//! let config = Options::new()
//!     .number("credit_card_number")
//!     .owner(FieldSpec::named("credit_card_owner").with_message(ErrorKind::Blank, "who owns it?"))
//!     .providers([Provider::Visa, Provider::Amex])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.number_field(), "credit_card_number");
//! assert_eq!(config.cvv_field(), "cc_cvv");
//! assert!(config.allows(Provider::Amex));
//! assert!(!config.allows(Provider::Jcb));
//! ```

use crate::error::{ConfigError, ErrorKind};
use crate::message::CustomMessages;
use crate::Provider;

/// Default field names, one per role.
pub mod defaults {
    /// Card number field.
    pub const NUMBER: &str = "cc_number";
    /// CVV field.
    pub const CVV: &str = "cc_cvv";
    /// Expiry month field.
    pub const MONTH: &str = "cc_month";
    /// Expiry year field.
    pub const YEAR: &str = "cc_year";
    /// Card holder field.
    pub const OWNER: &str = "cc_owner";
    /// Card holder first name field.
    pub const FIRST_NAME: &str = "cc_first_name";
    /// Card holder last name field.
    pub const LAST_NAME: &str = "cc_last_name";
}

/// Names one field and, optionally, messages overriding the defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawFieldSpec"))]
pub struct FieldSpec {
    /// The field name. `None` keeps the role's default name.
    pub field: Option<String>,
    /// Override for [`ErrorKind::Blank`].
    pub blank: Option<String>,
    /// Override for [`ErrorKind::Invalid`].
    pub invalid: Option<String>,
    /// Override for [`ErrorKind::NotSupported`].
    pub not_supported: Option<String>,
}

impl FieldSpec {
    /// A spec naming `field` with no message overrides.
    pub fn named(field: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            ..Self::default()
        }
    }

    /// A spec keeping the default field name, for attaching messages only.
    pub fn default_field() -> Self {
        Self::default()
    }

    /// Adds a message override for `kind`.
    pub fn with_message(mut self, kind: ErrorKind, message: impl Into<String>) -> Self {
        *self.message_slot(kind) = Some(message.into());
        self
    }

    /// Returns the override for `kind`, if any.
    pub fn message(&self, kind: ErrorKind) -> Option<&str> {
        match kind {
            ErrorKind::Blank => self.blank.as_deref(),
            ErrorKind::Invalid => self.invalid.as_deref(),
            ErrorKind::NotSupported => self.not_supported.as_deref(),
        }
    }

    fn message_slot(&mut self, kind: ErrorKind) -> &mut Option<String> {
        match kind {
            ErrorKind::Blank => &mut self.blank,
            ErrorKind::Invalid => &mut self.invalid,
            ErrorKind::NotSupported => &mut self.not_supported,
        }
    }
}

impl From<&str> for FieldSpec {
    fn from(field: &str) -> Self {
        Self::named(field)
    }
}

impl From<String> for FieldSpec {
    fn from(field: String) -> Self {
        Self::named(field)
    }
}

/// A field spec as written in a config file: a name or a table.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(untagged)]
enum RawFieldSpec {
    Name(String),
    Detailed {
        field: Option<String>,
        blank: Option<String>,
        invalid: Option<String>,
        not_supported: Option<String>,
    },
}

#[cfg(feature = "serde")]
impl From<RawFieldSpec> for FieldSpec {
    fn from(raw: RawFieldSpec) -> Self {
        match raw {
            RawFieldSpec::Name(field) => Self::named(field),
            RawFieldSpec::Detailed {
                field,
                blank,
                invalid,
                not_supported,
            } => Self {
                field,
                blank,
                invalid,
                not_supported,
            },
        }
    }
}

/// Options accepted when attaching a validator.
///
/// Build a [`Config`] with [`Options::build`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Options {
    /// Card number field.
    pub number: Option<FieldSpec>,
    /// CVV field.
    pub cvv: Option<FieldSpec>,
    /// Expiry month field.
    pub month: Option<FieldSpec>,
    /// Expiry year field.
    pub year: Option<FieldSpec>,
    /// Single card holder field.
    pub owner: Option<FieldSpec>,
    /// Card holder first name field, used together with `last_name`.
    pub first_name: Option<FieldSpec>,
    /// Card holder last name field, used together with `first_name`.
    pub last_name: Option<FieldSpec>,
    /// Allow-list of provider ids. Empty accepts every known provider.
    pub providers: Vec<String>,
}

impl Options {
    /// Creates options with every role at its default.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses options from a JSON document.
    #[cfg(feature = "serde")]
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Sets the card number field.
    pub fn number(mut self, spec: impl Into<FieldSpec>) -> Self {
        self.number = Some(spec.into());
        self
    }

    /// Sets the CVV field.
    pub fn cvv(mut self, spec: impl Into<FieldSpec>) -> Self {
        self.cvv = Some(spec.into());
        self
    }

    /// Sets the expiry month field.
    pub fn month(mut self, spec: impl Into<FieldSpec>) -> Self {
        self.month = Some(spec.into());
        self
    }

    /// Sets the expiry year field.
    pub fn year(mut self, spec: impl Into<FieldSpec>) -> Self {
        self.year = Some(spec.into());
        self
    }

    /// Sets the single card holder field.
    pub fn owner(mut self, spec: impl Into<FieldSpec>) -> Self {
        self.owner = Some(spec.into());
        self
    }

    /// Sets the card holder first name field.
    pub fn first_name(mut self, spec: impl Into<FieldSpec>) -> Self {
        self.first_name = Some(spec.into());
        self
    }

    /// Sets the card holder last name field.
    pub fn last_name(mut self, spec: impl Into<FieldSpec>) -> Self {
        self.last_name = Some(spec.into());
        self
    }

    /// Restricts accepted card numbers to these providers.
    pub fn providers<I>(mut self, providers: I) -> Self
    where
        I: IntoIterator<Item = Provider>,
    {
        self.providers = providers.into_iter().map(|p| p.id().to_string()).collect();
        self
    }

    /// Validates the options and freezes them into a [`Config`].
    ///
    /// The single `owner` field is used when it is given, or when neither
    /// name field is. Giving only one of `first_name`/`last_name` without an
    /// `owner` is an error.
    pub fn build(self) -> Result<Config, ConfigError> {
        let mut messages = CustomMessages::new();

        let number = resolve_field(self.number, "number", defaults::NUMBER, &mut messages)?;
        let cvv = resolve_field(self.cvv, "cvv", defaults::CVV, &mut messages)?;
        let month = resolve_field(self.month, "month", defaults::MONTH, &mut messages)?;
        let year = resolve_field(self.year, "year", defaults::YEAR, &mut messages)?;

        let holder = match (self.owner, self.first_name, self.last_name) {
            (None, Some(first), Some(last)) => Holder::Names {
                first: resolve_field(Some(first), "first_name", defaults::FIRST_NAME, &mut messages)?,
                last: resolve_field(Some(last), "last_name", defaults::LAST_NAME, &mut messages)?,
            },
            (None, Some(_), None) => {
                return Err(ConfigError::IncompleteName {
                    given: "first_name",
                    missing: "last_name",
                })
            }
            (None, None, Some(_)) => {
                return Err(ConfigError::IncompleteName {
                    given: "last_name",
                    missing: "first_name",
                })
            }
            (owner, _, _) => {
                Holder::Owner(resolve_field(owner, "owner", defaults::OWNER, &mut messages)?)
            }
        };

        let mut providers = Vec::with_capacity(self.providers.len());
        for id in &self.providers {
            let provider: Provider = id.parse()?;
            if !providers.contains(&provider) {
                providers.push(provider);
            }
        }

        Ok(Config {
            number,
            cvv,
            month,
            year,
            holder,
            providers,
            messages,
        })
    }
}

fn resolve_field(
    spec: Option<FieldSpec>,
    option: &'static str,
    default: &str,
    messages: &mut CustomMessages,
) -> Result<String, ConfigError> {
    let spec = spec.unwrap_or_default();
    let field = spec.field.clone().unwrap_or_else(|| default.to_string());
    if field.is_empty() {
        return Err(ConfigError::EmptyFieldName { option });
    }
    for kind in ErrorKind::ALL {
        if let Some(message) = spec.message(kind) {
            messages.insert(field.as_str(), kind, message);
        }
    }
    Ok(field)
}

/// How the card holder is identified on the record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Holder {
    /// A single full-name field.
    Owner(String),
    /// Separate first and last name fields.
    Names {
        /// First name field.
        first: String,
        /// Last name field.
        last: String,
    },
}

/// Immutable validator configuration.
///
/// Created once per attachment and shared by every validation pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    number: String,
    cvv: String,
    month: String,
    year: String,
    holder: Holder,
    providers: Vec<Provider>,
    messages: CustomMessages,
}

impl Config {
    /// Card number field name.
    pub fn number_field(&self) -> &str {
        &self.number
    }

    /// CVV field name.
    pub fn cvv_field(&self) -> &str {
        &self.cvv
    }

    /// Expiry month field name.
    pub fn month_field(&self) -> &str {
        &self.month
    }

    /// Expiry year field name.
    pub fn year_field(&self) -> &str {
        &self.year
    }

    /// Card holder field(s).
    pub fn holder(&self) -> &Holder {
        &self.holder
    }

    /// The provider allow-list. Empty means any known provider.
    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    /// Returns true if `provider` passes the allow-list.
    pub fn allows(&self, provider: Provider) -> bool {
        self.providers.is_empty() || self.providers.contains(&provider)
    }

    /// Per-field message overrides.
    pub fn messages(&self) -> &CustomMessages {
        &self.messages
    }

    /// Every field the validator reads, in rule order.
    pub fn validated_fields(&self) -> Vec<&str> {
        let mut fields = vec![
            self.number.as_str(),
            self.cvv.as_str(),
            self.month.as_str(),
            self.year.as_str(),
        ];
        match &self.holder {
            Holder::Owner(owner) => fields.push(owner),
            Holder::Names { first, last } => {
                fields.push(first);
                fields.push(last);
            }
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Options::new().build().unwrap();
        assert_eq!(
            config.validated_fields(),
            ["cc_number", "cc_cvv", "cc_month", "cc_year", "cc_owner"]
        );
        assert!(config.providers().is_empty());
        assert!(config.messages().is_empty());
        for provider in Provider::ALL {
            assert!(config.allows(provider));
        }
    }

    #[test]
    fn test_first_and_last_name() {
        let config = Options::new()
            .first_name("first_name")
            .last_name("last_name")
            .build()
            .unwrap();
        assert_eq!(
            config.holder(),
            &Holder::Names {
                first: "first_name".into(),
                last: "last_name".into()
            }
        );
        assert_eq!(config.validated_fields().len(), 6);
    }

    #[test]
    fn test_owner_wins_over_names() {
        let config = Options::new()
            .owner("holder")
            .first_name("first_name")
            .last_name("last_name")
            .build()
            .unwrap();
        assert_eq!(config.holder(), &Holder::Owner("holder".into()));
    }

    #[test]
    fn test_single_name_is_an_error() {
        assert_eq!(
            Options::new().first_name("first_name").build(),
            Err(ConfigError::IncompleteName {
                given: "first_name",
                missing: "last_name"
            })
        );
        assert_eq!(
            Options::new().last_name("last_name").build(),
            Err(ConfigError::IncompleteName {
                given: "last_name",
                missing: "first_name"
            })
        );
    }

    #[test]
    fn test_messages_follow_field_name() {
        let config = Options::new()
            .month(FieldSpec::named("exp_month").with_message(ErrorKind::Invalid, "bad month"))
            .owner(FieldSpec::default_field().with_message(ErrorKind::Blank, "custom"))
            .build()
            .unwrap();
        assert_eq!(config.messages().get("exp_month", ErrorKind::Invalid), Some("bad month"));
        assert_eq!(config.messages().get("cc_owner", ErrorKind::Blank), Some("custom"));
        assert_eq!(config.messages().get("cc_month", ErrorKind::Invalid), None);
    }

    #[test]
    fn test_providers() {
        let config = Options::new()
            .providers([Provider::Amex, Provider::Visa, Provider::Amex])
            .build()
            .unwrap();
        assert_eq!(config.providers(), [Provider::Amex, Provider::Visa]);
        assert!(!config.allows(Provider::DinersClub));

        let mut options = Options::new();
        options.providers = vec!["visa".into(), "laser".into()];
        assert_eq!(
            options.build(),
            Err(ConfigError::UnknownProvider("laser".into()))
        );
    }

    #[test]
    fn test_empty_field_name() {
        assert_eq!(
            Options::new().cvv("").build(),
            Err(ConfigError::EmptyFieldName { option: "cvv" })
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_from_json() {
        let options = Options::from_json(
            r#"{
                "number": "credit_card_number",
                "month": { "field": "credit_card_month", "invalid": "bad month", "inclusion": "ignored" },
                "owner": { "blank": "custom" },
                "providers": ["amex", "visa"]
            }"#,
        )
        .unwrap();
        let config = options.build().unwrap();

        assert_eq!(config.number_field(), "credit_card_number");
        assert_eq!(config.month_field(), "credit_card_month");
        assert_eq!(config.cvv_field(), "cc_cvv");
        assert_eq!(
            config.messages().get("credit_card_month", ErrorKind::Invalid),
            Some("bad month")
        );
        assert_eq!(config.messages().get("cc_owner", ErrorKind::Blank), Some("custom"));
        assert_eq!(config.providers(), [Provider::Amex, Provider::Visa]);
    }
}
