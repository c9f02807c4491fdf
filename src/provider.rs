//! Card providers recognized by the field validator.
//!
//! This module provides the `Provider` enum identifying the card networks
//! a number can belong to, along with their stable snake_case identifiers
//! used in allow-lists and configuration files.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Supported card providers.
///
/// Each variant is recognized by a fixed prefix and length rule; see
/// [`detect_provider`](crate::detect::detect_provider) for the exact table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Provider {
    /// Visa - Prefix 4, lengths 13, 16
    Visa,
    /// Mastercard - Prefix 51-55, 2221-2720, length 16
    MasterCard,
    /// Maestro - Prefix 50, 56-58, 6304, 6390, 67, length 12-19
    Maestro,
    /// Diners Club - Prefix 300-305, 36, 38, length 14
    DinersClub,
    /// American Express - Prefix 34, 37, length 15
    Amex,
    /// Discover - Prefix 6011, 65, length 16
    Discover,
    /// JCB - Prefix 2131, 1800 (length 15) or 35 (length 16)
    Jcb,
    /// Solo - Prefix 63345-63349, 6767, length 16, 18, 19
    Solo,
    /// China UnionPay - Prefix 620-625, length 16-19
    ChinaUnion,
    /// Dankort - Prefix 5019, length 16
    Dankort,
}

impl Provider {
    /// Every provider, in declaration order.
    pub const ALL: [Provider; 10] = [
        Self::Visa,
        Self::MasterCard,
        Self::Maestro,
        Self::DinersClub,
        Self::Amex,
        Self::Discover,
        Self::Jcb,
        Self::Solo,
        Self::ChinaUnion,
        Self::Dankort,
    ];

    /// Returns the stable identifier used in allow-lists.
    #[inline]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::Visa => "visa",
            Self::MasterCard => "master_card",
            Self::Maestro => "maestro",
            Self::DinersClub => "diners_club",
            Self::Amex => "amex",
            Self::Discover => "discover",
            Self::Jcb => "jcb",
            Self::Solo => "solo",
            Self::ChinaUnion => "china_union",
            Self::Dankort => "dankort",
        }
    }

    /// Returns a human-readable name for the provider.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Visa => "Visa",
            Self::MasterCard => "Mastercard",
            Self::Maestro => "Maestro",
            Self::DinersClub => "Diners Club",
            Self::Amex => "American Express",
            Self::Discover => "Discover",
            Self::Jcb => "JCB",
            Self::Solo => "Solo",
            Self::ChinaUnion => "China UnionPay",
            Self::Dankort => "Dankort",
        }
    }

    /// Returns true if numbers of this provider go through the Luhn check.
    ///
    /// China UnionPay issuing ranges do not reliably satisfy mod-10.
    #[inline]
    pub const fn uses_luhn(&self) -> bool {
        !matches!(self, Self::ChinaUnion)
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Provider {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.id() == s)
            .ok_or_else(|| ConfigError::UnknownProvider(s.to_string()))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Provider {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let id = String::deserialize(deserializer)?;
        id.parse().map_err(serde::de::Error::custom)
    }
}
