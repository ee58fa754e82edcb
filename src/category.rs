//! Number categories and their total-length rules.
//!
//! The Japanese numbering plan groups area codes into ordinary geographic
//! landlines and a handful of non-geographic service spaces. The category
//! decides which range table validates the local exchange code, and the
//! [`LengthRule`] decides how many digits a complete number has.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Service category of an area code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberCategory {
    /// Ordinary geographic fixed line, e.g. `03`, `045`, `0467`.
    Landline,
    /// Mobile phones, `070` / `080` / `090`.
    Mobile,
    /// IP phones, `050`.
    IpPhone,
    /// Toll-free numbers, `0120` / `0800`.
    TollFree,
    /// Paging and M2M numbers, `020` / `0200`.
    Pager,
    /// Fixed-mobile convergence, `060`.
    Fmc,
    /// Specific-connection numbers, `091`.
    SpecialConnection,
    /// Caller-pays shared-cost numbers (navigation dial), `0570`.
    SharedCost,
    /// Mass-calling reception numbers, `0180`.
    MassCalling,
    /// Premium information-fee numbers, `0990`.
    Premium,
}

impl NumberCategory {
    /// Returns true for ordinary geographic landlines.
    #[inline]
    pub const fn is_landline(&self) -> bool {
        matches!(self, Self::Landline)
    }

    /// Returns a human-readable name for the category.
    #[inline]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Landline => "Landline",
            Self::Mobile => "Mobile",
            Self::IpPhone => "IP Phone",
            Self::TollFree => "Toll Free",
            Self::Pager => "Pager/M2M",
            Self::Fmc => "FMC",
            Self::SpecialConnection => "Special Connection",
            Self::SharedCost => "Shared Cost",
            Self::MassCalling => "Mass Calling",
            Self::Premium => "Premium",
        }
    }
}

impl fmt::Display for NumberCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Number of digits a complete number must have, area code included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LengthRule {
    /// Exactly this many digits.
    Exact(usize),
    /// Any count in the inclusive range.
    Between {
        /// Minimum digit count (inclusive).
        min: usize,
        /// Maximum digit count (inclusive).
        max: usize,
    },
}

impl LengthRule {
    /// Rule for ordinary landlines and every code without a special rule.
    pub const DEFAULT: LengthRule = LengthRule::Exact(10);

    /// Returns true if a number of `length` digits satisfies the rule.
    #[inline]
    pub const fn accepts(&self, length: usize) -> bool {
        match *self {
            Self::Exact(n) => length == n,
            Self::Between { min, max } => length >= min && length <= max,
        }
    }

    /// Smallest digit count the rule accepts.
    #[inline]
    pub const fn min(&self) -> usize {
        match *self {
            Self::Exact(n) => n,
            Self::Between { min, .. } => min,
        }
    }

    /// Largest digit count the rule accepts.
    #[inline]
    pub const fn max(&self) -> usize {
        match *self {
            Self::Exact(n) => n,
            Self::Between { max, .. } => max,
        }
    }
}

impl Default for LengthRule {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for LengthRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exact(n) => write!(f, "{}", n),
            Self::Between { min, max } => write!(f, "{} to {}", min, max),
        }
    }
}
