//! Error types for phone number classification.
//!
//! A [`FormatError`] never escapes [`format_phone_number`](crate::format_phone_number):
//! the formatter turns every one of them into the normalized, unhyphenated digits.
//! They are exposed through [`classify`](crate::classify) so callers can tell
//! *why* a number was left alone.

use crate::category::LengthRule;
use std::fmt;

/// Reasons a phone number could not be classified.
///
/// Each variant names the stage of the pipeline that gave up, which makes
/// the fallback explainable to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The input string was empty.
    Empty,

    /// The input starts with `+` and is treated as an international number.
    International,

    /// A character other than a digit survived normalization.
    InvalidCharacter {
        /// The position in the normalized string (0-indexed, in characters).
        position: usize,
        /// The offending character.
        character: char,
    },

    /// No prefix of length 5, 4, 3 or 2 is a known area code.
    UnknownAreaCode,

    /// The total digit count does not satisfy the area code's length rule.
    InvalidLength {
        /// The matched area code.
        area_code: String,
        /// The actual number of digits.
        length: usize,
        /// The rule that was violated.
        rule: LengthRule,
    },

    /// A landline local exchange code starts with `0` or `1`.
    ReservedLeadingDigit {
        /// The matched area code.
        area_code: String,
        /// The rejected local exchange code.
        local_exchange: String,
    },

    /// The local exchange code is outside every assigned range, or excluded.
    UnassignedLocalExchange {
        /// The matched area code.
        area_code: String,
        /// The rejected local exchange code.
        local_exchange: String,
    },

    /// The numbering plan has no range table for this area code.
    NoRangeTable {
        /// The matched area code.
        area_code: String,
    },
}

impl fmt::Display for FormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "phone number is empty"),

            Self::International => {
                write!(f, "international numbers (leading '+') are not reformatted")
            }

            Self::InvalidCharacter {
                position,
                character,
            } => {
                write!(
                    f,
                    "invalid character '{}' at position {} after normalization",
                    character.escape_default(),
                    position
                )
            }

            Self::UnknownAreaCode => write!(f, "no known area code prefix"),

            Self::InvalidLength {
                area_code,
                length,
                rule,
            } => {
                write!(
                    f,
                    "numbers in area code {} must have {} digits, got {}",
                    area_code, rule, length
                )
            }

            Self::ReservedLeadingDigit {
                area_code,
                local_exchange,
            } => {
                write!(
                    f,
                    "local exchange {} in area code {} starts with a reserved digit",
                    local_exchange, area_code
                )
            }

            Self::UnassignedLocalExchange {
                area_code,
                local_exchange,
            } => {
                write!(
                    f,
                    "local exchange {} is not assigned in area code {}",
                    local_exchange, area_code
                )
            }

            Self::NoRangeTable { area_code } => {
                write!(f, "no local exchange ranges known for area code {}", area_code)
            }
        }
    }
}

impl std::error::Error for FormatError {}

/// Errors raised while loading a numbering plan.
#[derive(Debug)]
pub enum PlanError {
    /// Failed to read the plan file.
    Io(std::io::Error),
    /// The plan is not valid JSON or does not match the expected shape.
    Parse(String),
    /// The plan parsed but violates a structural invariant.
    InvalidPlan(String),
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Parse(s) => write!(f, "Parse error: {}", s),
            Self::InvalidPlan(s) => write!(f, "Invalid numbering plan: {}", s),
        }
    }
}

impl std::error::Error for PlanError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for PlanError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
