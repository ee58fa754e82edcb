//! Numbering plan tables.
//!
//! A [`NumberingPlan`] knows, for every area code, how many digits the
//! local exchange code has, which [`NumberCategory`] and [`LengthRule`]
//! apply, and which local exchange values are actually assigned.
//!
//! The crate ships a plan compiled into the binary ([`NumberingPlan::builtin`]),
//! parsed once on first use and shared read-only for the life of the process.
//! Plans that track newer allocations can be loaded from JSON at runtime.
//!
//! # Example
//!
//! ```
//! use jp_phone::plan::NumberingPlan;
//! use jp_phone::NumberCategory;
//!
//! let plan = NumberingPlan::builtin();
//! let mobile = plan.lookup("090").unwrap();
//! assert_eq!(mobile.local_exchange_digits(), 4);
//! assert_eq!(mobile.category(), NumberCategory::Mobile);
//! ```

mod json;
mod ranges;

pub use ranges::{LocalExchangeRange, RangeList};

use crate::category::{LengthRule, NumberCategory};
use crate::error::PlanError;
use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::Path;
use std::sync::OnceLock;

/// Shortest area code, e.g. `03`.
pub const MIN_AREA_CODE_DIGITS: usize = 2;

/// Longest area code, e.g. `04992`.
pub const MAX_AREA_CODE_DIGITS: usize = 5;

/// Longest local exchange code (the 14-digit `0200` space).
pub const MAX_LOCAL_EXCHANGE_DIGITS: usize = 5;

const BUILTIN_PLAN_JSON: &str = include_str!("../../data/numbering_plan.json");

static BUILTIN: OnceLock<NumberingPlan> = OnceLock::new();

/// One area code and everything the plan knows about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AreaCode {
    code: String,
    local_exchange_digits: usize,
    category: NumberCategory,
    length_rule: LengthRule,
    ranges: Option<RangeList>,
}

impl AreaCode {
    /// The area code digits, leading zero included.
    #[inline]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Number of digits following the area code that form the local exchange.
    #[inline]
    pub fn local_exchange_digits(&self) -> usize {
        self.local_exchange_digits
    }

    /// Service category.
    #[inline]
    pub fn category(&self) -> NumberCategory {
        self.category
    }

    /// Total-length rule for complete numbers in this area code.
    #[inline]
    pub fn length_rule(&self) -> LengthRule {
        self.length_rule
    }

    /// Assigned local exchange values, if the plan has a table for this code.
    #[inline]
    pub fn ranges(&self) -> Option<&RangeList> {
        self.ranges.as_ref()
    }

    /// Returns true for ordinary geographic landlines.
    #[inline]
    pub fn is_landline(&self) -> bool {
        self.category.is_landline()
    }
}

/// A read-only numbering plan.
///
/// Area codes are indexed by length so the longest-prefix match does at most
/// four hash lookups.
#[derive(Debug, Clone)]
pub struct NumberingPlan {
    version: String,
    by_length: [HashMap<String, AreaCode>; MAX_AREA_CODE_DIGITS - MIN_AREA_CODE_DIGITS + 1],
}

impl NumberingPlan {
    /// Returns the plan embedded in the crate.
    ///
    /// Parsed on first call; later calls return the same instance.
    pub fn builtin() -> &'static NumberingPlan {
        BUILTIN.get_or_init(|| {
            NumberingPlan::from_json_str(BUILTIN_PLAN_JSON)
                .expect("embedded numbering plan is valid")
        })
    }

    /// Parses a plan from a JSON string.
    ///
    /// The layout matches `data/numbering_plan.json`. Structural problems
    /// are reported as [`PlanError::InvalidPlan`].
    pub fn from_json_str(json: &str) -> Result<Self, PlanError> {
        json::parse(json)
    }

    /// Parses a plan from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self, PlanError> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Self::from_json_str(&content)
    }

    /// Loads a plan from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, PlanError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let plan = Self::from_json_str(&content)?;
        tracing::info!(
            path = %path.display(),
            version = %plan.version,
            area_codes = plan.len(),
            "loaded numbering plan"
        );
        Ok(plan)
    }

    /// The plan's version label.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Looks up an exact area code.
    pub fn lookup(&self, code: &str) -> Option<&AreaCode> {
        self.codes_of_length(code.len())?.get(code)
    }

    fn codes_of_length(&self, length: usize) -> Option<&HashMap<String, AreaCode>> {
        if (MIN_AREA_CODE_DIGITS..=MAX_AREA_CODE_DIGITS).contains(&length) {
            Some(&self.by_length[length - MIN_AREA_CODE_DIGITS])
        } else {
            None
        }
    }

    /// Number of area codes of the given length.
    pub fn count_of_length(&self, length: usize) -> usize {
        self.codes_of_length(length).map_or(0, HashMap::len)
    }

    /// Iterates over all area codes, in no particular order.
    pub fn area_codes(&self) -> impl Iterator<Item = &AreaCode> {
        self.by_length.iter().flat_map(HashMap::values)
    }

    /// Total number of area codes.
    pub fn len(&self) -> usize {
        self.by_length.iter().map(HashMap::len).sum()
    }

    /// Returns true if the plan has no area codes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for NumberingPlan {
    fn default() -> Self {
        Self::builtin().clone()
    }
}
