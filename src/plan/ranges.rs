//! Local exchange range lists.

use std::cmp::Ordering;

/// An inclusive range of local exchange code values.
///
/// Values are compared numerically, so the local exchange `"064"` is `64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocalExchangeRange {
    /// Start of the range (inclusive).
    pub min: u32,
    /// End of the range (inclusive).
    pub max: u32,
}

impl LocalExchangeRange {
    /// Creates a new range.
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Creates a range holding a single value.
    pub const fn single(value: u32) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    /// Checks if a value falls within this range.
    #[inline]
    pub const fn contains(&self, value: u32) -> bool {
        value >= self.min && value <= self.max
    }

    /// Checks if two ranges share at least one value.
    #[inline]
    pub const fn overlaps(&self, other: &Self) -> bool {
        self.min <= other.max && other.min <= self.max
    }
}

impl PartialOrd for LocalExchangeRange {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for LocalExchangeRange {
    fn cmp(&self, other: &Self) -> Ordering {
        self.min.cmp(&other.min).then(self.max.cmp(&other.max))
    }
}

/// The assigned local exchange codes of one area code.
///
/// A value is assigned iff it lies in one of the ranges and is not one of
/// the excluded singletons. Ranges are kept sorted so lookups are a binary
/// search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeList {
    ranges: Vec<LocalExchangeRange>,
    excluded: Vec<u32>,
}

impl RangeList {
    /// Creates a range list, sorting ranges and exclusions.
    pub fn new(mut ranges: Vec<LocalExchangeRange>, mut excluded: Vec<u32>) -> Self {
        ranges.sort();
        excluded.sort_unstable();
        excluded.dedup();
        Self { ranges, excluded }
    }

    /// Returns the ranges, sorted by their start.
    pub fn ranges(&self) -> &[LocalExchangeRange] {
        &self.ranges
    }

    /// Returns the excluded values, sorted.
    pub fn excluded(&self) -> &[u32] {
        &self.excluded
    }

    /// Returns true if the value is assigned.
    pub fn contains(&self, value: u32) -> bool {
        let idx = self.ranges.partition_point(|r| r.min <= value);
        idx > 0
            && self.ranges[idx - 1].contains(value)
            && self.excluded.binary_search(&value).is_err()
    }

    /// Returns the first pair of overlapping ranges, if any.
    pub fn first_overlap(&self) -> Option<(LocalExchangeRange, LocalExchangeRange)> {
        self.ranges
            .windows(2)
            .find(|pair| pair[0].overlaps(&pair[1]))
            .map(|pair| (pair[0], pair[1]))
    }

    /// Returns true if the list has no ranges.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}
