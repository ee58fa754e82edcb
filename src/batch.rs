//! Batch processing for address books and CSV imports.
//!
//! Formats or classifies many numbers against one plan, with optional
//! parallel processing using rayon.
//!
//! # Performance
//!
//! - The plan is resolved once per batch, not per number
//! - Optional parallel processing with the `parallel` feature

use crate::error::FormatError;
use crate::format::PhoneNumberFormatter;
use crate::input::PhoneInput;
use crate::number::PhoneNumber;
use crate::plan::NumberingPlan;

/// Batch formatter for processing many phone numbers against one plan.
///
/// # Example
///
/// ```
/// use jp_phone::BatchFormatter;
///
/// let batch = BatchFormatter::new();
/// let numbers = vec!["09012345678", "0331000000", "0312345678"];
/// let formatted = batch.format_all(&numbers);
///
/// assert_eq!(formatted[0].as_deref(), Some("090-1234-5678"));
/// assert_eq!(formatted[1].as_deref(), Some("03-3100-0000"));
/// assert_eq!(formatted[2].as_deref(), Some("0312345678"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BatchFormatter<'p> {
    formatter: PhoneNumberFormatter<'p>,
}

impl Default for BatchFormatter<'static> {
    fn default() -> Self {
        Self {
            formatter: PhoneNumberFormatter::default(),
        }
    }
}

impl BatchFormatter<'static> {
    /// Creates a batch formatter using the embedded numbering plan.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<'p> BatchFormatter<'p> {
    /// Creates a batch formatter for a specific plan.
    #[inline]
    pub fn with_plan(plan: &'p NumberingPlan) -> Self {
        Self {
            formatter: PhoneNumberFormatter::new(plan),
        }
    }

    /// Formats every number, keeping input order.
    ///
    /// # Arguments
    ///
    /// * `numbers` - Slice of phone number inputs.
    pub fn format_all<S: PhoneInput>(&self, numbers: &[S]) -> Vec<Option<String>> {
        numbers.iter().map(|n| self.formatter.format(n)).collect()
    }

    /// Classifies every number, keeping input order.
    pub fn classify_all<S: AsRef<str>>(
        &self,
        numbers: &[S],
    ) -> Vec<Result<PhoneNumber, FormatError>> {
        numbers
            .iter()
            .map(|n| self.formatter.classify(n.as_ref()))
            .collect()
    }

    /// Returns only the numbers that classify successfully.
    pub fn formattable_only<S: AsRef<str>>(&self, numbers: &[S]) -> Vec<PhoneNumber> {
        numbers
            .iter()
            .filter_map(|n| self.formatter.classify(n.as_ref()).ok())
            .collect()
    }

    /// Classifies a batch and partitions it.
    ///
    /// Returns the classified numbers and, for the rest, their input index
    /// with the reason they fell back.
    pub fn classify_partitioned<S: AsRef<str>>(
        &self,
        numbers: &[S],
    ) -> (Vec<PhoneNumber>, Vec<(usize, FormatError)>) {
        let mut classified = Vec::new();
        let mut rejected = Vec::new();

        for (i, number) in numbers.iter().enumerate() {
            match self.formatter.classify(number.as_ref()) {
                Ok(n) => classified.push(n),
                Err(e) => rejected.push((i, e)),
            }
        }

        (classified, rejected)
    }

    /// Formats numbers in parallel using rayon.
    ///
    /// # Feature
    ///
    /// Requires the `parallel` feature to be enabled.
    #[cfg(feature = "parallel")]
    pub fn format_parallel<S: PhoneInput + Sync>(&self, numbers: &[S]) -> Vec<Option<String>> {
        use rayon::prelude::*;
        let formatter = self.formatter;
        numbers.par_iter().map(|n| formatter.format(n)).collect()
    }

    /// Classifies numbers in parallel using rayon.
    ///
    /// # Feature
    ///
    /// Requires the `parallel` feature to be enabled.
    #[cfg(feature = "parallel")]
    pub fn classify_parallel<S: AsRef<str> + Sync>(
        &self,
        numbers: &[S],
    ) -> Vec<Result<PhoneNumber, FormatError>> {
        use rayon::prelude::*;
        let formatter = self.formatter;
        numbers
            .par_iter()
            .map(|n| formatter.classify(n.as_ref()))
            .collect()
    }
}

/// Formats a slice of numbers with the embedded plan.
///
/// # Example
///
/// ```
/// use jp_phone::batch::format_batch;
///
/// let formatted = format_batch(&["0120123456", ""]);
/// assert_eq!(formatted[0].as_deref(), Some("0120-123-456"));
/// assert_eq!(formatted[1], None);
/// ```
#[inline]
pub fn format_batch<S: PhoneInput>(numbers: &[S]) -> Vec<Option<String>> {
    BatchFormatter::new().format_all(numbers)
}

/// Counts formattable and unformattable numbers without allocating results.
///
/// # Returns
///
/// Tuple of (formattable_count, fallback_count)
///
/// # Example
///
/// ```
/// use jp_phone::batch::count_formattable;
///
/// let numbers = ["09012345678", "0312345678", "0120123456"];
/// assert_eq!(count_formattable(&numbers), (2, 1));
/// ```
pub fn count_formattable<S: AsRef<str>>(numbers: &[S]) -> (usize, usize) {
    let formatter = PhoneNumberFormatter::default();
    let ok = numbers
        .iter()
        .filter(|n| formatter.is_formattable(n.as_ref()))
        .count();
    (ok, numbers.len() - ok)
}
