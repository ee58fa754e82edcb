//! Streaming formatting for numbers read line by line.
//!
//! Iterator adapters that format or classify numbers as they arrive, so a
//! large CSV column or stdin never has to be loaded into memory.
//!
//! # Example
//!
//! ```
//! use jp_phone::stream::FormatExt;
//!
//! let numbers = vec!["09012345678", "0312345678", "0120123456"];
//! let classified = numbers
//!     .iter()
//!     .copied()
//!     .classify_phone_numbers()
//!     .filter(|r| r.is_ok())
//!     .count();
//!
//! assert_eq!(classified, 2);
//! ```

use crate::error::FormatError;
use crate::format::PhoneNumberFormatter;
use crate::input::PhoneInput;
use crate::number::PhoneNumber;

/// Formats each number yielded by the inner iterator.
///
/// Created by [`FormatExt::format_phone_numbers`].
#[derive(Debug, Clone)]
pub struct FormatStream<'p, I> {
    inner: I,
    formatter: PhoneNumberFormatter<'p>,
}

impl<'p, I> FormatStream<'p, I> {
    /// Wraps an iterator, formatting against the given formatter's plan.
    #[inline]
    pub fn new(inner: I, formatter: PhoneNumberFormatter<'p>) -> Self {
        Self { inner, formatter }
    }

    /// Consumes the stream and returns the inner iterator.
    #[inline]
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<I, S> Iterator for FormatStream<'_, I>
where
    I: Iterator<Item = S>,
    S: PhoneInput,
{
    type Item = Option<String>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|s| self.formatter.format(s))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I, S> ExactSizeIterator for FormatStream<'_, I>
where
    I: ExactSizeIterator<Item = S>,
    S: PhoneInput,
{
}

/// Classifies each number yielded by the inner iterator.
///
/// Created by [`FormatExt::classify_phone_numbers`].
#[derive(Debug, Clone)]
pub struct ClassifyStream<'p, I> {
    inner: I,
    formatter: PhoneNumberFormatter<'p>,
}

impl<'p, I> ClassifyStream<'p, I> {
    /// Wraps an iterator, classifying against the given formatter's plan.
    #[inline]
    pub fn new(inner: I, formatter: PhoneNumberFormatter<'p>) -> Self {
        Self { inner, formatter }
    }
}

impl<I, S> Iterator for ClassifyStream<'_, I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = Result<PhoneNumber, FormatError>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|s| self.formatter.classify(s.as_ref()))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I, S> ExactSizeIterator for ClassifyStream<'_, I>
where
    I: ExactSizeIterator<Item = S>,
    S: AsRef<str>,
{
}

impl<I, S> DoubleEndedIterator for ClassifyStream<'_, I>
where
    I: DoubleEndedIterator<Item = S>,
    S: AsRef<str>,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner
            .next_back()
            .map(|s| self.formatter.classify(s.as_ref()))
    }
}

/// Yields only the numbers that classify successfully.
///
/// Created by [`FormatExt::classified_only`].
#[derive(Debug, Clone)]
pub struct ClassifiedOnlyStream<'p, I> {
    inner: I,
    formatter: PhoneNumberFormatter<'p>,
}

impl<'p, I> ClassifiedOnlyStream<'p, I> {
    /// Wraps an iterator, skipping numbers that fall back.
    #[inline]
    pub fn new(inner: I, formatter: PhoneNumberFormatter<'p>) -> Self {
        Self { inner, formatter }
    }
}

impl<I, S> Iterator for ClassifiedOnlyStream<'_, I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = PhoneNumber;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let formatter = self.formatter;
        self.inner
            .by_ref()
            .find_map(|s| formatter.classify(s.as_ref()).ok())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.inner.size_hint();
        (0, upper)
    }
}

/// Extension trait adding phone number formatting to any iterator of
/// string-like items.
///
/// The adapters use the embedded numbering plan; the `*_with` variants take
/// a formatter bound to a custom plan.
pub trait FormatExt: Iterator + Sized {
    /// Formats each number. Yields `Option<String>` like
    /// [`format_phone_number`](crate::format_phone_number).
    ///
    /// # Example
    ///
    /// ```
    /// use jp_phone::stream::FormatExt;
    ///
    /// let input = "090-1234-5678\n03 3100 0000\n";
    /// let formatted: Vec<_> = input.lines().format_phone_numbers().flatten().collect();
    /// assert_eq!(formatted, vec!["090-1234-5678", "03-3100-0000"]);
    /// ```
    fn format_phone_numbers(self) -> FormatStream<'static, Self> {
        self.format_phone_numbers_with(PhoneNumberFormatter::default())
    }

    /// Formats each number with a specific formatter.
    fn format_phone_numbers_with<'p>(self, formatter: PhoneNumberFormatter<'p>) -> FormatStream<'p, Self>;

    /// Classifies each number.
    fn classify_phone_numbers(self) -> ClassifyStream<'static, Self> {
        self.classify_phone_numbers_with(PhoneNumberFormatter::default())
    }

    /// Classifies each number with a specific formatter.
    fn classify_phone_numbers_with<'p>(
        self,
        formatter: PhoneNumberFormatter<'p>,
    ) -> ClassifyStream<'p, Self>;

    /// Yields only the numbers that classify successfully.
    ///
    /// # Example
    ///
    /// ```
    /// use jp_phone::stream::FormatExt;
    /// use jp_phone::NumberCategory;
    ///
    /// let numbers = ["09012345678", "bad", "0120123456"];
    /// let toll_free = numbers
    ///     .iter()
    ///     .classified_only()
    ///     .filter(|n| n.category() == NumberCategory::TollFree)
    ///     .count();
    /// assert_eq!(toll_free, 1);
    /// ```
    fn classified_only(self) -> ClassifiedOnlyStream<'static, Self> {
        ClassifiedOnlyStream::new(self, PhoneNumberFormatter::default())
    }
}

impl<I: Iterator + Sized> FormatExt for I {
    #[inline]
    fn format_phone_numbers_with<'p>(self, formatter: PhoneNumberFormatter<'p>) -> FormatStream<'p, Self> {
        FormatStream::new(self, formatter)
    }

    #[inline]
    fn classify_phone_numbers_with<'p>(
        self,
        formatter: PhoneNumberFormatter<'p>,
    ) -> ClassifyStream<'p, Self> {
        ClassifyStream::new(self, formatter)
    }
}
