//! Classified phone numbers.

use crate::category::NumberCategory;
use serde::Serialize;
use std::fmt;

/// A phone number split into area code, local exchange and subscriber parts.
///
/// Only produced by successful classification, so every instance has passed
/// the length and local exchange checks of the plan it was classified with.
///
/// `Display` prints the hyphenated form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PhoneNumber {
    area_code: String,
    local_exchange: String,
    local_exchange_value: u32,
    subscriber: String,
    category: NumberCategory,
}

impl PhoneNumber {
    #[inline]
    pub(crate) fn new(
        area_code: &str,
        local_exchange: &str,
        local_exchange_value: u32,
        subscriber: &str,
        category: NumberCategory,
    ) -> Self {
        Self {
            area_code: area_code.to_string(),
            local_exchange: local_exchange.to_string(),
            local_exchange_value,
            subscriber: subscriber.to_string(),
            category,
        }
    }

    /// The area code, e.g. `"03"` or `"0120"`.
    #[inline]
    pub fn area_code(&self) -> &str {
        &self.area_code
    }

    /// The local exchange code as written, leading zeros kept.
    #[inline]
    pub fn local_exchange(&self) -> &str {
        &self.local_exchange
    }

    /// The local exchange code as a number, as used for range checks.
    #[inline]
    pub fn local_exchange_value(&self) -> u32 {
        self.local_exchange_value
    }

    /// The subscriber number. Empty only for short special-connection numbers.
    #[inline]
    pub fn subscriber(&self) -> &str {
        &self.subscriber
    }

    /// The category of the area code.
    #[inline]
    pub fn category(&self) -> NumberCategory {
        self.category
    }

    /// Total number of digits.
    #[inline]
    pub fn digit_count(&self) -> usize {
        self.area_code.len() + self.local_exchange.len() + self.subscriber.len()
    }

    /// All digits without separators.
    pub fn digits(&self) -> String {
        let mut out = String::with_capacity(self.digit_count());
        out.push_str(&self.area_code);
        out.push_str(&self.local_exchange);
        out.push_str(&self.subscriber);
        out
    }

    /// The non-empty digit groups, in order.
    pub fn groups(&self) -> Vec<&str> {
        let mut groups = vec![self.area_code.as_str(), self.local_exchange.as_str()];
        if !self.subscriber.is_empty() {
            groups.push(self.subscriber.as_str());
        }
        groups
    }

    /// Joins the groups with a custom separator.
    pub fn with_separator(&self, separator: &str) -> String {
        self.groups().join(separator)
    }

    /// The canonical hyphenated form, e.g. `"03-3100-0000"`.
    #[inline]
    pub fn hyphenated(&self) -> String {
        self.with_separator("-")
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.area_code, self.local_exchange)?;
        if !self.subscriber.is_empty() {
            write!(f, "-{}", self.subscriber)?;
        }
        Ok(())
    }
}
