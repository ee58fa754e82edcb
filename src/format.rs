//! Phone number formatting.
//!
//! The formatter never fails on bad phone numbers. A number it cannot
//! classify comes back normalized but unhyphenated, so a form can always
//! show *something* to the user.
//!
//! # Format Conventions
//!
//! - **Landline**: `AREA-LOCAL-SUBSCRIBER`, e.g. `03-3100-0000`, `0467-55-1234`
//! - **Mobile / IP phone**: `0X0-XXXX-XXXX`
//! - **Toll free**: `0120-XXX-XXX`, `0800-XXX-XXXX`
//! - **Special connection** (`091`): `091-XXX` or `091-XXX-X...`
//! - **International** (`+...`): returned as given
//!
//! # Example
//!
//! ```
//! use jp_phone::format::{format_phone_number, format_with_separator};
//!
//! assert_eq!(format_phone_number("09012345678").as_deref(), Some("090-1234-5678"));
//! assert_eq!(format_phone_number("0312345678").as_deref(), Some("0312345678"));
//! assert_eq!(format_phone_number(""), None);
//!
//! assert_eq!(
//!     format_with_separator("0331000000", " ").as_deref(),
//!     Some("03 3100 0000")
//! );
//! ```

use crate::error::FormatError;
use crate::input::PhoneInput;
use crate::normalize::{is_international, normalize};
use crate::number::PhoneNumber;
use crate::plan::NumberingPlan;
use crate::validate::{classify_normalized, classify_with_plan};

/// Hyphenates phone numbers against a numbering plan.
///
/// Cheap to copy; it only holds a reference to the plan. The default
/// formatter uses [`NumberingPlan::builtin`].
///
/// # Example
///
/// ```
/// use jp_phone::PhoneNumberFormatter;
///
/// let formatter = PhoneNumberFormatter::default();
/// assert_eq!(formatter.format("0120123456").as_deref(), Some("0120-123-456"));
/// assert_eq!(formatter.format("+811234567890").as_deref(), Some("+811234567890"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct PhoneNumberFormatter<'p> {
    plan: &'p NumberingPlan,
}

impl Default for PhoneNumberFormatter<'static> {
    fn default() -> Self {
        Self::new(NumberingPlan::builtin())
    }
}

impl<'p> PhoneNumberFormatter<'p> {
    /// Creates a formatter for the given plan.
    #[inline]
    pub const fn new(plan: &'p NumberingPlan) -> Self {
        Self { plan }
    }

    /// Returns the plan this formatter uses.
    #[inline]
    pub fn plan(&self) -> &'p NumberingPlan {
        self.plan
    }

    /// Classifies raw input. See [`classify`](crate::classify).
    #[inline]
    pub fn classify(&self, input: &str) -> Result<PhoneNumber, FormatError> {
        classify_with_plan(self.plan, input)
    }

    /// Returns true if the input classifies successfully.
    #[inline]
    pub fn is_formattable(&self, input: &str) -> bool {
        self.classify(input).is_ok()
    }

    /// Formats with hyphens.
    ///
    /// Returns `None` for empty input, the hyphenated number on success, and
    /// the normalized digits otherwise.
    #[inline]
    pub fn format<I: PhoneInput>(&self, input: I) -> Option<String> {
        self.format_with_separator(input, "-")
    }

    /// Formats with a custom separator between the groups.
    pub fn format_with_separator<I: PhoneInput>(&self, input: I, separator: &str) -> Option<String> {
        let raw = input.to_phone_input()?;
        Some(match self.resolve(&raw)? {
            Resolved::Classified(number) => number.with_separator(separator),
            Resolved::Fallback(text) => text,
        })
    }

    /// Splits the number into its digit groups.
    ///
    /// A number that cannot be classified is returned as a single group;
    /// empty input gives no groups.
    ///
    /// ```
    /// use jp_phone::PhoneNumberFormatter;
    ///
    /// let formatter = PhoneNumberFormatter::default();
    /// assert_eq!(formatter.split_into_groups("0467551234"), vec!["0467", "55", "1234"]);
    /// assert_eq!(formatter.split_into_groups("0312345678"), vec!["0312345678"]);
    /// assert!(formatter.split_into_groups("").is_empty());
    /// ```
    pub fn split_into_groups(&self, input: &str) -> Vec<String> {
        match self.resolve(input) {
            Some(Resolved::Classified(number)) => {
                number.groups().into_iter().map(str::to_string).collect()
            }
            Some(Resolved::Fallback(text)) if !text.is_empty() => vec![text],
            _ => Vec::new(),
        }
    }

    fn resolve(&self, raw: &str) -> Option<Resolved> {
        if is_international(raw) {
            tracing::debug!(error = %FormatError::International, "phone number left unformatted");
            return Some(Resolved::Fallback(raw.to_string()));
        }

        let normalized = normalize(raw)?;
        match classify_normalized(self.plan, &normalized) {
            Ok(number) => {
                tracing::trace!(
                    area_code = number.area_code(),
                    category = %number.category(),
                    "classified phone number"
                );
                Some(Resolved::Classified(number))
            }
            Err(error) => {
                tracing::debug!(%error, "phone number left unformatted");
                Some(Resolved::Fallback(normalized))
            }
        }
    }
}

enum Resolved {
    Classified(PhoneNumber),
    Fallback(String),
}

/// Formats a phone number with hyphens using the embedded numbering plan.
///
/// * empty input (`None`, `""`, `0`) → `None`
/// * classifiable number → hyphenated, e.g. `"03-3100-0000"`
/// * leading `+` → the input unchanged
/// * anything else → the normalized digits, unhyphenated
///
/// # Example
///
/// ```
/// use jp_phone::format_phone_number;
///
/// assert_eq!(format_phone_number("０９０１２３４５６７８").as_deref(), Some("090-1234-5678"));
/// assert_eq!(format_phone_number("(03) 3100-0000").as_deref(), Some("03-3100-0000"));
/// assert_eq!(format_phone_number(None::<&str>), None);
/// ```
#[inline]
pub fn format_phone_number<I: PhoneInput>(input: I) -> Option<String> {
    PhoneNumberFormatter::default().format(input)
}

/// Formats a phone number with a custom separator using the embedded plan.
///
/// ```
/// use jp_phone::format::format_with_separator;
///
/// assert_eq!(format_with_separator("09012345678", "").as_deref(), Some("09012345678"));
/// assert_eq!(format_with_separator("09012345678", " ").as_deref(), Some("090 1234 5678"));
/// ```
#[inline]
pub fn format_with_separator<I: PhoneInput>(input: I, separator: &str) -> Option<String> {
    PhoneNumberFormatter::default().format_with_separator(input, separator)
}

/// Splits a phone number into digit groups using the embedded plan.
#[inline]
pub fn split_into_groups(input: &str) -> Vec<String> {
    PhoneNumberFormatter::default().split_into_groups(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_mobile() {
        assert_eq!(format_phone_number("09012345678").as_deref(), Some("090-1234-5678"));
        assert_eq!(format_phone_number("08098765432").as_deref(), Some("080-9876-5432"));
        assert_eq!(format_phone_number("07011112222").as_deref(), Some("070-1111-2222"));
    }

    #[test]
    fn test_format_landline() {
        assert_eq!(format_phone_number("0331000000").as_deref(), Some("03-3100-0000"));
        assert_eq!(format_phone_number("0661234567").as_deref(), Some("06-6123-4567"));
        assert_eq!(format_phone_number("0452123456").as_deref(), Some("045-212-3456"));
        assert_eq!(format_phone_number("0467551234").as_deref(), Some("0467-55-1234"));
        assert_eq!(format_phone_number("0499222345").as_deref(), Some("04992-2-2345"));
    }

    #[test]
    fn test_format_services() {
        assert_eq!(format_phone_number("0120123456").as_deref(), Some("0120-123-456"));
        assert_eq!(format_phone_number("08001234567").as_deref(), Some("0800-123-4567"));
        assert_eq!(format_phone_number("0570064123").as_deref(), Some("0570-064-123"));
        assert_eq!(format_phone_number("05012345678").as_deref(), Some("050-1234-5678"));
        assert_eq!(
            format_phone_number("02001234567890").as_deref(),
            Some("0200-12345-67890")
        );
    }

    #[test]
    fn test_format_special_connection() {
        assert_eq!(format_phone_number("091123").as_deref(), Some("091-123"));
        assert_eq!(
            format_phone_number("0911234567890").as_deref(),
            Some("091-123-4567890")
        );
    }

    #[test]
    fn test_fallback_returns_normalized() {
        assert_eq!(format_phone_number("03-1234-5678").as_deref(), Some("0312345678"));
        assert_eq!(format_phone_number("123").as_deref(), Some("123"));
        assert_eq!(format_phone_number("0901234567").as_deref(), Some("0901234567"));
        assert_eq!(format_phone_number("03 3100 000x").as_deref(), Some("033100000x"));
    }

    #[test]
    fn test_international_unchanged() {
        assert_eq!(format_phone_number("+811234567890").as_deref(), Some("+811234567890"));
        assert_eq!(
            format_phone_number("+81 90-1234-5678").as_deref(),
            Some("+81 90-1234-5678")
        );
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(format_phone_number(""), None);
        assert_eq!(format_phone_number(None::<String>), None);
        assert_eq!(format_phone_number(0u64), None);
        assert_eq!(format_phone_number("--").as_deref(), Some(""));
    }

    #[test]
    fn test_integer_input() {
        // The leading zero is lost when a number is stored as an integer
        assert_eq!(format_phone_number(9012345678u64).as_deref(), Some("9012345678"));
    }

    #[test]
    fn test_already_formatted() {
        assert_eq!(format_phone_number("090-1234-5678").as_deref(), Some("090-1234-5678"));
        assert_eq!(format_phone_number("0901-234-5678").as_deref(), Some("090-1234-5678"));
    }

    #[test]
    fn test_custom_separator() {
        assert_eq!(format_with_separator("0331000000", ".").as_deref(), Some("03.3100.0000"));
        assert_eq!(format_with_separator("0312345678", ".").as_deref(), Some("0312345678"));
    }

    #[test]
    fn test_split_into_groups() {
        assert_eq!(split_into_groups("09012345678"), vec!["090", "1234", "5678"]);
        assert_eq!(split_into_groups("091123"), vec!["091", "123"]);
        assert_eq!(split_into_groups("+81312345678"), vec!["+81312345678"]);
        assert!(split_into_groups("()").is_empty());
    }

    #[test]
    fn test_formatter_with_custom_plan() {
        let plan = NumberingPlan::from_json_str(
            r#"{"version": "t", "area_codes": { "2": { "03": 4 } },
                "landline_ranges": { "03": [[1000, 9999]] }}"#,
        )
        .unwrap();
        let formatter = PhoneNumberFormatter::new(&plan);
        assert_eq!(formatter.format("0352345678").as_deref(), Some("03-5234-5678"));
        assert_eq!(formatter.format("09012345678").as_deref(), Some("09012345678"));
        assert_eq!(formatter.plan().version(), "t");
    }
}
