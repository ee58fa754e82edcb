//! Classification pipeline for Japanese phone numbers.
//!
//! `classify` runs the stages in order and stops at the first failure:
//!
//! 1. Normalization (separators removed, full-width digits folded)
//! 2. Area code detection (longest prefix first)
//! 3. Total-length check for the area code's category
//! 4. Local exchange check against the landline or service range table
//!
//! The returned [`FormatError`] names the stage that gave up.

use crate::detect::detect_area_code;
use crate::error::FormatError;
use crate::normalize::{first_non_digit, is_international, normalize};
use crate::number::PhoneNumber;
use crate::plan::{AreaCode, NumberingPlan};

/// Classifies a phone number using the embedded numbering plan.
///
/// # Example
///
/// ```
/// use jp_phone::{classify, NumberCategory};
///
/// let number = classify("090-1234-5678").unwrap();
/// assert_eq!(number.area_code(), "090");
/// assert_eq!(number.local_exchange(), "1234");
/// assert_eq!(number.subscriber(), "5678");
/// assert_eq!(number.category(), NumberCategory::Mobile);
///
/// assert!(classify("0312345678").is_err());
/// ```
pub fn classify(input: &str) -> Result<PhoneNumber, FormatError> {
    classify_with_plan(NumberingPlan::builtin(), input)
}

/// Classifies raw input against a specific numbering plan.
pub fn classify_with_plan(plan: &NumberingPlan, input: &str) -> Result<PhoneNumber, FormatError> {
    if is_international(input) {
        return Err(FormatError::International);
    }
    let normalized = normalize(input).ok_or(FormatError::Empty)?;
    classify_normalized(plan, &normalized)
}

/// Classifies an already normalized string.
///
/// Use this when the input went through [`normalize`] already and the
/// normalized text is needed for a fallback.
pub fn classify_normalized(
    plan: &NumberingPlan,
    normalized: &str,
) -> Result<PhoneNumber, FormatError> {
    if normalized.is_empty() {
        return Err(FormatError::Empty);
    }

    if let Some((position, character)) = first_non_digit(normalized) {
        return Err(FormatError::InvalidCharacter {
            position,
            character,
        });
    }

    let area = detect_area_code(plan, normalized).ok_or(FormatError::UnknownAreaCode)?;
    check_length(area, normalized.len())?;

    let area_len = area.code().len();
    let split = area_len + area.local_exchange_digits();
    let (Some(local), Some(subscriber)) = (normalized.get(area_len..split), normalized.get(split..))
    else {
        return Err(FormatError::InvalidLength {
            area_code: area.code().to_string(),
            length: normalized.len(),
            rule: area.length_rule(),
        });
    };

    let value = local_exchange_value(local);
    check_local_exchange(area, local, value)?;

    Ok(PhoneNumber::new(
        area.code(),
        local,
        value,
        subscriber,
        area.category(),
    ))
}

/// Checks the total digit count against the area code's length rule.
pub fn check_length(area: &AreaCode, length: usize) -> Result<(), FormatError> {
    if area.length_rule().accepts(length) {
        Ok(())
    } else {
        Err(FormatError::InvalidLength {
            area_code: area.code().to_string(),
            length,
            rule: area.length_rule(),
        })
    }
}

/// Checks that a local exchange code is assigned in the area code.
///
/// Landline local exchanges never start with `0` or `1`. Every category
/// then needs a range table entry containing the numeric value.
pub fn check_local_exchange(area: &AreaCode, local: &str, value: u32) -> Result<(), FormatError> {
    if area.is_landline() && local.starts_with(['0', '1']) {
        return Err(FormatError::ReservedLeadingDigit {
            area_code: area.code().to_string(),
            local_exchange: local.to_string(),
        });
    }

    match area.ranges() {
        None => Err(FormatError::NoRangeTable {
            area_code: area.code().to_string(),
        }),
        Some(ranges) if ranges.contains(value) => Ok(()),
        Some(_) => Err(FormatError::UnassignedLocalExchange {
            area_code: area.code().to_string(),
            local_exchange: local.to_string(),
        }),
    }
}

// Callers guarantee ASCII digits of at most MAX_LOCAL_EXCHANGE_DIGITS.
#[inline]
fn local_exchange_value(local: &str) -> u32 {
    local
        .bytes()
        .fold(0u32, |acc, b| acc * 10 + u32::from(b - b'0'))
}

/// Returns true if the input classifies successfully with the embedded plan.
///
/// # Example
///
/// ```
/// use jp_phone::is_formattable;
///
/// assert!(is_formattable("03-3100-0000"));
/// assert!(!is_formattable("03-1234-5678"));
/// ```
#[inline]
pub fn is_formattable(input: &str) -> bool {
    classify(input).is_ok()
}
