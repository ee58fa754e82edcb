//! Area code detection by longest-prefix match.
//!
//! Some area codes are numeric extensions of shorter ones: `0467` extends
//! `046`, `0800` extends `080`, `04992` extends `049`. Candidates are
//! therefore tried from the longest length (5) down to the shortest (2) and
//! the first hit wins.
//!
//! A match is never retried with a shorter code. When a longer code shadows
//! a shorter one (`0868` inside `086`), a number assigned under the shorter
//! code, such as `086-803-1000`, is detected as `0868` and then fails the
//! range or leading-digit check, so it comes back unformatted.

use crate::plan::{AreaCode, NumberingPlan, MAX_AREA_CODE_DIGITS, MIN_AREA_CODE_DIGITS};

/// Finds the longest known area code that prefixes `digits`.
///
/// # Arguments
///
/// * `plan` - The numbering plan to search.
/// * `digits` - A normalized, digits-only phone number.
///
/// # Returns
///
/// `Some(&AreaCode)` for the longest match, `None` if no prefix is known.
///
/// # Example
///
/// ```
/// use jp_phone::detect::detect_area_code;
/// use jp_phone::plan::NumberingPlan;
///
/// let plan = NumberingPlan::builtin();
/// assert_eq!(detect_area_code(plan, "0467551234").unwrap().code(), "0467");
/// assert_eq!(detect_area_code(plan, "0462123456").unwrap().code(), "046");
/// assert!(detect_area_code(plan, "1234567890").is_none());
/// ```
pub fn detect_area_code<'p>(plan: &'p NumberingPlan, digits: &str) -> Option<&'p AreaCode> {
    (MIN_AREA_CODE_DIGITS..=MAX_AREA_CODE_DIGITS)
        .rev()
        .filter(|&length| length <= digits.len())
        .find_map(|length| plan.lookup(digits.get(..length)?))
}

/// Finds the longest area code prefix using the embedded numbering plan.
#[inline]
pub fn detect(digits: &str) -> Option<&'static AreaCode> {
    detect_area_code(NumberingPlan::builtin(), digits)
}

/// Returns true if a number of `length` digits is valid for the area code.
#[inline]
pub fn is_valid_length_for_area_code(area_code: &AreaCode, length: usize) -> bool {
    area_code.length_rule().accepts(length)
}
