//! Input normalization for user-entered phone numbers.
//!
//! Japanese input methods produce a zoo of characters that look like a
//! hyphen, plus full-width digits and full-width parentheses. This module
//! folds all of them down to a plain ASCII digit string.
//!
//! # Example
//!
//! ```
//! use jp_phone::normalize::normalize;
//!
//! assert_eq!(normalize("（０３）３１００ー００００").as_deref(), Some("0331000000"));
//! assert_eq!(normalize("090-1234-5678").as_deref(), Some("09012345678"));
//! assert_eq!(normalize(""), None);
//! ```

/// Returns true for characters that are visually confusable with a hyphen.
///
/// Covers ASCII hyphen-minus and its full-width form, the Unicode hyphens
/// (U+2010, U+2011), en and em dashes, the minus sign, the katakana long
/// vowel mark and the horizontal bar.
#[inline]
pub fn is_hyphen_like(c: char) -> bool {
    matches!(
        c,
        '-' | '\u{FF0D}'
            | '\u{2010}'
            | '\u{2011}'
            | '\u{2013}'
            | '\u{2014}'
            | '\u{2212}'
            | '\u{30FC}'
            | '\u{2015}'
    )
}

/// Returns true for half-width and full-width parentheses.
#[inline]
pub fn is_parenthesis(c: char) -> bool {
    matches!(c, '(' | ')' | '\u{FF08}' | '\u{FF09}')
}

#[inline]
fn is_space(c: char) -> bool {
    c.is_ascii_whitespace() || c == '\u{3000}'
}

/// Returns true if the character is dropped during normalization.
#[inline]
pub fn is_removable(c: char) -> bool {
    is_hyphen_like(c) || is_parenthesis(c) || is_space(c)
}

/// Maps a full-width digit (U+FF10..U+FF19) to its ASCII counterpart.
///
/// Every other character is returned unchanged.
///
/// ```
/// use jp_phone::normalize::fold_digit;
///
/// assert_eq!(fold_digit('７'), '7');
/// assert_eq!(fold_digit('7'), '7');
/// assert_eq!(fold_digit('a'), 'a');
/// ```
#[inline]
pub fn fold_digit(c: char) -> char {
    match c {
        '\u{FF10}'..='\u{FF19}' => (b'0' + (c as u32 - 0xFF10) as u8) as char,
        _ => c,
    }
}

/// Returns true if the input is written in international form.
///
/// A leading `+` (half-width or full-width), after any leading whitespace,
/// marks a number the formatter leaves untouched.
#[inline]
pub fn is_international(input: &str) -> bool {
    matches!(input.trim_start().chars().next(), Some('+') | Some('\u{FF0B}'))
}

/// Normalizes raw phone number input.
///
/// Removes parentheses, hyphen look-alikes and spaces, then folds
/// full-width digits to ASCII. Characters outside those classes are kept,
/// so the result is not guaranteed to be digits only.
///
/// Returns `None` for empty input.
pub fn normalize(input: &str) -> Option<String> {
    if input.is_empty() {
        return None;
    }

    Some(
        input
            .chars()
            .filter(|&c| !is_removable(c))
            .map(fold_digit)
            .collect(),
    )
}

/// Extracts the digits from any input, folding full-width digits first.
///
/// Unlike [`normalize`], every non-digit character is dropped.
///
/// ```
/// use jp_phone::normalize::strip_formatting;
///
/// assert_eq!(strip_formatting("03-3100-0000"), "0331000000");
/// assert_eq!(strip_formatting("TEL: ０９０ 1234 5678"), "09012345678");
/// ```
pub fn strip_formatting(input: &str) -> String {
    input
        .chars()
        .map(fold_digit)
        .filter(|c| c.is_ascii_digit())
        .collect()
}

/// Returns the first character of `normalized` that is not an ASCII digit.
#[inline]
pub(crate) fn first_non_digit(normalized: &str) -> Option<(usize, char)> {
    normalized
        .chars()
        .enumerate()
        .find(|(_, c)| !c.is_ascii_digit())
}
