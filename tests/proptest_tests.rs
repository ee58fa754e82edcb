//! Property-based tests using proptest.
//!
//! These tests verify invariants that should hold for all inputs,
//! helping discover edge cases that manual tests might miss.

use jp_phone::{
    classify, format_phone_number,
    format::format_with_separator,
    normalize::{normalize, strip_formatting},
    NumberingPlan,
};
use proptest::prelude::*;

// =============================================================================
// STRATEGIES
// =============================================================================

/// Generates a random digit string of a given length.
fn digit_string(len: usize) -> impl Strategy<Value = String> {
    proptest::collection::vec(prop::char::range('0', '9'), len)
        .prop_map(|chars| chars.into_iter().collect())
}

/// Generates a mobile number in an assigned block.
fn mobile_strategy() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("070"), Just("080"), Just("090")],
        1000u32..=9999,
        digit_string(4),
    )
        .prop_map(|(prefix, local, subscriber)| format!("{}{}{}", prefix, local, subscriber))
}

/// Generates a Tokyo landline in an assigned block.
fn tokyo_strategy() -> impl Strategy<Value = String> {
    (3100u32..=3999, digit_string(4))
        .prop_map(|(local, subscriber)| format!("03{}{}", local, subscriber))
}

/// Generates a number that the embedded plan classifies successfully.
fn formattable_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        mobile_strategy(),
        tokyo_strategy(),
        digit_string(6).prop_map(|rest| format!("0120{}", rest)),
        (100u32..=999, digit_string(4)).prop_map(|(l, s)| format!("0800{}{}", l, s)),
        (3usize..=10)
            .prop_flat_map(digit_string)
            .prop_map(|rest| format!("091{}", rest)),
    ]
}

/// Mixes separators into a digit string.
fn with_separators(number: String) -> impl Strategy<Value = String> {
    let len = number.len();
    proptest::collection::vec(
        prop_oneof![
            Just(""),
            Just("-"),
            Just(" "),
            Just("－"),
            Just("ー"),
            Just("−"),
            Just("("),
            Just(")"),
            Just("　"),
        ],
        len + 1,
    )
    .prop_map(move |seps| {
        let mut result = String::new();
        for (i, c) in number.chars().enumerate() {
            result.push_str(seps[i]);
            result.push(c);
        }
        result.push_str(seps[len]);
        result
    })
}

/// Converts ASCII digits to full-width digits.
fn to_full_width(s: &str) -> String {
    s.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => char::from_u32(0xFF10 + d).unwrap_or(c),
            None => c,
        })
        .collect()
}

// =============================================================================
// TOTALITY
// =============================================================================

proptest! {
    /// Property: Formatting never panics and only empty input gives None.
    #[test]
    fn format_is_total(input in ".*") {
        let result = format_phone_number(input.as_str());
        prop_assert_eq!(result.is_none(), input.is_empty());
    }

    /// Property: Classification never panics on arbitrary digit strings.
    #[test]
    fn classify_never_panics_on_digits(input in "[0-9]{0,20}") {
        let _ = classify(&input);
    }

    /// Property: International input is returned byte for byte.
    #[test]
    fn international_unchanged(rest in "[0-9 -]{0,15}") {
        let input = format!("+{}", rest);
        prop_assert_eq!(format_phone_number(input.as_str()), Some(input.clone()));
    }
}

// =============================================================================
// DIGIT PRESERVATION
// =============================================================================

proptest! {
    /// Property: Formatting never adds, drops or reorders digits.
    #[test]
    fn digits_preserved(input in ".*") {
        let output = format_phone_number(input.as_str()).unwrap_or_default();
        prop_assert_eq!(strip_formatting(&output), strip_formatting(&input));
    }

    /// Property: Digits are preserved for phone-like input too.
    #[test]
    fn digits_preserved_phone_like(number in formattable_strategy()) {
        let output = format_phone_number(number.as_str()).unwrap();
        prop_assert_eq!(strip_formatting(&output), number);
    }

    /// Property: A fallback is exactly the normalized input.
    #[test]
    fn fallback_is_normalized(input in "[0-9()\\- ]{1,16}") {
        if classify(&input).is_err() {
            prop_assert_eq!(format_phone_number(input.as_str()), normalize(&input));
        }
    }
}

// =============================================================================
// IDEMPOTENCE AND EQUIVALENCE
// =============================================================================

proptest! {
    /// Property: Formatting a formatted number changes nothing.
    #[test]
    fn idempotent(input in prop_oneof![formattable_strategy(), "[0-9]{1,14}"]) {
        let once = format_phone_number(input.as_str()).unwrap();
        let twice = format_phone_number(once.as_str()).unwrap();
        prop_assert_eq!(once, twice);
    }

    /// Property: Separators in the input do not change the output.
    #[test]
    fn separators_ignored(
        decorated in formattable_strategy().prop_flat_map(with_separators)
    ) {
        let plain = strip_formatting(&decorated);
        prop_assert_eq!(
            format_phone_number(decorated.as_str()),
            format_phone_number(plain.as_str())
        );
    }

    /// Property: Full-width digits format like ASCII digits.
    #[test]
    fn full_width_equivalent(input in "[0-9]{1,14}") {
        let wide = to_full_width(&input);
        prop_assert_eq!(
            format_phone_number(wide.as_str()),
            format_phone_number(input.as_str())
        );
    }
}

// =============================================================================
// CLASSIFICATION INVARIANTS
// =============================================================================

proptest! {
    /// Property: Successful classifications satisfy the plan's rules.
    #[test]
    fn classification_obeys_plan(input in prop_oneof![formattable_strategy(), "0[0-9]{5,13}"]) {
        if let Ok(number) = classify(&input) {
            let area = NumberingPlan::builtin().lookup(number.area_code()).unwrap();
            prop_assert!(area.length_rule().accepts(number.digit_count()));
            prop_assert_eq!(number.local_exchange().len(), area.local_exchange_digits());
            prop_assert!(area.ranges().unwrap().contains(number.local_exchange_value()));
            if area.is_landline() {
                prop_assert!(!number.local_exchange().starts_with(['0', '1']));
            }
            prop_assert_eq!(number.digits(), input);
        }
    }

    /// Property: Hyphens appear in the output exactly when classification succeeds.
    #[test]
    fn hyphenated_iff_classified(input in "[0-9]{1,14}") {
        let output = format_phone_number(input.as_str()).unwrap();
        prop_assert_eq!(output.contains('-'), classify(&input).is_ok());
    }

    /// Property: Generated mobile numbers always get the 3-4-4 layout.
    #[test]
    fn mobile_layout(number in mobile_strategy()) {
        let output = format_phone_number(number.as_str()).unwrap();
        let groups: Vec<_> = output.split('-').map(str::len).collect();
        prop_assert_eq!(groups, vec![3, 4, 4]);
    }

    /// Property: Tokyo landlines always get the 2-4-4 layout.
    #[test]
    fn tokyo_layout(number in tokyo_strategy()) {
        let output = format_with_separator(number.as_str(), " ").unwrap();
        let groups: Vec<_> = output.split(' ').map(str::len).collect();
        prop_assert_eq!(groups, vec![2, 4, 4]);
    }
}
