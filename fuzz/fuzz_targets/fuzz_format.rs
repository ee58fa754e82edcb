//! Fuzz target for phone number formatting.
//!
//! Tests that formatting never panics on arbitrary input and never loses
//! or invents digits.

#![no_main]

use jp_phone::{classify, format, normalize};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // These should never panic
    let _ = classify(data);
    let _ = normalize::normalize(data);
    let _ = format::split_into_groups(data);
    let _ = format::format_with_separator(data, "");
    let _ = format::format_with_separator(data, " ");

    let formatted = format::format_phone_number(data);
    assert_eq!(formatted.is_none(), data.is_empty());

    let output = formatted.unwrap_or_default();
    assert_eq!(
        normalize::strip_formatting(&output),
        normalize::strip_formatting(data),
        "Formatting should preserve digits"
    );

    // Formatting is idempotent
    if !output.is_empty() {
        assert_eq!(format::format_phone_number(output.as_str()).as_deref(), Some(output.as_str()));
    }
});
