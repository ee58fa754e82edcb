//! # jp_phone
//!
//! Hyphenation of Japanese domestic phone numbers for Rust.
//!
//! ## Features
//!
//! - Input normalization (hyphen variants, parentheses, full-width digits)
//! - Longest-prefix area code detection (2 to 5 digits)
//! - Length rules for 10-digit, 11-digit, 14-digit and variable-length codes
//! - Local exchange range checks against a declarative numbering plan
//! - Never fails: unknown numbers come back normalized
//! - Multiple interfaces: library, batch, streaming, CLI
//!
//! ## Quick Start
//!
//! ```rust
//! use jp_phone::{format_phone_number, classify, NumberCategory};
//!
//! assert_eq!(format_phone_number("09012345678").as_deref(), Some("090-1234-5678"));
//! assert_eq!(format_phone_number("0331000000").as_deref(), Some("03-3100-0000"));
//!
//! // Falls back to the normalized digits
//! assert_eq!(format_phone_number("03-1234-5678").as_deref(), Some("0312345678"));
//!
//! // International numbers are left alone
//! assert_eq!(format_phone_number("+811234567890").as_deref(), Some("+811234567890"));
//!
//! let number = classify("0120-123-456").unwrap();
//! assert_eq!(number.category(), NumberCategory::TollFree);
//! ```
//!
//! ## Why a number was not hyphenated
//!
//! ```rust
//! use jp_phone::{classify, FormatError};
//!
//! match classify("0312345678") {
//!     Err(FormatError::ReservedLeadingDigit { area_code, local_exchange }) => {
//!         assert_eq!(area_code, "03");
//!         assert_eq!(local_exchange, "1234");
//!     }
//!     other => panic!("unexpected: {:?}", other),
//! }
//! ```
//!
//! ## Custom Numbering Plans
//!
//! ```rust
//! use jp_phone::{NumberingPlan, PhoneNumberFormatter};
//!
//! let plan = NumberingPlan::from_json_str(r#"{
//!     "version": "local",
//!     "area_codes": { "2": { "06": 4 } },
//!     "landline_ranges": { "06": [[2000, 9999]] }
//! }"#).unwrap();
//!
//! let formatter = PhoneNumberFormatter::new(&plan);
//! assert_eq!(formatter.format("0621234567").as_deref(), Some("06-2123-4567"));
//! ```
//!
//! ## Batch Processing
//!
//! ```rust
//! use jp_phone::{BatchFormatter, batch};
//!
//! let batch_formatter = BatchFormatter::new();
//! let numbers = vec!["09012345678", "0120123456", "invalid"];
//!
//! let results = batch_formatter.format_all(&numbers);
//! assert_eq!(results.len(), 3);
//!
//! let (formattable, fallback) = batch::count_formattable(&numbers);
//! assert_eq!((formattable, fallback), (2, 1));
//! ```
//!
//! ## Streaming
//!
//! ```rust
//! use jp_phone::stream::FormatExt;
//!
//! let csv_column = "090-1234-5678\n0120123456\n";
//! let formatted: Vec<_> = csv_column.lines().format_phone_numbers().flatten().collect();
//! assert_eq!(formatted, vec!["090-1234-5678", "0120-123-456"]);
//! ```
//!
//! ## Number Categories
//!
//! | Category | Example area codes | Digits | Format |
//! |----------|--------------------|--------|--------|
//! | Landline | 03, 045, 0467, 04992 | 10 | varies |
//! | Mobile | 070, 080, 090 | 11 | 3-4-4 |
//! | IP Phone | 050 | 11 | 3-4-4 |
//! | FMC | 060 | 11 | 3-4-4 |
//! | Toll Free | 0120, 0800 | 10, 11 | 4-3-3, 4-3-4 |
//! | Pager/M2M | 020, 0200 | 11, 14 | 3-4-4, 4-5-5 |
//! | Shared Cost | 0570 | 10 | 4-3-3 |
//! | Mass Calling | 0180 | 10 | 4-3-3 |
//! | Premium | 0990 | 10 | 4-3-3 |
//! | Special Connection | 091 | 6 to 13 | 3-3-rest |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `parallel` | Rayon-based parallel batches |
//! | `cli` | `jpphone` command-line tool |

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod batch;
pub mod category;
pub mod detect;
pub mod error;
pub mod format;
pub mod input;
pub mod normalize;
pub mod number;
pub mod plan;
pub mod stream;
pub mod validate;

// Re-export main types at crate root
pub use batch::BatchFormatter;
pub use category::{LengthRule, NumberCategory};
pub use error::{FormatError, PlanError};
pub use format::{format_phone_number, PhoneNumberFormatter};
pub use input::PhoneInput;
pub use number::PhoneNumber;
pub use plan::NumberingPlan;
pub use validate::{classify, is_formattable};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mobile() {
        assert_eq!(
            format_phone_number("09012345678").as_deref(),
            Some("090-1234-5678")
        );
    }

    #[test]
    fn test_reserved_leading_digit_falls_back() {
        assert_eq!(
            format_phone_number("0312345678").as_deref(),
            Some("0312345678")
        );
    }

    #[test]
    fn test_tokyo_landline() {
        assert_eq!(
            format_phone_number("0331000000").as_deref(),
            Some("03-3100-0000")
        );
    }

    #[test]
    fn test_toll_free() {
        assert_eq!(
            format_phone_number("0120123456").as_deref(),
            Some("0120-123-456")
        );
    }

    #[test]
    fn test_international_unchanged() {
        assert_eq!(
            format_phone_number("+811234567890").as_deref(),
            Some("+811234567890")
        );
    }

    #[test]
    fn test_full_width_digits() {
        assert_eq!(
            format_phone_number("０９０１２３４５６７８").as_deref(),
            Some("090-1234-5678")
        );
        assert_eq!(
            format_phone_number("０３ー３１００ー００００").as_deref(),
            Some("03-3100-0000")
        );
    }

    #[test]
    fn test_null_propagation() {
        assert_eq!(format_phone_number(None::<&str>), None);
        assert_eq!(format_phone_number(""), None);
    }

    #[test]
    fn test_separator_variants_agree() {
        let expected = format_phone_number("0331000000");
        for input in [
            "03-3100-0000",
            "03 3100 0000",
            "(03)3100-0000",
            "03‐3100‐0000",
            "03－3100－0000",
            "03−3100−0000",
            "０３（３１００）００００",
        ] {
            assert_eq!(format_phone_number(input), expected, "{}", input);
        }
    }

    #[test]
    fn test_idempotent() {
        for input in ["09012345678", "0331000000", "0120123456", "091123"] {
            let once = format_phone_number(input).unwrap();
            assert_eq!(format_phone_number(once.as_str()).as_deref(), Some(once.as_str()));
        }
    }

    #[test]
    fn test_display_matches_format() {
        let number = classify("0467551234").unwrap();
        assert_eq!(number.to_string(), "0467-55-1234");
        assert_eq!(format_phone_number("0467551234"), Some(number.to_string()));
    }

    #[test]
    fn test_thread_safety() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<NumberingPlan>();
        assert_send_sync::<PhoneNumberFormatter<'static>>();
        assert_send_sync::<PhoneNumber>();
        assert_send_sync::<FormatError>();
        assert_send_sync::<PlanError>();
    }
}
