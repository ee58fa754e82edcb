//! Phone number formatting example.
//!
//! Run with: `cargo run --example formatting`

use jp_phone::{classify, format, normalize, stream::FormatExt};

fn main() {
    println!("=== Japanese Phone Number Formatting ===\n");

    // -------------------------------------------------------------------------
    // Hyphenation by area code
    // -------------------------------------------------------------------------
    println!("--- Hyphenation (area-code aware) ---\n");

    let numbers = [
        ("0331000000", "Tokyo (2-4-4)"),
        ("0452123456", "Yokohama (3-3-4)"),
        ("0467551234", "Fujisawa (4-2-4)"),
        ("0499222345", "Hachijojima (5-1-4)"),
        ("09012345678", "Mobile (3-4-4)"),
        ("0120123456", "Toll free (4-3-3)"),
        ("02001234567890", "M2M (4-5-5)"),
        ("091123", "Special connection (3-3)"),
    ];

    for (number, description) in numbers {
        let formatted = format::format_phone_number(number).unwrap_or_default();
        println!("  {}", description);
        println!("    Input:  {}", number);
        println!("    Output: {}", formatted);
        println!();
    }

    // -------------------------------------------------------------------------
    // Messy input
    // -------------------------------------------------------------------------
    println!("--- Messy Input ---\n");

    let messy = [
        "０９０－１２３４－５６７８",
        "(03) 3100-0000",
        "０３ー３１００ー００００",
        "090 1234 5678",
    ];

    for input in messy {
        println!(
            "  {:<28} -> {}",
            input,
            format::format_phone_number(input).unwrap_or_default()
        );
    }
    println!();

    // -------------------------------------------------------------------------
    // Fallbacks
    // -------------------------------------------------------------------------
    println!("--- Fallbacks ---\n");

    let unformattable = ["0312345678", "0901234567", "06012345678", "+811234567890"];

    for input in unformattable {
        let formatted = format::format_phone_number(input).unwrap_or_default();
        match classify(input) {
            Ok(number) => println!("  {} -> {}", input, number),
            Err(e) => println!("  {} -> {} ({})", input, formatted, e),
        }
    }
    println!();

    // -------------------------------------------------------------------------
    // Custom separators
    // -------------------------------------------------------------------------
    println!("--- Custom Separators ---\n");

    let number = "09012345678";
    println!("  Number: {}", number);
    for sep in [" ", ".", "", " - "] {
        let formatted = format::format_with_separator(number, sep).unwrap_or_default();
        println!("    Separator '{}': {}", sep, formatted);
    }
    println!();

    // -------------------------------------------------------------------------
    // Normalization
    // -------------------------------------------------------------------------
    println!("--- Normalization ---\n");

    for input in ["（０３）３１００ー００００", "TEL: 03-3100-0000"] {
        println!("  {}", input);
        println!("    normalize:        {:?}", normalize::normalize(input));
        println!("    strip_formatting: {}", normalize::strip_formatting(input));
    }
    println!();

    // -------------------------------------------------------------------------
    // Streaming a CSV column
    // -------------------------------------------------------------------------
    println!("--- Streaming ---\n");

    let column = "090-1234-5678\n0331000000\n\n0120 123 456\n";
    for (line, formatted) in column.lines().zip(column.lines().format_phone_numbers()) {
        println!("  {:<16} -> {:?}", line, formatted);
    }
}
