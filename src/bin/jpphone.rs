//! CLI tool for Japanese phone number hyphenation.
//!
//! # Usage
//!
//! ```bash
//! # Format one or more numbers
//! jpphone format 09012345678 0331000000
//!
//! # Format a column of numbers from stdin
//! cut -d, -f3 contacts.csv | jpphone format --output json
//!
//! # Explain why a number is not hyphenated
//! jpphone classify 0312345678
//!
//! # Use a newer numbering plan
//! JP_PHONE_PLAN=plan-2025.json jpphone format 0467551234
//! ```

use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use jp_phone::normalize::normalize;
use jp_phone::{NumberingPlan, PhoneNumberFormatter};
use serde_json::json;
use std::io::{self, BufRead};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "jpphone")]
#[command(author, version, about = "Hyphenate Japanese domestic phone numbers")]
struct Cli {
    /// Numbering plan JSON file to use instead of the embedded one
    #[arg(long, global = true, env = "JP_PHONE_PLAN")]
    plan: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Format phone numbers (reads stdin, one per line, when none are given)
    Format {
        /// Phone numbers to format
        numbers: Vec<String>,

        /// Separator between digit groups
        #[arg(short, long, default_value = "-")]
        separator: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Classify a phone number and explain fallbacks
    Classify {
        /// Phone number to classify
        number: String,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Print the normalized form of a phone number
    Normalize {
        /// Phone number to normalize
        number: String,
    },

    /// Show information about the numbering plan in use
    Plan,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let custom_plan;
    let plan = match &cli.plan {
        Some(path) => match NumberingPlan::from_file(path) {
            Ok(loaded) => {
                custom_plan = loaded;
                &custom_plan
            }
            Err(e) => {
                eprintln!("Error: cannot load {}: {}", path.display(), e);
                std::process::exit(2);
            }
        },
        None => NumberingPlan::builtin(),
    };
    let formatter = PhoneNumberFormatter::new(plan);

    match cli.command {
        Commands::Format {
            numbers,
            separator,
            output,
        } => {
            cmd_format(formatter, numbers, &separator, output);
        }
        Commands::Classify { number, output } => {
            cmd_classify(formatter, &number, output);
        }
        Commands::Normalize { number } => {
            cmd_normalize(&number);
        }
        Commands::Plan => {
            cmd_plan(plan);
        }
    }
}

fn read_stdin_lines() -> Vec<String> {
    let mut lines = Vec::new();
    for line in io::stdin().lock().lines() {
        match line {
            Ok(line) => lines.push(line),
            Err(e) => {
                eprintln!("Error: reading stdin: {}", e);
                std::process::exit(2);
            }
        }
    }
    lines
}

fn cmd_format(
    formatter: PhoneNumberFormatter<'_>,
    numbers: Vec<String>,
    separator: &str,
    output: OutputFormat,
) {
    let numbers = if numbers.is_empty() {
        read_stdin_lines()
    } else {
        numbers
    };

    match output {
        OutputFormat::Text => {
            for number in &numbers {
                let formatted = formatter.format_with_separator(number, separator);
                println!("{}", formatted.unwrap_or_default());
            }
        }
        OutputFormat::Json => {
            let results: Vec<_> = numbers
                .iter()
                .map(|number| {
                    json!({
                        "input": number,
                        "formatted": formatter.format_with_separator(number, separator),
                    })
                })
                .collect();
            println!("{}", serde_json::Value::Array(results));
        }
    }
}

fn cmd_classify(formatter: PhoneNumberFormatter<'_>, number: &str, output: OutputFormat) {
    let formatted = formatter.format(number);
    match formatter.classify(number) {
        Ok(classified) => {
            match output {
                OutputFormat::Text => {
                    println!("Formatted: {}", classified);
                    println!("Category: {}", classified.category().name());
                    println!("Area Code: {}", classified.area_code());
                    println!("Local Exchange: {}", classified.local_exchange());
                    if !classified.subscriber().is_empty() {
                        println!("Subscriber: {}", classified.subscriber());
                    }
                }
                OutputFormat::Json => {
                    let value = json!({
                        "input": number,
                        "formatted": formatted,
                        "number": classified,
                    });
                    println!("{}", value);
                }
            }
            std::process::exit(0);
        }
        Err(e) => {
            match output {
                OutputFormat::Text => {
                    println!("Formatted: {}", formatted.unwrap_or_default());
                    println!("Fallback: {}", e);
                }
                OutputFormat::Json => {
                    let value = json!({
                        "input": number,
                        "formatted": formatted,
                        "error": e.to_string(),
                    });
                    println!("{}", value);
                }
            }
            std::process::exit(1);
        }
    }
}

fn cmd_normalize(number: &str) {
    println!("{}", normalize(number).unwrap_or_default());
}

fn cmd_plan(plan: &NumberingPlan) {
    println!("Version: {}", plan.version());
    println!("Area codes: {}", plan.len());
    for length in jp_phone::plan::MIN_AREA_CODE_DIGITS..=jp_phone::plan::MAX_AREA_CODE_DIGITS {
        println!("  {}-digit: {}", length, plan.count_of_length(length));
    }
}
