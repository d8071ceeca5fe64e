//! Output formatting helpers for human-readable and JSON output.

use clap::ValueEnum;
use nested::{Value, codec};

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Print a resolved value.
///
/// Human output prints scalars bare (strings without quotes) and containers
/// as indented JSON. JSON output is always compact JSON.
pub fn print_value(value: &Value, format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => println!("{}", codec::encode(value)?),
        OutputFormat::Human if value.is_container() => {
            println!("{}", codec::encode_pretty(value)?)
        }
        OutputFormat::Human => println!("{value}"),
    }
    Ok(())
}

/// Print a list of strings, one per line or as a JSON array.
pub fn print_lines(lines: &[String], format: OutputFormat) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Human => {
            for line in lines {
                println!("{line}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string(lines)?),
    }
    Ok(())
}
