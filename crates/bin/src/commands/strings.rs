//! Strings command - prints the string elements of a list.

use std::process::ExitCode;

use nested::{Value, convert};

use crate::cli::StringsArgs;
use crate::output::{OutputFormat, print_lines};

/// Run the strings command
pub fn run(
    root: &Value,
    args: &StringsArgs,
    format: OutputFormat,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let Some(list) = root.get(&args.path) else {
        eprintln!("not found: {}", args.path);
        return Ok(ExitCode::FAILURE);
    };

    print_lines(&convert::to_string_vec(list), format)?;
    Ok(ExitCode::SUCCESS)
}
