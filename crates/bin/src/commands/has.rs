//! Has command - searches the container at a path for a value.

use std::process::ExitCode;

use nested::{Value, codec};

use crate::cli::HasArgs;
use crate::output::OutputFormat;

/// Run the has command
pub fn run(
    root: &Value,
    args: &HasArgs,
    format: OutputFormat,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let target = codec::decode(&args.target).unwrap_or_else(|_| Value::from(args.target.as_str()));
    let found = root.has_value(&args.path, &target);

    match format {
        OutputFormat::Human => println!("{found}"),
        OutputFormat::Json => println!("{}", serde_json::json!({ "found": found })),
    }

    Ok(if found {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
