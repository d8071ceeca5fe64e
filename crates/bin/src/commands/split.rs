//! Split command - shows the segments of a path expression.

use std::process::ExitCode;

use nested::path;

use crate::cli::SplitArgs;
use crate::output::{OutputFormat, print_lines};

/// Run the split command
pub fn run(args: &SplitArgs, format: OutputFormat) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let segments: Vec<String> = path::split(&args.path)
        .into_iter()
        .map(|segment| match format {
            OutputFormat::Human if segment.is_empty() => "\"\"".to_string(),
            _ => segment.to_string(),
        })
        .collect();

    print_lines(&segments, format)?;
    Ok(ExitCode::SUCCESS)
}
