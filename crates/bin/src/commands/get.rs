//! Get command - prints the value at a path.

use std::process::ExitCode;

use nested::{Traverser, Value};

use crate::cli::{GetArgs, Target};
use crate::output::{OutputFormat, print_value};

/// Run the get command
pub fn run(
    root: &Value,
    args: &GetArgs,
    format: OutputFormat,
) -> Result<ExitCode, Box<dyn std::error::Error>> {
    let traverser = if args.restricted {
        Traverser::restricted()
    } else {
        Traverser::general()
    };
    let path = args.path.as_str();

    let resolved = match args.target {
        Target::Any => traverser.get(root, path).cloned(),
        Target::Map => traverser.get_map(root, path).cloned().map(Value::Map),
        Target::List => traverser
            .get_list(root, path)
            .map(|items| Value::List(items.to_vec())),
        Target::String => traverser.get_str(root, path).map(Value::from),
        Target::Int => traverser.get_int(root, path).map(Value::Int),
        Target::Float => traverser.get_float(root, path).map(Value::Float),
        Target::Bool => traverser.get_bool(root, path).map(Value::Bool),
    };

    match resolved {
        Some(value) => {
            print_value(&value, format)?;
            Ok(ExitCode::SUCCESS)
        }
        None => {
            tracing::info!(path, target = ?args.target, "Path did not resolve");
            eprintln!("not found: {path}");
            Ok(ExitCode::FAILURE)
        }
    }
}
