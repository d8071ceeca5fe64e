//! CLI argument definitions for the nested binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::output::OutputFormat;

/// Type a resolved value must have for `get` to succeed
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Target {
    /// Accept whatever the path resolves to
    Any,
    Map,
    List,
    String,
    Int,
    Float,
    Bool,
}

/// Read values out of nested JSON documents by path
#[derive(Parser, Debug)]
#[command(name = "nested")]
#[command(about = "nested: read values out of nested JSON documents by path expression")]
#[command(version)]
pub struct Cli {
    /// JSON document to read. Reads stdin when omitted.
    #[arg(short, long, global = true, env = "NESTED_INPUT")]
    pub input: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "human", env = "NESTED_FORMAT")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the value at a path; exits 1 if it does not resolve
    Get(GetArgs),
    /// Check whether the container at a path directly holds a value
    Has(HasArgs),
    /// Print the string elements of the list at a path
    Strings(StringsArgs),
    /// Show how a path expression is split into segments
    Split(SplitArgs),
}

/// Arguments for the get command
#[derive(clap::Args, Debug)]
pub struct GetArgs {
    /// Path expression, e.g. `servers[0].host`
    pub path: String,

    /// Require the resolved value to have this type
    #[arg(long = "as", value_name = "TYPE", default_value = "any")]
    pub target: Target,

    /// Only step into maps and lists
    #[arg(long)]
    pub restricted: bool,
}

/// Arguments for the has command
#[derive(clap::Args, Debug)]
pub struct HasArgs {
    /// Path expression of the map or list to search
    pub path: String,

    /// Value to look for, as JSON. Text that is not valid JSON is taken as a plain string.
    pub target: String,
}

/// Arguments for the strings command
#[derive(clap::Args, Debug)]
pub struct StringsArgs {
    /// Path expression of the list
    pub path: String,
}

/// Arguments for the split command
#[derive(clap::Args, Debug)]
pub struct SplitArgs {
    /// Path expression to split
    pub path: String,
}
