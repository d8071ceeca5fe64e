use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod input;
mod output;

use cli::{Cli, Commands};

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    // Initialize tracing; stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("nested=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let format = cli.format;

    // Splitting a path needs no document
    if let Commands::Split(args) = &cli.command {
        return commands::split::run(args, format);
    }

    let root = input::load(cli.input.as_deref())?;

    match &cli.command {
        Commands::Get(args) => commands::get::run(&root, args, format),
        Commands::Has(args) => commands::has::run(&root, args, format),
        Commands::Strings(args) => commands::strings::run(&root, args, format),
        Commands::Split(args) => commands::split::run(args, format),
    }
}
