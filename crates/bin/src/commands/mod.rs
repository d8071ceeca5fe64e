//! Subcommand implementations.

pub mod get;
pub mod has;
pub mod split;
pub mod strings;
