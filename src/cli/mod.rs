//! CLI module
//!
//! Command-line interface for environments and search.
//!
//! # Commands
//!
//! - `env create|delete|list|export|run` - manage a repository's environments
//! - `search repos` - search repositories with validated qualifiers

mod commands;
mod runner;

pub use commands::{
    Cli, Commands, EnvArgs, EnvCommands, ExportFormat, ListFormat, SearchCommands,
    SearchReposArgs,
};
pub use runner::{build_query, Runner};
