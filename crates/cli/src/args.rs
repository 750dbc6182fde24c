//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not load settings (see `main()`).

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "llmops-cli")]
#[command(about = "Inspect and validate LLMOps backend settings", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  llmops-cli check\n  llmops-cli --env-file deploy/prod.env show --json\n  llmops-cli db-uri\n  llmops-cli rdb-type\n"
)]
pub struct Cli {
    /// Load this .env file before reading the environment.
    ///
    /// Variables already set in the process are not overwritten.
    #[arg(long, global = true, value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate that every required setting is present and well-formed
    Check,

    /// Print the active settings with credentials redacted
    Show {
        /// Print as JSON instead of plain text
        #[arg(long)]
        json: bool,
    },

    /// Print the relational database connection URI
    DbUri {
        /// Include the password instead of masking it
        #[arg(long)]
        reveal: bool,
    },

    /// Print the normalized name of the configured database type
    RdbType,
}
