//! Command dispatch logic.
//!
//! Responsibilities:
//! - Route parsed CLI arguments to appropriate command handlers.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//! - Settings loading (see `main()`).

use anyhow::Result;
use llmops_config::Settings;

use crate::args::Commands;
use crate::commands;

/// Dispatch a subcommand to its handler, writing results to stdout.
pub(crate) fn run_command(command: Commands, settings: &Settings) -> Result<()> {
    let mut out = std::io::stdout().lock();
    match command {
        Commands::Check => commands::check::run(settings, &mut out),
        Commands::Show { json } => commands::show::run(settings, json, &mut out),
        Commands::DbUri { reveal } => commands::db_uri::run(settings, reveal, &mut out),
        Commands::RdbType => commands::rdb_type::run(settings, &mut out),
    }
}
