//! LLMOps CLI - inspect and validate backend settings from the command line.
//!
//! Responsibilities:
//! - Parse command-line arguments.
//! - Load settings from `.env` files and the environment.
//! - Print validation results and derived values for operators.
//!
//! Does NOT handle:
//! - Settings parsing or validation rules (see `crates/config`).
//! - Connecting to any configured service.
//!
//! Invariants:
//! - `--env-file` is loaded BEFORE the process-wide settings are built, so its
//!   values are visible to `get_settings()`.
//! - Credentials are only printed when explicitly requested (`db-uri --reveal`).

mod args;
mod commands;
mod dispatch;
mod error;

use anyhow::{Context, Result};
use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use llmops_config::{Settings, SettingsError, SettingsLoader, get_settings};
use std::path::Path;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let code = match run(cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            report_error(&e);
            e.exit_code()
        }
    };
    std::process::exit(code.as_i32());
}

fn run(cli: Cli) -> Result<()> {
    let settings = load_settings(cli.env_file.as_deref())?;
    run_command(cli.command, settings)
}

fn load_settings(env_file: Option<&Path>) -> Result<&'static Settings> {
    if let Some(path) = env_file {
        SettingsLoader::new()
            .load_dotenv_file(path)
            .with_context(|| format!("Failed to load environment file {}", path.display()))?;
    }
    get_settings().context("Failed to load settings")
}

fn report_error(e: &anyhow::Error) {
    let validation = e
        .chain()
        .find_map(|cause| cause.downcast_ref::<SettingsError>())
        .filter(|err| matches!(err, SettingsError::Validation(_)));

    match validation {
        Some(err) => {
            eprintln!("Error: invalid settings");
            for field in err.field_errors() {
                eprintln!("  - {field}");
            }
        }
        None => eprintln!("Error: {e:#}"),
    }
}
