//! Database type command implementation.

use anyhow::{Context, Result};
use llmops_config::Settings;
use std::io::Write;

pub fn run(settings: &Settings, out: &mut impl Write) -> Result<()> {
    let name = settings
        .clean_rdb_type()
        .context("Failed to resolve DB_TYPE")?;
    writeln!(out, "{name}")?;
    Ok(())
}
