//! Check command implementation.

use anyhow::Result;
use llmops_config::Settings;
use std::io::Write;
use tracing::info;

/// Report that settings loaded. Loading already validated every field.
pub fn run(settings: &Settings, out: &mut impl Write) -> Result<()> {
    info!(db_uri = %settings.redacted_db_uri(), "Settings validated");

    writeln!(out, "Settings OK")?;
    if let Err(e) = settings.clean_rdb_type() {
        writeln!(out, "warning: {e}")?;
    }
    Ok(())
}
