//! Database URI command implementation.

use anyhow::Result;
use llmops_config::Settings;
use secrecy::ExposeSecret;
use std::io::Write;

pub fn run(settings: &Settings, reveal: bool, out: &mut impl Write) -> Result<()> {
    if reveal {
        writeln!(out, "{}", settings.db_uri().expose_secret())?;
    } else {
        writeln!(out, "{}", settings.redacted_db_uri())?;
    }
    Ok(())
}
