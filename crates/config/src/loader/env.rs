//! Environment variable reading for settings.
//!
//! Responsibilities:
//! - Read every known settings variable from the process environment.
//! - Apply the values found to a `SettingsLoader` instance.
//! - Provide a helper for reading env vars with empty/whitespace filtering.
//!
//! Does NOT handle:
//! - Type coercion or required-field checks (see builder.rs).
//! - .env file loading (handled by `SettingsLoader::load_dotenv`).
//!
//! Invariants:
//! - Variable names are matched case-sensitively.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Non-blank values are returned exactly as set, surrounding whitespace included.

use super::builder::SettingsLoader;
use crate::constants::{OPTIONAL_VARS, REQUIRED_VARS};

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Otherwise the raw value is returned unchanged.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|s| !s.trim().is_empty())
}

/// Apply environment variable values to the loader.
///
/// Variables that are unset leave any value already on the loader untouched.
pub fn apply_env(loader: &mut SettingsLoader) {
    for &var in REQUIRED_VARS.iter().chain(OPTIONAL_VARS) {
        if let Some(value) = env_var_or_none(var) {
            loader.set_value(var, value);
        }
    }
}
