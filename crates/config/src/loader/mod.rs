//! Settings loader for `.env` files and environment variables.
//!
//! Responsibilities:
//! - Load `.env` files into the process environment.
//! - Gather settings values from the environment and builder overrides.
//! - Build a validated `Settings`, aggregating every field error.
//!
//! Does NOT handle:
//! - Caching the process-wide instance (see `accessor.rs`).
//! - Hot-reloading; values are read once per build.
//!
//! Invariants / Assumptions:
//! - Environment variables take precedence over `.env` file values.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

mod builder;
mod env;
mod error;

pub use builder::SettingsLoader;
pub use env::env_var_or_none;
pub use error::{FieldError, FieldErrorKind, SettingsError};

#[cfg(test)]
pub(crate) mod tests;
