//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map settings errors to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Exit codes 1-3 are reserved for specific error categories.

use llmops_config::{ParseRdbNameError, SettingsError};

/// Structured exit codes for llmops-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure (including .env problems).
    GeneralError = 1,

    /// Invalid settings - required variables missing or malformed.
    ///
    /// Scripts should fix the environment and not retry.
    InvalidSettings = 2,

    /// Unsupported database - `DB_TYPE` is not a known scheme.
    UnsupportedDatabase = 3,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&SettingsError> for ExitCode {
    fn from(err: &SettingsError) -> Self {
        match err {
            SettingsError::Validation(_) => ExitCode::InvalidSettings,
            _ => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no settings error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(settings_err) = cause.downcast_ref::<SettingsError>() {
                return ExitCode::from(settings_err);
            }
            if cause.downcast_ref::<ParseRdbNameError>().is_some() {
                return ExitCode::UnsupportedDatabase;
            }
        }
        ExitCode::GeneralError
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Context;
    use llmops_config::FieldError;

    #[test]
    fn test_exit_code_as_i32() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GeneralError.as_i32(), 1);
        assert_eq!(ExitCode::InvalidSettings.as_i32(), 2);
        assert_eq!(ExitCode::UnsupportedDatabase.as_i32(), 3);
    }

    #[test]
    fn test_validation_error_maps_to_invalid_settings() {
        let err = anyhow::Error::new(SettingsError::Validation(vec![FieldError::missing(
            "DB_HOST",
        )]));
        assert_eq!(err.exit_code(), ExitCode::InvalidSettings);
    }

    #[test]
    fn test_wrapped_rdb_error_maps_to_unsupported_database() {
        let result: Result<(), ParseRdbNameError> = Err(ParseRdbNameError {
            value: "oracle".to_string(),
        });
        let err = result.context("Failed to resolve database type").unwrap_err();
        assert_eq!(err.exit_code(), ExitCode::UnsupportedDatabase);
    }

    #[test]
    fn test_other_errors_are_general() {
        let err = anyhow::Error::new(SettingsError::DotenvUnknown);
        assert_eq!(err.exit_code(), ExitCode::GeneralError);

        let err = anyhow::anyhow!("something else");
        assert_eq!(err.exit_code(), ExitCode::GeneralError);
    }
}
