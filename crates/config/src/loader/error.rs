//! Error types for settings loading.
//!
//! Responsibilities:
//! - Define error variants for all settings loading failures.
//! - Describe each offending field of a failed build (`FieldError`).
//!
//! Does NOT handle:
//! - Database kind lookup failures (see `ParseRdbNameError` in `types`).
//!
//! Invariants:
//! - A validation failure reports every offending field, not only the first.
//! - Field errors name the variable and never include its value.
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::fmt;
use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Why a single field failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldErrorKind {
    /// Unset, empty, or whitespace-only.
    Missing,
    /// Present but not coercible to the field's type.
    Invalid { message: String },
}

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub var: &'static str,
    pub kind: FieldErrorKind,
}

impl FieldError {
    pub fn missing(var: &'static str) -> Self {
        Self {
            var,
            kind: FieldErrorKind::Missing,
        }
    }

    pub fn invalid(var: &'static str, message: impl Into<String>) -> Self {
        Self {
            var,
            kind: FieldErrorKind::Invalid {
                message: message.into(),
            },
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            FieldErrorKind::Missing => write!(f, "{}: field required", self.var),
            FieldErrorKind::Invalid { message } => write!(f, "{}: {}", self.var, message),
        }
    }
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Errors that can occur while loading or reading settings.
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("{} validation error(s) for Settings: {}", .0.len(), join_field_errors(.0))]
    Validation(Vec<FieldError>),

    #[error("Settings has no field named '{0}'")]
    UnknownField(&'static str),

    #[error("Environment file not found at {path}")]
    EnvFileNotFound { path: PathBuf },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    ///
    /// SAFETY: This error does not include any raw dotenv content.
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

impl SettingsError {
    /// Field errors of a validation failure; empty for other variants.
    pub fn field_errors(&self) -> &[FieldError] {
        match self {
            Self::Validation(errors) => errors,
            _ => &[],
        }
    }

    /// Whether `var` is among the reported field errors.
    pub fn names_field(&self, var: &str) -> bool {
        self.field_errors().iter().any(|e| e.var == var)
    }
}

impl From<dotenvy::Error> for SettingsError {
    fn from(error: dotenvy::Error) -> Self {
        match error {
            dotenvy::Error::LineParse(_, idx) => SettingsError::DotenvParse { error_index: idx },
            dotenvy::Error::Io(io_err) => SettingsError::DotenvIo {
                kind: io_err.kind(),
            },
            _ => SettingsError::DotenvUnknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_lists_every_field() {
        let err = SettingsError::Validation(vec![
            FieldError::missing("DB_HOST"),
            FieldError::invalid("DEBUG", "input should be a valid boolean"),
        ]);
        let message = err.to_string();

        assert!(message.starts_with("2 validation error(s)"), "{message}");
        assert!(message.contains("DB_HOST: field required"), "{message}");
        assert!(
            message.contains("DEBUG: input should be a valid boolean"),
            "{message}"
        );
        assert!(err.names_field("DB_HOST"));
        assert!(!err.names_field("DB_PORT"));
    }

    #[test]
    fn test_dotenv_parse_error_omits_line_content() {
        let err: SettingsError =
            dotenvy::Error::LineParse("SECRET=abc def ghi".to_string(), 11).into();
        let message = err.to_string();

        assert!(matches!(err, SettingsError::DotenvParse { error_index: 11 }));
        assert!(!message.contains("abc"), "{message}");
    }

    #[test]
    fn test_non_validation_errors_have_no_field_errors() {
        assert!(SettingsError::UnknownField("LOADED_MODELS")
            .field_errors()
            .is_empty());
    }
}
