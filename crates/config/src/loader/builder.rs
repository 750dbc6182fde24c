//! Settings loader builder implementation.
//!
//! Responsibilities:
//! - Provide a builder-pattern `SettingsLoader` that gathers raw values from
//!   `.env` files, the process environment, and direct builder methods.
//! - Coerce gathered values into a typed `Settings`, reporting every
//!   missing or malformed field at once.
//!
//! Does NOT handle:
//! - Direct environment variable reading (delegated to env.rs).
//! - Caching a process-wide instance (see `get_settings`).
//!
//! Invariants / Assumptions:
//! - Process environment variables take precedence over `.env` values;
//!   dotenvy never overwrites a variable that is already set.
//! - Builder methods applied after `from_env()` take precedence over env values.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before any implicit `.env` discovery.

use secrecy::SecretString;
use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use super::env::{apply_env, env_var_or_none};
use super::error::{FieldError, SettingsError};
use crate::constants::{
    API_V1_STR, DB_HOST, DB_NAME, DB_PASSWORD, DB_PORT, DB_TYPE, DB_USER, DEBUG,
    DEFAULT_API_V1_STR, DEFAULT_DEBUG, DOTENV_DISABLED, ENCRYPTION_KEY, HUGGINGFACE_TOKEN,
    MILVUS_ADMIN_PORT, MILVUS_DB_HOST, MILVUS_DB_NAME, MILVUS_DB_PASSWORD, MILVUS_DB_PORT,
    MILVUS_DB_USERNAME, MLFLOW_EXPERIMENT_NAME, MLFLOW_TRACKING_PASSWORD, MLFLOW_TRACKING_URI,
    MLFLOW_TRACKING_USERNAME, OBJECT_STORAGE_ACCESS_KEY, OBJECT_STORAGE_SECRET_KEY,
    OBJECT_STORAGE_URI, SETTINGS_ENV_FILE,
};
use crate::types::{DatabaseConfig, MilvusConfig, MlflowConfig, ObjectStorageConfig, Settings};

/// Loader that builds `Settings` from `.env` files, environment variables,
/// and explicit overrides.
#[derive(Default)]
pub struct SettingsLoader {
    values: BTreeMap<&'static str, String>,
}

// Values may be credentials, so only variable names are shown.
impl fmt::Debug for SettingsLoader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SettingsLoader")
            .field("vars", &self.values.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl SettingsLoader {
    /// Create a new, empty settings loader.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var(DOTENV_DISABLED).ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from a `.env` file if present.
    ///
    /// The file named by `SETTINGS_ENV_FILE` is loaded when that variable is
    /// set; otherwise `.env` is searched for in the current directory and its
    /// parents. Variables already present in the process are left untouched.
    ///
    /// If `DOTENV_DISABLED` is set to "true" or "1", nothing is loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`SettingsError::DotenvParse`)
    /// - The `.env` file exists but cannot be read (`SettingsError::DotenvIo`)
    /// - `SETTINGS_ENV_FILE` names a file that does not exist (`SettingsError::EnvFileNotFound`)
    ///
    /// A missing `.env` in the working directory is silently ignored.
    pub fn load_dotenv(self) -> Result<Self, SettingsError> {
        if Self::dotenv_disabled() {
            tracing::debug!("Skipping .env loading: {DOTENV_DISABLED} is set");
            return Ok(self);
        }

        if let Some(path) = env_var_or_none(SETTINGS_ENV_FILE) {
            return self.load_dotenv_file(path);
        }

        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "Loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => {
                tracing::debug!("No .env file found");
                Ok(self)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Load environment variables from an explicit `.env` file.
    ///
    /// Unlike `load_dotenv()`, a missing file is an error and
    /// `DOTENV_DISABLED` is not consulted.
    pub fn load_dotenv_file(self, path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        match dotenvy::from_path(path) {
            Ok(()) => {
                tracing::debug!(path = %path.display(), "Loaded .env file");
                Ok(self)
            }
            Err(e) if Self::is_not_found(&e) => Err(SettingsError::EnvFileNotFound {
                path: path.to_path_buf(),
            }),
            Err(e) => Err(e.into()),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Read settings from environment variables.
    pub fn from_env(mut self) -> Self {
        apply_env(&mut self);
        self
    }

    /// Set a raw value for a settings variable, e.g. `with_value("DB_HOST", "db")`.
    ///
    /// Names that do not correspond to a settings field are ignored by `build()`.
    pub fn with_value(mut self, var: &'static str, value: impl Into<String>) -> Self {
        self.set_value(var, value.into());
        self
    }

    /// Set the API route prefix.
    pub fn with_api_v1_str(self, prefix: impl Into<String>) -> Self {
        self.with_value(API_V1_STR, prefix)
    }

    /// Set the debug flag.
    pub fn with_debug(self, debug: bool) -> Self {
        self.with_value(DEBUG, debug.to_string())
    }

    /// Build the final settings.
    ///
    /// Every field is checked before returning, so a failure lists all
    /// missing or malformed variables.
    pub fn build(self) -> Result<Settings, SettingsError> {
        let mut fields = FieldCollector::new(&self.values);

        let api_v1_str = fields
            .optional(API_V1_STR)
            .unwrap_or_else(|| DEFAULT_API_V1_STR.to_string());
        let debug = fields.bool_or(DEBUG, DEFAULT_DEBUG);

        let database = DatabaseConfig {
            kind: fields.required(DB_TYPE),
            name: fields.required(DB_NAME),
            user: fields.required(DB_USER),
            password: fields.secret(DB_PASSWORD),
            host: fields.required(DB_HOST),
            port: fields.required(DB_PORT),
        };
        let encryption_key = fields.secret(ENCRYPTION_KEY);
        let mlflow = MlflowConfig {
            tracking_uri: fields.required(MLFLOW_TRACKING_URI),
            tracking_username: fields.required(MLFLOW_TRACKING_USERNAME),
            tracking_password: fields.secret(MLFLOW_TRACKING_PASSWORD),
            experiment_name: fields.required(MLFLOW_EXPERIMENT_NAME),
        };
        let object_storage = ObjectStorageConfig {
            uri: fields.required(OBJECT_STORAGE_URI),
            access_key: fields.required(OBJECT_STORAGE_ACCESS_KEY),
            secret_key: fields.secret(OBJECT_STORAGE_SECRET_KEY),
        };
        let huggingface_token = fields.secret(HUGGINGFACE_TOKEN);
        let milvus = MilvusConfig {
            username: fields.required(MILVUS_DB_USERNAME),
            password: fields.secret(MILVUS_DB_PASSWORD),
            host: fields.required(MILVUS_DB_HOST),
            port: fields.required(MILVUS_DB_PORT),
            name: fields.required(MILVUS_DB_NAME),
            admin_port: fields.required(MILVUS_ADMIN_PORT),
        };

        let errors = fields.into_errors();
        if !errors.is_empty() {
            let vars: Vec<&str> = errors.iter().map(|e| e.var).collect();
            tracing::warn!(fields = ?vars, "Settings validation failed");
            return Err(SettingsError::Validation(errors));
        }

        let settings = Settings::new(
            api_v1_str,
            debug,
            database,
            encryption_key,
            mlflow,
            object_storage,
            huggingface_token,
            milvus,
        );
        tracing::debug!(
            db_uri = %settings.redacted_db_uri(),
            debug = settings.debug,
            "Settings loaded"
        );
        Ok(settings)
    }

    // Internal accessor methods for use by other loader modules

    #[cfg(test)]
    pub(crate) fn value(&self, var: &str) -> Option<&str> {
        self.values.get(var).map(String::as_str)
    }

    pub(crate) fn set_value(&mut self, var: &'static str, value: String) {
        self.values.insert(var, value);
    }
}

/// Parse a boolean the way the settings file format allows.
///
/// Accepts `true/false`, `1/0`, `yes/no`, `on/off`, `t/f`, and `y/n`,
/// case-insensitively.
fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" | "t" | "y" => Some(true),
        "false" | "0" | "no" | "off" | "f" | "n" => Some(false),
        _ => None,
    }
}

/// Reads fields out of the gathered values, recording every failure.
struct FieldCollector<'a> {
    values: &'a BTreeMap<&'static str, String>,
    errors: Vec<FieldError>,
}

impl<'a> FieldCollector<'a> {
    fn new(values: &'a BTreeMap<&'static str, String>) -> Self {
        Self {
            values,
            errors: Vec::new(),
        }
    }

    /// Blank values count as unset; anything else is kept verbatim.
    fn optional(&self, var: &'static str) -> Option<String> {
        self.values
            .get(var)
            .filter(|v| !v.trim().is_empty())
            .cloned()
    }

    /// Returns an empty string (and records the failure) when missing.
    fn required(&mut self, var: &'static str) -> String {
        self.optional(var).unwrap_or_else(|| {
            self.errors.push(FieldError::missing(var));
            String::new()
        })
    }

    fn secret(&mut self, var: &'static str) -> SecretString {
        SecretString::new(self.required(var).into())
    }

    fn bool_or(&mut self, var: &'static str, default: bool) -> bool {
        let Some(raw) = self.optional(var) else {
            return default;
        };
        parse_bool(&raw).unwrap_or_else(|| {
            self.errors.push(FieldError::invalid(
                var,
                "input should be a valid boolean, unable to interpret input",
            ));
            default
        })
    }

    fn into_errors(self) -> Vec<FieldError> {
        self.errors
    }
}
