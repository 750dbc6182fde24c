//! The process settings object and its per-service sections.
//!
//! Responsibilities:
//! - Define `Settings`, grouping every environment-derived value by the
//!   service it configures (relational DB, MLflow, object storage, Milvus).
//! - Provide derived values: the database URI and the normalized database kind.
//! - Own the two loaded-model registries and expose registration helpers.
//!
//! Does NOT handle:
//! - Reading the environment or `.env` files (see `loader` module).
//! - Connecting to any of the services described here.
//!
//! Invariants:
//! - Credentials are held as `SecretString` and never appear in `Debug` output.
//! - `db_uri()` interpolates values verbatim; nothing is percent-encoded.
//! - `loaded_models()` always fails: `Settings` has no `LOADED_MODELS` field.

use secrecy::{ExposeSecret, SecretString};

use crate::constants::{LOADED_MODELS, REDACTED};
use crate::loader::SettingsError;
use crate::types::rdb::{ParseRdbNameError, RdbName};
use crate::types::registry::{ModelMetadata, ModelRegistry};
use crate::types::summary::SettingsSummary;

/// Relational database connection settings.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Raw connection scheme (`DB_TYPE`), e.g. `mysql+pymysql`.
    pub kind: String,
    pub name: String,
    pub user: String,
    pub password: SecretString,
    pub host: String,
    /// Kept as configured; not parsed as a number.
    pub port: String,
}

/// MLflow tracking server settings.
#[derive(Debug, Clone)]
pub struct MlflowConfig {
    pub tracking_uri: String,
    pub tracking_username: String,
    pub tracking_password: SecretString,
    pub experiment_name: String,
}

/// S3-compatible object storage settings.
#[derive(Debug, Clone)]
pub struct ObjectStorageConfig {
    pub uri: String,
    pub access_key: String,
    pub secret_key: SecretString,
}

/// Milvus vector database settings.
#[derive(Debug, Clone)]
pub struct MilvusConfig {
    pub username: String,
    pub password: SecretString,
    pub host: String,
    pub port: String,
    pub name: String,
    pub admin_port: String,
}

/// Typed configuration for the LLMOps backend.
///
/// Build one with [`SettingsLoader`](crate::SettingsLoader), or use
/// [`get_settings`](crate::get_settings) for the process-wide instance.
#[derive(Debug)]
pub struct Settings {
    /// Route prefix for version 1 of the HTTP API.
    pub api_v1_str: String,
    pub debug: bool,
    pub database: DatabaseConfig,
    pub encryption_key: SecretString,
    pub mlflow: MlflowConfig,
    pub object_storage: ObjectStorageConfig,
    pub huggingface_token: SecretString,
    pub milvus: MilvusConfig,
    llms: ModelRegistry,
    embedding_models: ModelRegistry,
}

impl Settings {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        api_v1_str: String,
        debug: bool,
        database: DatabaseConfig,
        encryption_key: SecretString,
        mlflow: MlflowConfig,
        object_storage: ObjectStorageConfig,
        huggingface_token: SecretString,
        milvus: MilvusConfig,
    ) -> Self {
        Self {
            api_v1_str,
            debug,
            database,
            encryption_key,
            mlflow,
            object_storage,
            huggingface_token,
            milvus,
            llms: ModelRegistry::new("llm"),
            embedding_models: ModelRegistry::new("embedding_model"),
        }
    }

    /// Connection URI for the relational database.
    ///
    /// Formatted as `{scheme}://{user}:{password}@{host}:{port}/{name}` with
    /// the raw `DB_TYPE` as the scheme. Values are not escaped, so reserved
    /// characters in credentials pass through unchanged.
    pub fn db_uri(&self) -> SecretString {
        let db = &self.database;
        SecretString::new(
            format!(
                "{}://{}:{}@{}:{}/{}",
                db.kind,
                db.user,
                db.password.expose_secret(),
                db.host,
                db.port,
                db.name
            )
            .into(),
        )
    }

    /// `db_uri()` with the password masked, safe for logs and terminals.
    pub fn redacted_db_uri(&self) -> String {
        let db = &self.database;
        format!(
            "{}://{}:{}@{}:{}/{}",
            db.kind, db.user, REDACTED, db.host, db.port, db.name
        )
    }

    /// The configured database kind as a typed value.
    pub fn rdb_name(&self) -> Result<RdbName, ParseRdbNameError> {
        self.database.kind.parse()
    }

    /// Human-readable name of the configured database kind (e.g. `MySQL`).
    pub fn clean_rdb_type(&self) -> Result<&'static str, ParseRdbNameError> {
        self.rdb_name().map(RdbName::name)
    }

    /// Combined view of loaded models.
    ///
    /// There is no `LOADED_MODELS` field to read, so this always returns
    /// [`SettingsError::UnknownField`]. Use [`Settings::llms`] and
    /// [`Settings::embedding_models`] instead.
    pub fn loaded_models(&self) -> Result<&ModelRegistry, SettingsError> {
        Err(SettingsError::UnknownField(LOADED_MODELS))
    }

    /// Register a loaded LLM, replacing any entry with the same key.
    pub fn add_llm(&self, key: impl Into<String>, metadata: ModelMetadata) -> Option<ModelMetadata> {
        self.llms.register(key, metadata)
    }

    /// Register a loaded embedding model, replacing any entry with the same key.
    pub fn add_embedding_model(
        &self,
        key: impl Into<String>,
        metadata: ModelMetadata,
    ) -> Option<ModelMetadata> {
        self.embedding_models.register(key, metadata)
    }

    pub fn llms(&self) -> &ModelRegistry {
        &self.llms
    }

    pub fn embedding_models(&self) -> &ModelRegistry {
        &self.embedding_models
    }

    /// Secret-free view of these settings.
    pub fn summary(&self) -> SettingsSummary {
        SettingsSummary::from_settings(self)
    }
}
