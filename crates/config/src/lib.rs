//! Settings management for the LLMOps backend.
//!
//! This crate loads the backend's environment-driven settings (relational
//! database, MLflow tracking, object storage, Hugging Face, and Milvus) into
//! a typed `Settings` object and keeps registries of loaded models.

mod accessor;
pub mod constants;
mod loader;
pub mod types;

pub use accessor::get_settings;
pub use loader::{FieldError, FieldErrorKind, SettingsError, SettingsLoader, env_var_or_none};
pub use types::{
    DatabaseConfig, MilvusConfig, MlflowConfig, ModelMetadata, ModelRegistry, ObjectStorageConfig,
    ParseRdbNameError, RdbName, Settings, SettingsSummary,
};
