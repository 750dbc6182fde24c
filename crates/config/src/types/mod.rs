//! Settings type definitions for the LLMOps backend.
//!
//! Responsibilities:
//! - Define the typed `Settings` object and its per-service sections.
//! - Define the supported relational database kinds (`RdbName`).
//! - Define the loaded-model registries and their metadata type.
//!
//! Does NOT handle:
//! - Loading values from `.env` files or the environment (see `loader` module).
//! - Talking to the databases, tracking server, or storage services configured here.
//!
//! Invariants:
//! - All secret values use `secrecy::SecretString` to prevent accidental logging.
//! - `SettingsSummary` is the only serializable view and carries no secrets.

mod rdb;
mod registry;
pub(crate) mod settings;
mod summary;

pub use rdb::{ParseRdbNameError, RdbName};
pub use registry::{ModelMetadata, ModelRegistry};
pub use settings::{DatabaseConfig, MilvusConfig, MlflowConfig, ObjectStorageConfig, Settings};
pub use summary::{DatabaseSummary, MilvusSummary, MlflowSummary, SettingsSummary};
