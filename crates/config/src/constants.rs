//! Centralized constants for the LLMOps settings workspace.
//!
//! Environment variable names are matched case-sensitively and are kept
//! here so the loader, the CLI, and the tests agree on a single spelling.

// =============================================================================
// Defaults
// =============================================================================

/// Default API route prefix.
pub const DEFAULT_API_V1_STR: &str = "/api/v1";

/// Default debug flag.
pub const DEFAULT_DEBUG: bool = false;

/// Placeholder used in place of credentials in log-safe output.
pub const REDACTED: &str = "***";

// =============================================================================
// Loader Controls
// =============================================================================

/// Set to `1` or `true` to skip `.env` loading entirely.
pub const DOTENV_DISABLED: &str = "DOTENV_DISABLED";

/// Overrides the location of the `.env` file read by `load_dotenv()`.
pub const SETTINGS_ENV_FILE: &str = "SETTINGS_ENV_FILE";

// =============================================================================
// Optional Settings
// =============================================================================

pub const API_V1_STR: &str = "API_V1_STR";
pub const DEBUG: &str = "DEBUG";

// =============================================================================
// Relational Database
// =============================================================================

pub const DB_TYPE: &str = "DB_TYPE";
pub const DB_NAME: &str = "DB_NAME";
pub const DB_USER: &str = "DB_USER";
pub const DB_PASSWORD: &str = "DB_PASSWORD";
pub const DB_HOST: &str = "DB_HOST";
pub const DB_PORT: &str = "DB_PORT";

pub const ENCRYPTION_KEY: &str = "ENCRYPTION_KEY";

// =============================================================================
// MLflow Tracking
// =============================================================================

pub const MLFLOW_TRACKING_URI: &str = "MLFLOW_TRACKING_URI";
pub const MLFLOW_TRACKING_USERNAME: &str = "MLFLOW_TRACKING_USERNAME";
pub const MLFLOW_TRACKING_PASSWORD: &str = "MLFLOW_TRACKING_PASSWORD";
pub const MLFLOW_EXPERIMENT_NAME: &str = "MLFLOW_EXPERIMENT_NAME";

// =============================================================================
// Object Storage
// =============================================================================

pub const OBJECT_STORAGE_URI: &str = "OBJECT_STORAGE_URI";
pub const OBJECT_STORAGE_ACCESS_KEY: &str = "OBJECT_STORAGE_ACCESS_KEY";
pub const OBJECT_STORAGE_SECRET_KEY: &str = "OBJECT_STORAGE_SECRET_KEY";

pub const HUGGINGFACE_TOKEN: &str = "HUGGINGFACE_TOKEN";

// =============================================================================
// Milvus Vector Database
// =============================================================================

pub const MILVUS_DB_USERNAME: &str = "MILVUS_DB_USERNAME";
pub const MILVUS_DB_PASSWORD: &str = "MILVUS_DB_PASSWORD";
pub const MILVUS_DB_HOST: &str = "MILVUS_DB_HOST";
pub const MILVUS_DB_PORT: &str = "MILVUS_DB_PORT";
pub const MILVUS_DB_NAME: &str = "MILVUS_DB_NAME";
pub const MILVUS_ADMIN_PORT: &str = "MILVUS_ADMIN_PORT";

/// Field name the combined loaded-models accessor looks up. No such field
/// exists on `Settings`.
pub const LOADED_MODELS: &str = "LOADED_MODELS";

/// Every variable that must be present and non-empty, in declaration order.
pub const REQUIRED_VARS: &[&str] = &[
    DB_TYPE,
    DB_NAME,
    DB_USER,
    DB_PASSWORD,
    DB_HOST,
    DB_PORT,
    ENCRYPTION_KEY,
    MLFLOW_TRACKING_URI,
    MLFLOW_TRACKING_USERNAME,
    MLFLOW_TRACKING_PASSWORD,
    MLFLOW_EXPERIMENT_NAME,
    OBJECT_STORAGE_URI,
    OBJECT_STORAGE_ACCESS_KEY,
    OBJECT_STORAGE_SECRET_KEY,
    HUGGINGFACE_TOKEN,
    MILVUS_DB_USERNAME,
    MILVUS_DB_PASSWORD,
    MILVUS_DB_HOST,
    MILVUS_DB_PORT,
    MILVUS_DB_NAME,
    MILVUS_ADMIN_PORT,
];

/// Variables with a default value.
pub const OPTIONAL_VARS: &[&str] = &[API_V1_STR, DEBUG];
