//! Shared test utilities for llmops-cli integration tests.
//!
//! Responsibilities:
//! - Provide a hermetic CLI command factory that prevents dotenv loading.
//! - Provide a complete set of settings variables for the child process.
//!
//! Invariants / Assumptions:
//! - All integration tests using this helper will be hermetic by default.
//! - Every settings variable is either set explicitly or removed, so nothing
//!   leaks in from the host environment.

use assert_cmd::Command;

pub const FULL_ENV: &[(&str, &str)] = &[
    ("DB_TYPE", "mysql+pymysql"),
    ("DB_NAME", "d"),
    ("DB_USER", "u"),
    ("DB_PASSWORD", "p"),
    ("DB_HOST", "h"),
    ("DB_PORT", "3306"),
    ("ENCRYPTION_KEY", "enc-key"),
    ("MLFLOW_TRACKING_URI", "http://mlflow:5000"),
    ("MLFLOW_TRACKING_USERNAME", "mlflow"),
    ("MLFLOW_TRACKING_PASSWORD", "mlflow-pass"),
    ("MLFLOW_EXPERIMENT_NAME", "default"),
    ("OBJECT_STORAGE_URI", "http://minio:9000"),
    ("OBJECT_STORAGE_ACCESS_KEY", "minio"),
    ("OBJECT_STORAGE_SECRET_KEY", "minio-secret"),
    ("HUGGINGFACE_TOKEN", "hf_token"),
    ("MILVUS_DB_USERNAME", "root"),
    ("MILVUS_DB_PASSWORD", "milvus-pass"),
    ("MILVUS_DB_HOST", "milvus"),
    ("MILVUS_DB_PORT", "19530"),
    ("MILVUS_DB_NAME", "default"),
    ("MILVUS_ADMIN_PORT", "9091"),
];

/// Returns a hermetic `llmops-cli` command with no settings variables set.
///
/// It ensures:
/// - `DOTENV_DISABLED=1` is set to prevent local `.env` contamination.
/// - All settings variables are cleared to ensure no leakage from the host.
pub fn bare_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("llmops-cli");
    cmd.env("DOTENV_DISABLED", "1")
        .env_remove("SETTINGS_ENV_FILE")
        .env_remove("API_V1_STR")
        .env_remove("DEBUG")
        .env_remove("RUST_LOG");
    for (key, _) in FULL_ENV {
        cmd.env_remove(key);
    }
    cmd
}

/// Returns a hermetic `llmops-cli` command with a complete, valid environment.
pub fn llmops_cmd() -> Command {
    let mut cmd = bare_cmd();
    cmd.envs(FULL_ENV.iter().copied());
    cmd
}
