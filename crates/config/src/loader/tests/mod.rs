//! Tests for the settings loader.
//!
//! Responsibilities:
//! - Test builder overrides and derived values on built settings.
//! - Test `.env` loading, its gates, and its precedence relative to the environment.
//! - Test environment variable reading and required-field validation.
//!
//! Invariants:
//! - Tests that read or mutate the process environment are `#[serial]`.
//! - Environment changes go through `temp_env` so they are restored afterwards.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use crate::constants::{OPTIONAL_VARS, REQUIRED_VARS};


/// A complete, valid environment for building settings.
pub fn full_env() -> Vec<(&'static str, Option<&'static str>)> {
    vec![
        ("API_V1_STR", None),
        ("DEBUG", None),
        ("DB_TYPE", Some("mysql+pymysql")),
        ("DB_NAME", Some("d")),
        ("DB_USER", Some("u")),
        ("DB_PASSWORD", Some("p")),
        ("DB_HOST", Some("h")),
        ("DB_PORT", Some("3306")),
        ("ENCRYPTION_KEY", Some("enc-key")),
        ("MLFLOW_TRACKING_URI", Some("http://mlflow:5000")),
        ("MLFLOW_TRACKING_USERNAME", Some("mlflow")),
        ("MLFLOW_TRACKING_PASSWORD", Some("mlflow-pass")),
        ("MLFLOW_EXPERIMENT_NAME", Some("default")),
        ("OBJECT_STORAGE_URI", Some("http://minio:9000")),
        ("OBJECT_STORAGE_ACCESS_KEY", Some("minio")),
        ("OBJECT_STORAGE_SECRET_KEY", Some("minio-secret")),
        ("HUGGINGFACE_TOKEN", Some("hf_token")),
        ("MILVUS_DB_USERNAME", Some("root")),
        ("MILVUS_DB_PASSWORD", Some("milvus-pass")),
        ("MILVUS_DB_HOST", Some("milvus")),
        ("MILVUS_DB_PORT", Some("19530")),
        ("MILVUS_DB_NAME", Some("default")),
        ("MILVUS_ADMIN_PORT", Some("9091")),
    ]
}

/// `full_env()` with `overrides` applied on top (`None` unsets a variable).
pub fn env_with(
    overrides: &[(&'static str, Option<&'static str>)],
) -> Vec<(&'static str, Option<&'static str>)> {
    let mut vars = full_env();
    for &(key, value) in overrides {
        match vars.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => vars.push((key, value)),
        }
    }
    vars
}

/// Every settings variable unset.
pub fn empty_env() -> Vec<(&'static str, Option<&'static str>)> {
    REQUIRED_VARS
        .iter()
        .chain(OPTIONAL_VARS)
        .map(|&var| (var, None))
        .collect()
}

#[test]
fn test_full_env_covers_every_variable() {
    let vars = full_env();
    for var in REQUIRED_VARS.iter().chain(OPTIONAL_VARS) {
        assert!(vars.iter().any(|(k, _)| k == var), "full_env() is missing {var}");
    }
}
