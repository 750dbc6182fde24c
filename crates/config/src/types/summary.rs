//! Secret-free, serializable view of `Settings`.

use serde::Serialize;

use crate::types::settings::Settings;

/// What an operator may safely see about the active settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SettingsSummary {
    pub api_v1_str: String,
    pub debug: bool,
    pub database: DatabaseSummary,
    pub mlflow: MlflowSummary,
    pub object_storage_uri: String,
    pub milvus: MilvusSummary,
    pub loaded_llms: Vec<String>,
    pub loaded_embedding_models: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DatabaseSummary {
    pub kind: String,
    /// Normalized name, or `None` when the kind is not a supported scheme.
    pub name: Option<&'static str>,
    pub uri: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MlflowSummary {
    pub tracking_uri: String,
    pub experiment_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MilvusSummary {
    pub host: String,
    pub port: String,
    pub name: String,
    pub admin_port: String,
}

impl SettingsSummary {
    pub(crate) fn from_settings(settings: &Settings) -> Self {
        Self {
            api_v1_str: settings.api_v1_str.clone(),
            debug: settings.debug,
            database: DatabaseSummary {
                kind: settings.database.kind.clone(),
                name: settings.clean_rdb_type().ok(),
                uri: settings.redacted_db_uri(),
            },
            mlflow: MlflowSummary {
                tracking_uri: settings.mlflow.tracking_uri.clone(),
                experiment_name: settings.mlflow.experiment_name.clone(),
            },
            object_storage_uri: settings.object_storage.uri.clone(),
            milvus: MilvusSummary {
                host: settings.milvus.host.clone(),
                port: settings.milvus.port.clone(),
                name: settings.milvus.name.clone(),
                admin_port: settings.milvus.admin_port.clone(),
            },
            loaded_llms: settings.llms().keys(),
            loaded_embedding_models: settings.embedding_models().keys(),
        }
    }
}
