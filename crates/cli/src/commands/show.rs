//! Show command implementation.

use anyhow::{Context, Result};
use llmops_config::{Settings, SettingsSummary};
use std::io::Write;

pub fn run(settings: &Settings, json: bool, out: &mut impl Write) -> Result<()> {
    let summary = settings.summary();
    if json {
        let rendered =
            serde_json::to_string_pretty(&summary).context("Failed to serialize settings")?;
        writeln!(out, "{rendered}")?;
    } else {
        write_text(&summary, out)?;
    }
    Ok(())
}

fn list_or_dash(keys: &[String]) -> String {
    if keys.is_empty() {
        "-".to_string()
    } else {
        keys.join(", ")
    }
}

fn write_text(summary: &SettingsSummary, out: &mut impl Write) -> Result<()> {
    let db_name = summary.database.name.unwrap_or("unsupported");

    writeln!(out, "API prefix:        {}", summary.api_v1_str)?;
    writeln!(out, "Debug:             {}", summary.debug)?;
    writeln!(
        out,
        "Database:          {} ({})",
        summary.database.uri, db_name
    )?;
    writeln!(
        out,
        "MLflow:            {} (experiment: {})",
        summary.mlflow.tracking_uri, summary.mlflow.experiment_name
    )?;
    writeln!(out, "Object storage:    {}", summary.object_storage_uri)?;
    writeln!(
        out,
        "Milvus:            {}:{}/{} (admin port {})",
        summary.milvus.host, summary.milvus.port, summary.milvus.name, summary.milvus.admin_port
    )?;
    writeln!(out, "Loaded LLMs:       {}", list_or_dash(&summary.loaded_llms))?;
    writeln!(
        out,
        "Loaded embeddings: {}",
        list_or_dash(&summary.loaded_embedding_models)
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::test_support::{output, settings};

    #[test]
    fn test_show_text_redacts_password() {
        let settings = settings();
        let text = output(|out| run(&settings, false, out));

        assert!(text.contains("Database:          mysql+pymysql://u:***@h:3306/d (MySQL)"));
        assert!(text.contains("Loaded LLMs:       -"));
        assert!(!text.contains(":p@"));
    }

    #[test]
    fn test_show_json() {
        let settings = settings();
        let text = output(|out| run(&settings, true, out));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["api_v1_str"], "/api/v1");
        assert_eq!(value["database"]["name"], "MySQL");
        assert_eq!(value["milvus"]["admin_port"], "milvus_admin_port");
        assert!(value.get("encryption_key").is_none());
    }
}
