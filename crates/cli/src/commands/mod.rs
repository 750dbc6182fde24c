//! CLI command implementations.

pub mod check;
pub mod db_uri;
pub mod rdb_type;
pub mod show;

#[cfg(test)]
pub(crate) mod test_support {
    use llmops_config::{Settings, SettingsLoader, constants};

    /// Settings with every required variable set to a fixed value.
    pub fn settings() -> Settings {
        constants::REQUIRED_VARS
            .iter()
            .fold(SettingsLoader::new(), |loader, &var| {
                loader.with_value(var, var.to_ascii_lowercase())
            })
            .with_value(constants::DB_TYPE, "mysql+pymysql")
            .with_value(constants::DB_USER, "u")
            .with_value(constants::DB_PASSWORD, "p")
            .with_value(constants::DB_HOST, "h")
            .with_value(constants::DB_PORT, "3306")
            .with_value(constants::DB_NAME, "d")
            .build()
            .expect("all required variables are set")
    }

    pub fn output(run: impl FnOnce(&mut Vec<u8>) -> anyhow::Result<()>) -> String {
        let mut buf = Vec::new();
        run(&mut buf).expect("command should succeed");
        String::from_utf8(buf).expect("output is UTF-8")
    }
}
