//! Process-wide settings accessor.
//!
//! `get_settings()` builds `Settings` from `.env` and the environment on the
//! first successful call and hands out the same instance for the rest of the
//! process. Components that want explicit wiring should build their own with
//! `SettingsLoader` and pass it down instead.

use std::sync::OnceLock;

use crate::loader::{SettingsError, SettingsLoader};
use crate::types::Settings;

static SETTINGS: OnceLock<Settings> = OnceLock::new();

/// Return the process-wide settings, constructing them on first use.
///
/// Concurrent first calls may each build a candidate, but only one is
/// published and every caller receives that instance. A failed build is not
/// cached, and there is no way to reset a successful one.
pub fn get_settings() -> Result<&'static Settings, SettingsError> {
    if let Some(settings) = SETTINGS.get() {
        return Ok(settings);
    }

    let settings = SettingsLoader::new().load_dotenv()?.from_env().build()?;
    Ok(SETTINGS.get_or_init(|| settings))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::tests::full_env;
    use crate::types::ModelMetadata;
    use serial_test::serial;

    // The only test in this binary that touches the global instance.
    #[test]
    #[serial]
    fn test_get_settings_returns_identical_instance() {
        let mut vars = full_env();
        vars.push(("DOTENV_DISABLED", Some("1")));

        temp_env::with_vars(vars, || {
            let first = get_settings().expect("settings should build");
            let second = get_settings().expect("settings should be cached");
            assert!(std::ptr::eq(first, second));

            first.add_llm("modelA", ModelMetadata::new("/x"));
            assert!(second.llms().contains("modelA"));
        });
    }
}
