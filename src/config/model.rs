//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a sensible default so the application works out of the box.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event-loop tick interval in milliseconds.
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Display format for task due dates.
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            date_format: default_date_format(),
        }
    }
}

fn default_tick_rate_ms() -> u64 {
    50
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Overrides the default tasks file location (data directory).
    #[serde(default)]
    pub tasks_file: Option<PathBuf>,
}

impl StorageConfig {
    pub fn tasks_path(&self) -> PathBuf {
        self.tasks_file
            .clone()
            .unwrap_or_else(crate::todo::default_tasks_path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.ui.tick_rate_ms, 50);
        assert_eq!(config.ui.date_format, "%Y-%m-%d");
        assert_eq!(config.storage.tasks_file, None);
    }

    #[test]
    fn test_partial_config_fills_missing_fields() {
        let config: AppConfig = toml::from_str("[ui]\ntick_rate_ms = 100\n").unwrap();
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.ui.date_format, "%Y-%m-%d");
    }

    #[test]
    fn test_tasks_file_override() {
        let config: AppConfig =
            toml::from_str("[storage]\ntasks_file = \"/tmp/t.json\"\n").unwrap();
        assert_eq!(config.storage.tasks_path(), PathBuf::from("/tmp/t.json"));
    }
}
