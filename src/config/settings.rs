//! User settings for the budget tracker
//!
//! Display and logging preferences, kept in `config.json` next to the data
//! directory.

use serde::{Deserialize, Serialize};

use super::paths::BudgetPaths;
use crate::error::BudgetError;
use crate::storage::write_json_atomic;

/// User settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Currency symbol used when printing amounts
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Default tracing level when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_symbol: default_currency(),
            log_level: default_log_level(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or use defaults if the file doesn't exist
    pub fn load_or_create(paths: &BudgetPaths) -> Result<Self, BudgetError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Not persisted until the caller asks
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| BudgetError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| BudgetError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetPaths) -> Result<(), BudgetError> {
        write_json_atomic(paths.settings_file(), self)
    }
}
