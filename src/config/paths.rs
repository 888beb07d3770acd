//! Path management for the budget tracker
//!
//! ## Path Resolution Order
//!
//! 1. `BUDGET_TRACKER_DIR` environment variable (if set)
//! 2. The platform config directory reported by `directories`
//!    (`~/.config/budget-tracker` on Linux)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::BudgetError;

/// Environment variable that overrides the base directory
pub const DIR_ENV_VAR: &str = "BUDGET_TRACKER_DIR";

/// Manages all paths used by the budget tracker
#[derive(Debug, Clone)]
pub struct BudgetPaths {
    base_dir: PathBuf,
    budget_file: Option<PathBuf>,
}

impl BudgetPaths {
    /// Resolve paths from the environment or the platform defaults
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, BudgetError> {
        let base_dir = match std::env::var_os(DIR_ENV_VAR) {
            Some(custom) if !custom.is_empty() => PathBuf::from(custom),
            _ => ProjectDirs::from("", "", "budget-tracker")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    BudgetError::Config("Could not determine a home directory".into())
                })?,
        };

        Ok(Self::with_base_dir(base_dir))
    }

    /// Create paths rooted at a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self {
            base_dir,
            budget_file: None,
        }
    }

    /// Use an explicit budget file instead of `<base>/data/budget.json`
    pub fn with_budget_file(mut self, path: PathBuf) -> Self {
        self.budget_file = Some(path);
        self
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the data directory (`<base>/data`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the budget record
    pub fn budget_file(&self) -> PathBuf {
        self.budget_file
            .clone()
            .unwrap_or_else(|| self.data_dir().join("budget.json"))
    }
}
