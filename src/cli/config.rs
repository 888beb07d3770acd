//! `config` command
//!
//! Prints resolved paths and settings. The first run also writes the default
//! settings file so there is something to edit.

use crate::config::{BudgetPaths, Settings};
use crate::error::BudgetResult;

/// Handle `config`
pub fn handle_config_command(paths: &BudgetPaths, settings: &Settings) -> BudgetResult<()> {
    let settings_file = paths.settings_file();
    if !settings_file.exists() {
        settings.save(paths)?;
        println!("Wrote default settings to {}", settings_file.display());
        println!();
    }

    println!("Budget Tracker Configuration");
    println!("============================");
    println!("Base directory: {}", paths.base_dir().display());
    println!("Settings file:  {}", settings_file.display());
    println!("Budget file:    {}", paths.budget_file().display());
    println!();
    println!("Settings:");
    println!("  Currency symbol: {}", settings.currency_symbol);
    println!("  Log level:       {}", settings.log_level);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_writes_defaults_once() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        handle_config_command(&paths, &Settings::default()).unwrap();
        assert_eq!(Settings::load_or_create(&paths).unwrap(), Settings::default());

        // An edited file is left alone on later runs
        std::fs::write(paths.settings_file(), r#"{"currency_symbol": "£"}"#).unwrap();
        let edited = Settings::load_or_create(&paths).unwrap();
        handle_config_command(&paths, &edited).unwrap();

        let reloaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(reloaded.currency_symbol, "£");
        let raw = std::fs::read_to_string(paths.settings_file()).unwrap();
        assert!(!raw.contains("log_level"));
    }
}
