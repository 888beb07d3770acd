//! Configuration module for the budget tracker
//!
//! - Path resolution for the budget and settings files
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::BudgetPaths;
pub use settings::Settings;
