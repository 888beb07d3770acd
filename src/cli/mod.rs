//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod budget;
pub mod config;
pub mod menu;

pub use budget::{handle_add_command, handle_summary_command, parse_amount};
pub use config::handle_config_command;
pub use menu::run_menu;
