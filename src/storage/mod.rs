//! Storage layer for the budget tracker
//!
//! JSON file storage with atomic writes and automatic directory creation.

pub mod budget;
pub mod file_io;

pub use budget::{BudgetStore, Loaded};
pub use file_io::{read_json, write_json_atomic};
