//! Display formatting for CLI output
//!
//! Renders records with two-decimal currency strings. The core never formats
//! amounts for people; these helpers do.

pub mod summary;

pub use summary::{format_summary_lines, format_summary_table};
