//! Custom error types for the budget tracker
//!
//! Every failure the core can report is a variant of [`BudgetError`], so
//! callers branch on the kind of failure instead of on a message string.

use std::path::PathBuf;

use thiserror::Error;

use crate::models::{Accumulator, Money};

/// The main error type for budget tracker operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors outside the budget file itself
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors outside the budget file
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for amounts and records
    #[error("Validation error: {0}")]
    Validation(String),

    /// An amount of zero or less was passed to an update operation
    #[error("{kind} amount must be positive, got {amount}")]
    InvalidAmount { kind: Accumulator, amount: Money },

    /// The budget file exists but does not hold a readable record
    #[error("Corrupt budget data in {}: {reason}", .path.display())]
    CorruptData { path: PathBuf, reason: String },

    /// The budget file could not be read or written
    #[error("Budget storage unavailable at {}: {reason}", .path.display())]
    StorageUnavailable { path: PathBuf, reason: String },
}

impl BudgetError {
    /// Create a storage error for the given path
    pub fn storage_unavailable(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::StorageUnavailable {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a corrupt-data error for the given path
    pub fn corrupt_data(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::CorruptData {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Check if this is an invalid amount error
    pub fn is_invalid_amount(&self) -> bool {
        matches!(self, Self::InvalidAmount { .. })
    }

    /// Check if this is a corrupt data error
    pub fn is_corrupt_data(&self) -> bool {
        matches!(self, Self::CorruptData { .. })
    }

    /// Check if this is a storage error
    pub fn is_storage_unavailable(&self) -> bool {
        matches!(self, Self::StorageUnavailable { .. })
    }
}

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for budget tracker operations
pub type BudgetResult<T> = Result<T, BudgetError>;
