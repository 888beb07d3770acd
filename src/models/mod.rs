//! Core data models for the budget tracker
//!
//! `Money` is the fixed-point amount type and `BudgetRecord` is the single
//! persisted entity.

pub mod money;
pub mod record;

pub use money::{Money, MoneyParseError};
pub use record::{Accumulator, BudgetRecord};
