//! budget-tracker - a personal budget kept in a local JSON file
//!
//! Tracks three totals (income, expenses and the derived balance) and lets a
//! user add income, add expenses or view a summary.
//!
//! # Architecture
//!
//! - `config`: path resolution and user settings
//! - `error`: the [`BudgetError`] enum
//! - `models`: `Money` and `BudgetRecord`
//! - `storage`: JSON file storage with atomic writes
//! - `services`: add income / add expense / summary
//! - `display`: two-decimal currency rendering
//! - `cli`: command handlers and the interactive menu
//!
//! # Example
//!
//! ```rust,no_run
//! use budget_tracker::models::Money;
//! use budget_tracker::services::BudgetService;
//! use budget_tracker::storage::BudgetStore;
//!
//! let store = BudgetStore::new("budget.json");
//! let service = BudgetService::new(&store);
//! let record = service.add_income(Money::from_dollars(100))?;
//! assert_eq!(record.balance(), Money::from_dollars(100));
//! # Ok::<(), budget_tracker::BudgetError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{BudgetError, BudgetResult};
