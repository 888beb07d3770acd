//! Service layer for the budget tracker
//!
//! The service layer provides business logic on top of the storage layer:
//! amount validation and the derived balance.

pub mod budget;

pub use budget::BudgetService;
