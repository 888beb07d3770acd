//! Budget service
//!
//! Business logic for updating the budget record. Each update is a single
//! load, mutate, recompute, save cycle against the store.

use tracing::{info, warn};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Accumulator, BudgetRecord, Money};
use crate::storage::BudgetStore;

/// Service for income and expense updates
pub struct BudgetService<'a> {
    store: &'a BudgetStore,
}

impl<'a> BudgetService<'a> {
    /// Create a new budget service
    pub fn new(store: &'a BudgetStore) -> Self {
        Self { store }
    }

    /// Add income and return the updated record
    pub fn add_income(&self, amount: Money) -> BudgetResult<BudgetRecord> {
        self.apply(Accumulator::Income, amount)
    }

    /// Add an expense and return the updated record
    pub fn add_expense(&self, amount: Money) -> BudgetResult<BudgetRecord> {
        self.apply(Accumulator::Expenses, amount)
    }

    /// Current record, read-only
    pub fn get_summary(&self) -> BudgetRecord {
        self.store.load().record
    }

    fn apply(&self, kind: Accumulator, amount: Money) -> BudgetResult<BudgetRecord> {
        if !amount.is_positive() {
            warn!(%kind, %amount, "rejected non-positive amount");
            return Err(BudgetError::InvalidAmount { kind, amount });
        }

        let loaded = self.store.load();
        // Don't overwrite a file we failed to read
        if let Some(err) = loaded.issue {
            if err.is_storage_unavailable() {
                return Err(err);
            }
        }

        let mut record = loaded.record;
        record.credit(kind, amount)?;
        self.store.save(&record)?;

        info!(%kind, %amount, balance = %record.balance(), "budget updated");
        Ok(record)
    }
}
