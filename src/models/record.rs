//! The persisted budget record
//!
//! A record is the `{income, expenses, balance}` triple kept in the budget
//! file. `balance` is derived and only ever recomputed from the two
//! accumulators.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::money::Money;
use crate::error::{BudgetError, BudgetResult};

/// Which accumulator an update applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Accumulator {
    Income,
    Expenses,
}

impl fmt::Display for Accumulator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "Income"),
            Self::Expenses => write!(f, "Expense"),
        }
    }
}

/// The income, expenses and balance totals
///
/// Fields missing from the stored JSON default to zero and unknown fields are
/// ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetRecord {
    income: Money,
    expenses: Money,
    balance: Money,
}

impl BudgetRecord {
    /// Create a record from the two accumulators, deriving the balance
    ///
    /// The balance saturates instead of overflowing; a record built from
    /// out-of-range amounts fails [`BudgetRecord::is_in_range`] and is refused
    /// by the store.
    pub fn new(income: Money, expenses: Money) -> Self {
        Self {
            income,
            expenses,
            balance: Money::from_cents(income.cents().saturating_sub(expenses.cents())),
        }
    }

    /// A record with every field at zero
    pub fn zero() -> Self {
        Self::default()
    }

    pub fn income(&self) -> Money {
        self.income
    }

    pub fn expenses(&self) -> Money {
        self.expenses
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    /// Whether the stored balance equals `income - expenses`
    pub fn is_consistent(&self) -> bool {
        self.income.checked_sub(self.expenses) == Some(self.balance)
    }

    /// Whether every field fits the range the budget file can hold exactly
    pub fn is_in_range(&self) -> bool {
        self.income.is_in_range() && self.expenses.is_in_range() && self.balance.is_in_range()
    }

    /// Add `amount` to one accumulator and recompute the balance
    ///
    /// The record is left untouched if any total would leave the range
    /// `Money::MIN..=Money::MAX`.
    pub(crate) fn credit(&mut self, kind: Accumulator, amount: Money) -> BudgetResult<()> {
        let overflow = || {
            BudgetError::Validation(format!(
                "{} total would exceed the maximum of {}",
                kind,
                Money::MAX
            ))
        };

        let (income, expenses) = match kind {
            Accumulator::Income => (
                self.income.checked_add(amount).ok_or_else(overflow)?,
                self.expenses,
            ),
            Accumulator::Expenses => (
                self.income,
                self.expenses.checked_add(amount).ok_or_else(overflow)?,
            ),
        };
        let balance = income.checked_sub(expenses).ok_or_else(overflow)?;

        self.income = income;
        self.expenses = expenses;
        self.balance = balance;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_derives_balance() {
        let record = BudgetRecord::new(Money::from_dollars(100), Money::from_dollars(30));
        assert_eq!(record.balance(), Money::from_dollars(70));
        assert!(record.is_consistent());
    }

    #[test]
    fn test_credit_income_and_expenses() {
        let mut record = BudgetRecord::zero();

        record
            .credit(Accumulator::Income, Money::from_dollars(100))
            .unwrap();
        assert_eq!(record, BudgetRecord::new(Money::from_dollars(100), Money::zero()));

        record
            .credit(Accumulator::Expenses, Money::from_cents(12050))
            .unwrap();
        assert_eq!(record.balance(), Money::from_cents(-2050));
        assert!(record.is_consistent());
    }

    #[test]
    fn test_credit_overflow_leaves_record_unchanged() {
        let mut record = BudgetRecord::new(Money::MAX, Money::zero());
        let before = record;

        let err = record
            .credit(Accumulator::Income, Money::from_cents(1))
            .unwrap_err();
        assert!(matches!(err, BudgetError::Validation(_)));
        assert_eq!(record, before);
    }

    #[test]
    fn test_credit_up_to_the_limit() {
        let start = Money::MAX.checked_sub(Money::from_cents(5)).unwrap();
        let mut record = BudgetRecord::new(start, Money::zero());

        record
            .credit(Accumulator::Income, Money::from_cents(5))
            .unwrap();
        assert_eq!(record.income(), Money::MAX);
        assert!(record.is_in_range());
    }

    #[test]
    fn test_credit_rejects_amount_beyond_range() {
        let mut record = BudgetRecord::zero();

        let err = record
            .credit(Accumulator::Expenses, Money::from_cents(i64::MAX - 10))
            .unwrap_err();
        assert!(matches!(err, BudgetError::Validation(_)));
        assert_eq!(record, BudgetRecord::zero());
    }

    #[test]
    fn test_balance_past_range_is_flagged() {
        let record = BudgetRecord::new(Money::MAX, Money::MIN);
        assert!(!record.is_in_range());
        assert!(!record.is_consistent());

        let saturated =
            BudgetRecord::new(Money::from_cents(i64::MIN), Money::from_cents(i64::MAX));
        assert_eq!(saturated.balance().cents(), i64::MIN);
    }

    #[test]
    fn test_missing_fields_default_to_zero() {
        let record: BudgetRecord = serde_json::from_str(r#"{"income": 50}"#).unwrap();
        assert_eq!(record.income(), Money::from_dollars(50));
        assert_eq!(record.expenses(), Money::zero());
        assert_eq!(record.balance(), Money::zero());
    }

    #[test]
    fn test_unknown_fields_ignored() {
        let json = r#"{"income": 10.5, "expenses": 0.5, "balance": 10, "note": "hi"}"#;
        let record: BudgetRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record, BudgetRecord::new(Money::from_cents(1050), Money::from_cents(50)));
    }

    #[test]
    fn test_serialized_shape() {
        let record = BudgetRecord::new(Money::from_dollars(100), Money::from_dollars(30));
        let value = serde_json::to_value(record).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"income": 100.0, "expenses": 30.0, "balance": 70.0})
        );
    }

    #[test]
    fn test_accumulator_display() {
        assert_eq!(Accumulator::Income.to_string(), "Income");
        assert_eq!(Accumulator::Expenses.to_string(), "Expense");
    }
}
