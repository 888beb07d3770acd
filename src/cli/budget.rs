//! One-shot budget commands
//!
//! Bridges parsed command-line arguments to the budget service.

use crate::config::settings::Settings;
use crate::display::{format_summary_lines, format_summary_table};
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Accumulator, Money};
use crate::services::BudgetService;
use crate::storage::BudgetStore;

/// Parse a user-supplied amount
pub fn parse_amount(input: &str) -> BudgetResult<Money> {
    Money::parse(input).map_err(|e| BudgetError::Validation(format!("Invalid amount: {}", e)))
}

/// Handle `income` and `expense`
pub fn handle_add_command(
    store: &BudgetStore,
    settings: &Settings,
    kind: Accumulator,
    amount: &str,
) -> BudgetResult<()> {
    let amount = parse_amount(amount)?;
    let service = BudgetService::new(store);

    let record = match kind {
        Accumulator::Income => service.add_income(amount)?,
        Accumulator::Expenses => service.add_expense(amount)?,
    };

    println!(
        "Added {} of {}.",
        kind.to_string().to_lowercase(),
        amount.format_with_symbol(&settings.currency_symbol)
    );
    println!("{}", format_summary_lines(&record, &settings.currency_symbol));
    Ok(())
}

/// Handle `summary`
pub fn handle_summary_command(
    store: &BudgetStore,
    settings: &Settings,
    json: bool,
) -> BudgetResult<()> {
    let record = BudgetService::new(store).get_summary();

    if json {
        println!("{}", serde_json::to_string_pretty(&record)?);
    } else {
        println!("{}", format_summary_table(&record, &settings.currency_symbol));
    }
    Ok(())
}
