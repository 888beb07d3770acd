//! Summary formatting for terminal output

use tabled::{settings::Style, Table, Tabled};

use crate::models::BudgetRecord;

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Field")]
    field: &'static str,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// The three totals as `Label: $0.00` lines
pub fn format_summary_lines(record: &BudgetRecord, symbol: &str) -> String {
    format!(
        "Income: {}\nExpenses: {}\nBalance: {}",
        record.income().format_with_symbol(symbol),
        record.expenses().format_with_symbol(symbol),
        record.balance().format_with_symbol(symbol),
    )
}

/// The three totals as a table
pub fn format_summary_table(record: &BudgetRecord, symbol: &str) -> String {
    let rows = [
        ("Income", record.income()),
        ("Expenses", record.expenses()),
        ("Balance", record.balance()),
    ]
    .into_iter()
    .map(|(field, amount)| SummaryRow {
        field,
        amount: amount.format_with_symbol(symbol),
    });

    Table::new(rows).with(Style::rounded()).to_string()
}
