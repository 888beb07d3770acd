//! Interactive numbered menu
//!
//! Reads choices and amounts line by line until the user exits or input ends.
//! Errors from the service are printed and the loop carries on.

use std::io::{BufRead, Write};

use crate::config::settings::Settings;
use crate::display::format_summary_lines;
use crate::error::{BudgetError, BudgetResult};
use crate::models::{Accumulator, Money};
use crate::services::BudgetService;
use crate::storage::BudgetStore;

const MENU: &str = "\nPersonal Budget Tracker\n\
                    1. Add Income\n\
                    2. Add Expenses\n\
                    3. Show Summary\n\
                    4. Exit";

/// Run the menu against the given input and output
pub fn run_menu<R, W>(
    store: &BudgetStore,
    settings: &Settings,
    mut input: R,
    mut output: W,
) -> BudgetResult<()>
where
    R: BufRead,
    W: Write,
{
    let service = BudgetService::new(store);

    loop {
        writeln!(output, "{}", MENU)?;
        let Some(choice) = prompt(&mut input, &mut output, "Choose an option: ")? else {
            break;
        };

        match choice.as_str() {
            "1" => add(&service, settings, Accumulator::Income, &mut input, &mut output)?,
            "2" => add(&service, settings, Accumulator::Expenses, &mut input, &mut output)?,
            "3" => {
                let record = service.get_summary();
                writeln!(
                    output,
                    "{}",
                    format_summary_lines(&record, &settings.currency_symbol)
                )?;
            }
            "4" => {
                writeln!(output, "Exiting...")?;
                break;
            }
            _ => writeln!(output, "Invalid choice. Please select a valid option.")?,
        }
    }

    Ok(())
}

fn add<R, W>(
    service: &BudgetService<'_>,
    settings: &Settings,
    kind: Accumulator,
    input: &mut R,
    output: &mut W,
) -> BudgetResult<()>
where
    R: BufRead,
    W: Write,
{
    let label = match kind {
        Accumulator::Income => "income",
        Accumulator::Expenses => "expenses",
    };
    let question = format!("Enter {} amount: {}", label, settings.currency_symbol);

    let Some(line) = prompt(input, output, &question)? else {
        return Ok(());
    };
    let Ok(amount) = Money::parse(&line) else {
        writeln!(output, "Invalid input. Please enter a numerical value.")?;
        return Ok(());
    };

    let result = match kind {
        Accumulator::Income => service.add_income(amount),
        Accumulator::Expenses => service.add_expense(amount),
    };

    // Successful updates are silent; option 3 shows the totals
    match result {
        Ok(_) => {}
        Err(err @ BudgetError::InvalidAmount { .. }) => writeln!(output, "{}.", err)?,
        Err(err) => writeln!(output, "Error: {}", err)?,
    }
    Ok(())
}

/// Print a prompt and read one trimmed line; `None` at end of input
fn prompt<R, W>(input: &mut R, output: &mut W, question: &str) -> BudgetResult<Option<String>>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{}", question)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
