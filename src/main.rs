use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use budget_tracker::cli::{
    handle_add_command, handle_config_command, handle_summary_command, run_menu,
};
use budget_tracker::config::{BudgetPaths, Settings};
use budget_tracker::models::Accumulator;
use budget_tracker::storage::BudgetStore;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Personal budget tracker",
    long_about = "Keeps running totals of income and expenses in a local JSON file \
                  and shows the resulting balance."
)]
struct Cli {
    /// Budget file to use instead of the default location
    #[arg(short, long, global = true, env = "BUDGET_TRACKER_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add income (e.g., "1500" or "1500.00")
    Income {
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Add an expense
    #[command(alias = "expenses")]
    Expense {
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Show income, expenses and balance
    Summary {
        /// Print the raw record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run the interactive menu (the default)
    Menu,

    /// Show current configuration and paths, writing default settings on first use
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut paths = BudgetPaths::new()?;
    if let Some(file) = cli.file {
        paths = paths.with_budget_file(file);
    }
    let settings = Settings::load_or_create(&paths)?;

    init_tracing(&settings);

    let store = BudgetStore::new(paths.budget_file());

    match cli.command {
        Some(Commands::Income { amount }) => {
            handle_add_command(&store, &settings, Accumulator::Income, &amount)?;
        }
        Some(Commands::Expense { amount }) => {
            handle_add_command(&store, &settings, Accumulator::Expenses, &amount)?;
        }
        Some(Commands::Summary { json }) => {
            handle_summary_command(&store, &settings, json)?;
        }
        Some(Commands::Menu) | None => {
            run_menu(&store, &settings, io::stdin().lock(), io::stdout())?;
        }
        Some(Commands::Config) => {
            handle_config_command(&paths, &settings)?;
        }
    }

    Ok(())
}

fn init_tracing(settings: &Settings) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("budget_tracker={}", settings.log_level)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}
