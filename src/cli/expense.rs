//! Expense CLI commands
//!
//! Implements CLI commands for the daily expense ledger.

use clap::Subcommand;

use crate::config::settings::Preferences;
use crate::display::{format_category_summary, format_expense_table, format_ledger, format_money};
use crate::error::TripResult;
use crate::models::ExpenseForm;
use crate::services::LedgerService;
use crate::state::{AppState, Message, Update};

/// Expense subcommands
#[derive(Subcommand, Debug)]
pub enum ExpenseCommands {
    /// Record a new expense
    Add {
        /// Trip day (1-based)
        #[arg(short, long, default_value = "1")]
        day: u32,
        /// What the money was spent on
        #[arg(short = 'm', long)]
        description: String,
        /// Amount (e.g., "1200" or "4.50")
        #[arg(short, long)]
        amount: String,
        /// Category (defaults to the first configured category)
        #[arg(short, long)]
        category: Option<String>,
    },
    /// Show the ledger for one day
    List {
        /// Trip day (1-based)
        #[arg(short, long, default_value = "1")]
        day: u32,
        /// Show every expense of the trip instead
        #[arg(short, long)]
        all: bool,
    },
    /// Totals per category
    Summary {
        /// Restrict to one day
        #[arg(short, long)]
        day: Option<u32>,
    },
}

/// Handle an expense command
pub fn handle_expense_command(
    state: &mut AppState,
    preferences: &Preferences,
    cmd: ExpenseCommands,
) -> TripResult<()> {
    match cmd {
        ExpenseCommands::Add {
            day,
            description,
            amount,
            category,
        } => {
            let category = category.unwrap_or_else(|| preferences.default_category().to_string());
            let form = ExpenseForm::new(day.to_string(), description, amount, category);

            if let Update::ExpenseAdded(expense) = state.dispatch(Message::SubmitExpense(form))? {
                println!(
                    "Added expense {} to Day {}: {}",
                    expense.id,
                    expense.day,
                    format_money(expense.amount, state.currency_suffix())
                );
                println!();
            }
            print!("{}", format_ledger(state.ledger_view()));
        }

        ExpenseCommands::List { day, all } => {
            if all {
                let expenses = LedgerService::new(state.storage()).load()?;
                print!(
                    "{}",
                    format_expense_table(&expenses, state.settings(), state.currency_suffix())
                );
            } else {
                state.dispatch(Message::SelectExpenseDay(day))?;
                print!("{}", format_ledger(state.ledger_view()));
            }
        }

        ExpenseCommands::Summary { day } => {
            let ledger = LedgerService::new(state.storage());
            let totals = ledger.category_totals(day)?;
            print!(
                "{}",
                format_category_summary(&totals, state.currency_suffix())
            );

            if day.is_none() {
                let days: Vec<String> = ledger
                    .days_with_expenses()?
                    .iter()
                    .map(|d| d.to_string())
                    .collect();
                if !days.is_empty() {
                    println!("Days with expenses: {}", days.join(", "));
                }
            }
        }
    }

    Ok(())
}
