//! Expense display formatting
//!
//! Ledger views for a single day, the full expense table and per-category
//! summaries for the CLI.

use tabled::{settings::Style, Table, Tabled};

use crate::models::{Expense, TripSettings};
use crate::services::{CategoryTotal, LedgerView};

use super::amount::{format_day_heading, format_money};

/// Format a day's ledger with its running total
pub fn format_ledger(view: &LedgerView) -> String {
    let mut output = String::new();

    let heading = format!("Expenses for Day {}", view.day);
    output.push_str(&heading);
    output.push('\n');
    output.push_str(&"-".repeat(heading.len()));
    output.push('\n');

    if view.is_empty() {
        output.push_str("No expenses recorded.\n");
    } else {
        for line in &view.lines {
            output.push_str(&line.text);
            output.push('\n');
        }
    }

    output.push_str(&"-".repeat(heading.len()));
    output.push('\n');
    output.push_str(&format!("Total: {}\n", view.total_display));

    output
}

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "Day")]
    day: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

/// Format every expense as a table, days labelled with dates when known
pub fn format_expense_table(
    expenses: &[Expense],
    settings: Option<&TripSettings>,
    suffix: &str,
) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let rows = expenses.iter().map(|expense| ExpenseRow {
        day: format_day_heading(
            expense.day,
            settings.and_then(|s| s.date_of_day(expense.day)),
        ),
        category: expense.category.clone(),
        description: expense.description.clone(),
        amount: format_money(expense.amount, suffix),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\n", table)
}

#[derive(Tabled)]
struct CategoryRow {
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Items")]
    count: usize,
    #[tabled(rename = "Total")]
    total: String,
}

/// Format per-category totals followed by the grand total
pub fn format_category_summary(totals: &[CategoryTotal], suffix: &str) -> String {
    if totals.is_empty() {
        return "No expenses recorded.\n".to_string();
    }

    let grand_total: f64 = totals.iter().map(|t| t.total).sum();
    let rows = totals.iter().map(|t| CategoryRow {
        category: t.category.clone(),
        count: t.count,
        total: format_money(t.total, suffix),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    format!("{}\nTotal: {}\n", table, format_money(grand_total, suffix))
}
