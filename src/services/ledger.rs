//! Expense ledger service
//!
//! Appends expenses to the stored list and renders the per-day view. Every
//! render reloads the full list from the store.

use chrono::Utc;
use tracing::info;

use crate::display::amount::{format_amount, format_expense_line};
use crate::error::TripResult;
use crate::models::{Expense, ExpenseDraft, ExpenseId};
use crate::storage::Storage;

/// One displayed ledger line
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerLine {
    pub id: ExpenseId,
    pub category: String,
    pub description: String,
    pub amount: f64,
    /// `[category] description: amount`
    pub text: String,
}

/// Ledger page for a single day
#[derive(Debug, Clone, PartialEq)]
pub struct LedgerView {
    pub day: u32,
    pub lines: Vec<LedgerLine>,
    pub total: f64,
    /// Grouped total without the currency suffix, e.g. `1,500`
    pub total_display: String,
}

impl Default for LedgerView {
    fn default() -> Self {
        Self {
            day: 1,
            lines: Vec::new(),
            total: 0.0,
            total_display: format_amount(0.0),
        }
    }
}

impl LedgerView {
    /// Filter `expenses` to `day` and total them in encounter order
    pub fn build(day: u32, expenses: &[Expense], suffix: &str) -> Self {
        let mut total = 0.0;
        let lines: Vec<LedgerLine> = expenses
            .iter()
            .filter(|expense| expense.day == day)
            .map(|expense| {
                total += expense.amount;
                LedgerLine {
                    id: expense.id,
                    category: expense.category.clone(),
                    description: expense.description.clone(),
                    amount: expense.amount,
                    text: format_expense_line(expense, suffix),
                }
            })
            .collect();

        Self {
            day,
            lines,
            total,
            total_display: format_amount(total),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Spending per category
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryTotal {
    pub category: String,
    pub count: usize,
    pub total: f64,
}

/// Pick an id from the clock, moved past the newest existing id if needed
pub fn next_id(expenses: &[Expense], now_millis: i64) -> ExpenseId {
    let newest = expenses.iter().map(|e| e.id.as_millis()).max();
    match newest {
        Some(newest) if newest >= now_millis => ExpenseId::from_millis(newest + 1),
        _ => ExpenseId::from_millis(now_millis),
    }
}

/// Service for the expense ledger
pub struct LedgerService<'a> {
    storage: &'a Storage,
}

impl<'a> LedgerService<'a> {
    /// Create a new ledger service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Load the full expense list
    pub fn load(&self) -> TripResult<Vec<Expense>> {
        self.storage.load_expenses()
    }

    /// Append an expense stamped with the current time
    pub fn append(&self, draft: ExpenseDraft) -> TripResult<Expense> {
        self.append_at(draft, Utc::now().timestamp_millis())
    }

    /// Append an expense stamped with `now_millis`, persisting the full list
    pub fn append_at(&self, draft: ExpenseDraft, now_millis: i64) -> TripResult<Expense> {
        let mut expenses = self.load()?;
        let expense = Expense::from_draft(next_id(&expenses, now_millis), draft);

        expenses.push(expense.clone());
        self.storage.save_expenses(&expenses)?;

        info!(
            id = %expense.id,
            day = expense.day,
            amount = expense.amount,
            "expense saved"
        );
        Ok(expense)
    }

    /// Reload the list and build the view for `day`
    pub fn render(&self, day: u32, suffix: &str) -> TripResult<LedgerView> {
        let expenses = self.load()?;
        Ok(LedgerView::build(day, &expenses, suffix))
    }

    /// Distinct days that have at least one expense, ascending
    pub fn days_with_expenses(&self) -> TripResult<Vec<u32>> {
        let mut days: Vec<u32> = self.load()?.iter().map(|e| e.day).collect();
        days.sort_unstable();
        days.dedup();
        Ok(days)
    }

    /// Totals per category, optionally for a single day, in first-seen order
    pub fn category_totals(&self, day: Option<u32>) -> TripResult<Vec<CategoryTotal>> {
        let mut totals: Vec<CategoryTotal> = Vec::new();

        for expense in self.load()? {
            if day.is_some_and(|d| d != expense.day) {
                continue;
            }
            match totals.iter_mut().find(|t| t.category == expense.category) {
                Some(entry) => {
                    entry.count += 1;
                    entry.total += expense.amount;
                }
                None => totals.push(CategoryTotal {
                    category: expense.category.clone(),
                    count: 1,
                    total: expense.amount,
                }),
            }
        }

        Ok(totals)
    }

    /// Sum of every expense in the trip
    pub fn trip_total(&self) -> TripResult<f64> {
        Ok(self.load()?.iter().map(|e| e.amount).sum())
    }
}
