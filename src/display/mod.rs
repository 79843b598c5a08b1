//! Display formatting for terminal output
//!
//! Provides utilities for formatting amounts, dates, the itinerary and the
//! ledger for terminal display.

pub mod amount;
pub mod expense;
pub mod itinerary;

pub use amount::{format_amount, format_day_heading, format_expense_line, format_money};
pub use expense::{format_category_summary, format_expense_table, format_ledger};
pub use itinerary::format_itinerary;
