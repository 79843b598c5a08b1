//! Number and date formatting
//!
//! Amounts are shown the way an en-US locale would: thousands grouped with
//! commas and at most three fraction digits, trailing zeros dropped.

use chrono::{Datelike, NaiveDate};

use crate::models::Expense;

/// Format an amount with grouped thousands, e.g. `1500.0` -> `1,500`
pub fn format_amount(amount: f64) -> String {
    if amount.is_nan() {
        return "NaN".to_string();
    }
    if amount.is_infinite() {
        return if amount > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let scaled = (amount.abs() * 1000.0).round() as u64;
    let whole = scaled / 1000;
    let fraction = scaled % 1000;

    let mut output = group_thousands(whole);
    if fraction > 0 {
        let digits = format!("{:03}", fraction);
        output.push('.');
        output.push_str(digits.trim_end_matches('0'));
    }

    if amount < 0.0 && scaled > 0 {
        format!("-{}", output)
    } else {
        output
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut output = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            output.push(',');
        }
        output.push(c);
    }
    output
}

/// Format an amount followed by the currency suffix, if any
pub fn format_money(amount: f64, suffix: &str) -> String {
    if suffix.is_empty() {
        format_amount(amount)
    } else {
        format!("{} {}", format_amount(amount), suffix)
    }
}

/// One ledger line: `[category] description: amount`
pub fn format_expense_line(expense: &Expense, suffix: &str) -> String {
    format!(
        "[{}] {}: {}",
        expense.category,
        expense.description,
        format_money(expense.amount, suffix)
    )
}

/// Short month/day form used next to day headings, e.g. `4/1`
pub fn format_short_date(date: NaiveDate) -> String {
    format!("{}/{}", date.month(), date.day())
}

/// Heading for a day card: `Day 2` or `Day 2 (4/2)`
pub fn format_day_heading(day: u32, date: Option<NaiveDate>) -> String {
    match date {
        Some(date) => format!("Day {} ({})", day, format_short_date(date)),
        None => format!("Day {}", day),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseDraft, ExpenseId};

    #[test]
    fn test_grouping() {
        assert_eq!(format_amount(0.0), "0");
        assert_eq!(format_amount(300.0), "300");
        assert_eq!(format_amount(1500.0), "1,500");
        assert_eq!(format_amount(1_234_567.0), "1,234,567");
    }

    #[test]
    fn test_fraction_digits() {
        assert_eq!(format_amount(1234.5), "1,234.5");
        assert_eq!(format_amount(0.1 + 0.2), "0.3");
        assert_eq!(format_amount(2.0006), "2.001");
        assert_eq!(format_amount(999.9999), "1,000");
    }

    #[test]
    fn test_negative_and_special_values() {
        assert_eq!(format_amount(-1500.25), "-1,500.25");
        assert_eq!(format_amount(-0.0001), "0");
        assert_eq!(format_amount(f64::NAN), "NaN");
        assert_eq!(format_amount(f64::INFINITY), "∞");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(1200.0, "円"), "1,200 円");
        assert_eq!(format_money(1200.0, ""), "1,200");
    }

    #[test]
    fn test_expense_line() {
        let expense = Expense::from_draft(
            ExpenseId::from_millis(1),
            ExpenseDraft::new(1, "Ramen", 1200.0, "Food"),
        );
        assert_eq!(format_expense_line(&expense, ""), "[Food] Ramen: 1,200");
        assert_eq!(format_expense_line(&expense, "円"), "[Food] Ramen: 1,200 円");
    }

    #[test]
    fn test_day_heading() {
        let date = NaiveDate::from_ymd_opt(2024, 4, 1);
        assert_eq!(format_day_heading(1, date), "Day 1 (4/1)");
        assert_eq!(format_day_heading(3, None), "Day 3");
    }
}
