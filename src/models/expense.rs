//! Expense model
//!
//! A single logged cost tied to a trip day and a category. The ledger is
//! append-only: records are never edited or removed.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::error::{TripError, TripResult};

/// Identifier of an expense: its creation time in milliseconds since the epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(i64);

impl ExpenseId {
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    pub const fn as_millis(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A logged expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Expense {
    /// Creation timestamp, doubling as identifier
    pub id: ExpenseId,

    /// Trip day (1-based)
    pub day: u32,

    /// What the money was spent on
    pub description: String,

    /// Amount spent. A stored `null` reads as NaN.
    #[serde(deserialize_with = "lenient_amount")]
    pub amount: f64,

    /// Free-form category label
    pub category: String,
}

impl Expense {
    /// Stamp a draft with an identifier
    pub fn from_draft(id: ExpenseId, draft: ExpenseDraft) -> Self {
        Self {
            id,
            day: draft.day,
            description: draft.description,
            amount: draft.amount,
            category: draft.category,
        }
    }

    /// Check stored values are usable
    pub fn validate(&self) -> Result<(), String> {
        if self.day == 0 {
            return Err(format!("Expense {} has day 0; days start at 1", self.id));
        }
        if !self.amount.is_finite() || self.amount < 0.0 {
            return Err(format!(
                "Expense {} has invalid amount {}",
                self.id, self.amount
            ));
        }
        Ok(())
    }
}

/// Older clients wrote unparsable amounts as `null`; keep the record and read it as NaN
fn lenient_amount<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::NAN))
}

/// A validated expense that has not been given an id yet
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDraft {
    pub day: u32,
    pub description: String,
    pub amount: f64,
    pub category: String,
}

impl ExpenseDraft {
    pub fn new(
        day: u32,
        description: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            day,
            description: description.into(),
            amount,
            category: category.into(),
        }
    }
}

/// Raw values submitted by the expense form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseForm {
    pub day: String,
    pub description: String,
    pub amount: String,
    pub category: String,
}

impl ExpenseForm {
    pub fn new(
        day: impl Into<String>,
        description: impl Into<String>,
        amount: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            day: day.into(),
            description: description.into(),
            amount: amount.into(),
            category: category.into(),
        }
    }

    /// Parse the form into a draft
    ///
    /// Amounts may use `,` as a thousands separator.
    pub fn parse(&self) -> TripResult<ExpenseDraft> {
        let day = parse_day(&self.day)?;

        let description = self.description.trim();
        if description.is_empty() {
            return Err(TripError::Validation("Description cannot be empty".into()));
        }

        let category = self.category.trim();
        if category.is_empty() {
            return Err(TripError::Validation("Category cannot be empty".into()));
        }

        let amount = parse_amount(&self.amount)?;

        Ok(ExpenseDraft::new(day, description, amount, category))
    }
}

/// Parse a 1-based day number
pub fn parse_day(input: &str) -> TripResult<u32> {
    let input = input.trim();
    match input.parse::<u32>() {
        Ok(day) if day >= 1 => Ok(day),
        _ => Err(TripError::Validation(format!(
            "Day must be a whole number starting at 1, got '{}'",
            input
        ))),
    }
}

/// Parse a non-negative decimal amount
pub fn parse_amount(input: &str) -> TripResult<f64> {
    let cleaned: String = input.trim().chars().filter(|c| *c != ',').collect();
    let amount: f64 = cleaned.parse().map_err(|_| {
        TripError::Validation(format!("Amount must be a number, got '{}'", input.trim()))
    })?;

    if !amount.is_finite() {
        return Err(TripError::Validation(format!(
            "Amount must be a finite number, got '{}'",
            input.trim()
        )));
    }
    if amount < 0.0 {
        return Err(TripError::Validation(format!(
            "Amount cannot be negative, got {}",
            amount
        )));
    }

    Ok(amount)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialized_layout() {
        let expense = Expense::from_draft(
            ExpenseId::from_millis(1_711_929_600_000),
            ExpenseDraft::new(1, "Ramen", 1200.0, "Food"),
        );
        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1_711_929_600_000_i64,
                "day": 1,
                "description": "Ramen",
                "amount": 1200.0,
                "category": "Food"
            })
        );
    }

    #[test]
    fn test_reads_integer_amounts() {
        let expense: Expense = serde_json::from_str(
            r#"{"id":1,"day":2,"description":"Train","amount":300,"category":"Transport"}"#,
        )
        .unwrap();
        assert_eq!(expense.amount, 300.0);
        assert_eq!(expense.day, 2);
    }

    #[test]
    fn test_null_amount_reads_as_nan() {
        let expense: Expense = serde_json::from_str(
            r#"{"id":2,"day":2,"description":"Mystery","amount":null,"category":"Other"}"#,
        )
        .unwrap();
        assert!(expense.amount.is_nan());
        assert!(expense.validate().is_err());

        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(json["amount"], serde_json::Value::Null);
    }

    #[test]
    fn test_form_parse() {
        let draft = ExpenseForm::new("1", " Ramen ", "1,200", "Food").parse().unwrap();
        assert_eq!(draft, ExpenseDraft::new(1, "Ramen", 1200.0, "Food"));
    }

    #[test]
    fn test_form_parse_decimal_amount() {
        let draft = ExpenseForm::new("3", "Coffee", "4.5", "Food").parse().unwrap();
        assert_eq!(draft.amount, 4.5);
    }

    #[test]
    fn test_form_rejects_bad_day() {
        assert!(ExpenseForm::new("0", "Ramen", "1", "Food").parse().is_err());
        assert!(ExpenseForm::new("one", "Ramen", "1", "Food").parse().is_err());
    }

    #[test]
    fn test_form_rejects_bad_amount() {
        let err = ExpenseForm::new("1", "Ramen", "cheap", "Food")
            .parse()
            .unwrap_err();
        assert!(err.is_validation());
        assert!(ExpenseForm::new("1", "Ramen", "-5", "Food").parse().is_err());
        assert!(ExpenseForm::new("1", "Ramen", "NaN", "Food").parse().is_err());
        assert!(ExpenseForm::new("1", "Ramen", "inf", "Food").parse().is_err());
    }

    #[test]
    fn test_form_rejects_blank_text() {
        assert!(ExpenseForm::new("1", "  ", "1", "Food").parse().is_err());
        assert!(ExpenseForm::new("1", "Ramen", "1", "").parse().is_err());
    }

    #[test]
    fn test_validate() {
        let mut expense =
            Expense::from_draft(ExpenseId::from_millis(1), ExpenseDraft::new(1, "x", 1.0, "y"));
        assert!(expense.validate().is_ok());

        expense.day = 0;
        assert!(expense.validate().is_err());

        expense.day = 1;
        expense.amount = -1.0;
        assert!(expense.validate().is_err());
    }
}
