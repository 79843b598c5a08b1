//! CSV export
//!
//! Exports the expense list in a spreadsheet-friendly layout, one row per
//! expense in append order.

use std::io::Write;

use crate::error::{TripError, TripResult};
use crate::storage::Storage;

/// Export all expenses to CSV
///
/// The `Date` column is filled when the trip has a start date.
pub fn export_expenses_csv<W: Write>(storage: &Storage, writer: &mut W) -> TripResult<()> {
    let settings = storage.load_settings()?;
    let expenses = storage.load_expenses()?;

    let mut csv_writer = ::csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["ID", "Day", "Date", "Category", "Description", "Amount"])
        .map_err(|e| TripError::Export(e.to_string()))?;

    for expense in &expenses {
        let date = settings
            .as_ref()
            .and_then(|s| s.date_of_day(expense.day))
            .map(|d| d.to_string())
            .unwrap_or_default();

        csv_writer
            .write_record([
                expense.id.to_string(),
                expense.day.to_string(),
                date,
                expense.category.clone(),
                expense.description.clone(),
                expense.amount.to_string(),
            ])
            .map_err(|e| TripError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| TripError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseDraft, TripSettings};
    use crate::services::LedgerService;
    use chrono::NaiveDate;

    #[test]
    fn test_export_expenses_csv() {
        let storage = Storage::in_memory();
        storage
            .save_settings(&TripSettings::new(
                "Tokyo",
                NaiveDate::from_ymd_opt(2024, 4, 1),
                3,
            ))
            .unwrap();
        let ledger = LedgerService::new(&storage);
        ledger
            .append_at(ExpenseDraft::new(2, "Ramen, extra egg", 1200.0, "Food"), 7)
            .unwrap();
        ledger
            .append_at(ExpenseDraft::new(5, "Souvenir", 9.5, "Shopping"), 8)
            .unwrap();

        let mut buffer = Vec::new();
        export_expenses_csv(&storage, &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "ID,Day,Date,Category,Description,Amount");
        assert_eq!(lines[1], "7,2,2024-04-02,Food,\"Ramen, extra egg\",1200");
        assert_eq!(lines[2], "8,5,2024-04-05,Shopping,Souvenir,9.5");
    }

    #[test]
    fn test_export_without_start_date() {
        let storage = Storage::in_memory();
        LedgerService::new(&storage)
            .append_at(ExpenseDraft::new(1, "Coffee", 450.0, "Food"), 3)
            .unwrap();

        let mut buffer = Vec::new();
        export_expenses_csv(&storage, &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert!(output.contains("3,1,,Food,Coffee,450"));
    }
}
