//! JSON export and import
//!
//! A full snapshot of the three stored channels with schema versioning.
//! Importing a snapshot overwrites every channel.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::io::Write;
use tracing::info;

use crate::error::{TripError, TripResult};
use crate::models::{Expense, ItineraryDetails, TripSettings};
use crate::storage::{Storage, SETTINGS_KEY};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full snapshot of stored trip data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TripExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Trip settings, if set up
    pub settings: Option<TripSettings>,

    /// Itinerary notes, including entries past the trip length
    #[serde(default)]
    pub itinerary: ItineraryDetails,

    /// Every expense in append order
    #[serde(default)]
    pub expenses: Vec<Expense>,

    /// Export metadata for reference
    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportMetadata {
    /// Trip length in days
    pub day_count: u32,

    /// Stored itinerary entries
    pub itinerary_entry_count: usize,

    /// Number of expenses
    pub expense_count: usize,

    /// Sum of all expense amounts
    pub expense_total: f64,
}

impl TripExport {
    /// Build a snapshot from storage
    pub fn from_storage(storage: &Storage) -> TripResult<Self> {
        let settings = storage.load_settings()?;
        let itinerary = storage.load_itinerary()?;
        let expenses = storage.load_expenses()?;

        let metadata = ExportMetadata {
            day_count: settings.as_ref().map(|s| s.duration).unwrap_or(0),
            itinerary_entry_count: itinerary.len(),
            expense_count: expenses.len(),
            expense_total: expenses.iter().map(|e| e.amount).sum(),
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            settings,
            itinerary,
            expenses,
            metadata,
        })
    }

    /// Check the snapshot can be restored
    pub fn validate(&self) -> Result<(), String> {
        let major = self.schema_version.split('.').next().unwrap_or("");
        let supported = EXPORT_SCHEMA_VERSION.split('.').next().unwrap_or("");
        if major != supported {
            return Err(format!(
                "Unsupported schema version {} (expected {}.x)",
                self.schema_version, supported
            ));
        }

        for expense in &self.expenses {
            expense.validate()?;
        }

        Ok(())
    }

    /// Overwrite all stored channels with this snapshot
    pub fn restore(&self, storage: &Storage) -> TripResult<()> {
        self.validate().map_err(TripError::Import)?;

        match &self.settings {
            Some(settings) => storage.save_settings(settings)?,
            None => storage.clear(SETTINGS_KEY)?,
        }
        storage.save_itinerary(&self.itinerary)?;
        storage.save_expenses(&self.expenses)?;

        info!(
            expenses = self.expenses.len(),
            itinerary_entries = self.itinerary.len(),
            "snapshot restored"
        );
        Ok(())
    }
}

/// Export all stored data as pretty-printed JSON
pub fn export_full_json<W: Write>(storage: &Storage, writer: &mut W) -> TripResult<()> {
    let export = TripExport::from_storage(storage)?;

    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| TripError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| TripError::Export(e.to_string()))?;

    Ok(())
}

/// Parse and validate a JSON snapshot
pub fn import_from_json(json_str: &str) -> TripResult<TripExport> {
    let export: TripExport =
        serde_json::from_str(json_str).map_err(|e| TripError::Import(e.to_string()))?;

    export.validate().map_err(TripError::Import)?;

    Ok(export)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseDraft, ExpenseId};
    use chrono::NaiveDate;

    fn populated_storage() -> Storage {
        let storage = Storage::in_memory();
        storage
            .save_settings(&TripSettings::new(
                "Tokyo",
                NaiveDate::from_ymd_opt(2024, 4, 1),
                3,
            ))
            .unwrap();
        let mut details = ItineraryDetails::new();
        details.set(1, "Asakusa");
        storage.save_itinerary(&details).unwrap();
        storage
            .save_expenses(&[Expense::from_draft(
                ExpenseId::from_millis(1),
                ExpenseDraft::new(1, "Ramen", 1200.0, "Food"),
            )])
            .unwrap();
        storage
    }

    #[test]
    fn test_snapshot_metadata() {
        let export = TripExport::from_storage(&populated_storage()).unwrap();
        assert_eq!(export.metadata.day_count, 3);
        assert_eq!(export.metadata.itinerary_entry_count, 1);
        assert_eq!(export.metadata.expense_count, 1);
        assert_eq!(export.metadata.expense_total, 1200.0);
    }

    #[test]
    fn test_export_then_restore_into_empty_storage() {
        let mut buffer = Vec::new();
        export_full_json(&populated_storage(), &mut buffer).unwrap();

        let export = import_from_json(&String::from_utf8(buffer).unwrap()).unwrap();
        let target = Storage::in_memory();
        export.restore(&target).unwrap();

        assert_eq!(target.load_settings().unwrap().unwrap().destination, "Tokyo");
        assert_eq!(target.load_itinerary().unwrap().get(1), Some("Asakusa"));
        assert_eq!(target.load_expenses().unwrap().len(), 1);
    }

    #[test]
    fn test_restore_without_settings_clears_them() {
        let target = populated_storage();
        let mut export = TripExport::from_storage(&Storage::in_memory()).unwrap();
        export.settings = None;

        export.restore(&target).unwrap();

        assert_eq!(target.load_settings().unwrap(), None);
        assert!(target.load_expenses().unwrap().is_empty());
    }

    #[test]
    fn test_rejects_unknown_schema() {
        let mut export = TripExport::from_storage(&Storage::in_memory()).unwrap();
        export.schema_version = "2.0.0".into();
        assert!(export.validate().is_err());
        assert!(matches!(
            export.restore(&Storage::in_memory()),
            Err(TripError::Import(_))
        ));
    }

    #[test]
    fn test_rejects_invalid_expense() {
        let mut export = TripExport::from_storage(&populated_storage()).unwrap();
        export.expenses[0].day = 0;
        assert!(export.validate().is_err());
    }

    #[test]
    fn test_import_garbage() {
        assert!(matches!(
            import_from_json("not json"),
            Err(TripError::Import(_))
        ));
    }
}
