//! Trip settings service
//!
//! Applies setup form submissions and persists/restores the settings record.

use tracing::info;

use crate::error::TripResult;
use crate::models::{SetupForm, TripSettings};
use crate::storage::Storage;

/// Service for the trip settings record
pub struct TripService<'a> {
    storage: &'a Storage,
}

impl<'a> TripService<'a> {
    /// Create a new trip service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Load the saved settings, if any
    pub fn restore(&self) -> TripResult<Option<TripSettings>> {
        self.storage.load_settings()
    }

    /// Overwrite the saved settings
    pub fn persist(&self, settings: &TripSettings) -> TripResult<()> {
        self.storage.save_settings(settings)?;
        info!(
            destination = %settings.destination,
            duration = settings.duration,
            "trip settings saved"
        );
        Ok(())
    }

    /// Parse a setup form submission and persist the result
    pub fn apply_form(&self, form: &SetupForm) -> TripResult<TripSettings> {
        let settings = form.parse()?;
        self.persist(&settings)?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_restore_without_settings() {
        let storage = Storage::in_memory();
        assert_eq!(TripService::new(&storage).restore().unwrap(), None);
    }

    #[test]
    fn test_apply_form_persists() {
        let storage = Storage::in_memory();
        let service = TripService::new(&storage);

        let settings = service
            .apply_form(&SetupForm::new("Tokyo", "2024-04-01", "3"))
            .unwrap();

        assert_eq!(settings.start_date, NaiveDate::from_ymd_opt(2024, 4, 1));
        assert_eq!(service.restore().unwrap(), Some(settings));
    }

    #[test]
    fn test_apply_form_overwrites_wholesale() {
        let storage = Storage::in_memory();
        let service = TripService::new(&storage);

        service
            .apply_form(&SetupForm::new("Tokyo", "2024-04-01", "3"))
            .unwrap();
        service.apply_form(&SetupForm::new("Osaka", "", "2")).unwrap();

        let restored = service.restore().unwrap().unwrap();
        assert_eq!(restored, TripSettings::new("Osaka", None, 2));
    }

    #[test]
    fn test_invalid_form_leaves_store_untouched() {
        let storage = Storage::in_memory();
        let service = TripService::new(&storage);

        assert!(service.apply_form(&SetupForm::new("Tokyo", "", "many")).is_err());
        assert_eq!(service.restore().unwrap(), None);
    }
}
