//! Storage layer for the trip planner
//!
//! Wraps a key-value string store and (de)serializes the three independent
//! channels: trip settings, itinerary details and the expense list. There is
//! no transactionality across channels.

pub mod file_io;
pub mod kv;

pub use kv::{FileStore, KeyValueStore, MemoryStore};

use serde::{de::DeserializeOwned, Serialize};
use tracing::debug;

use crate::config::paths::TripPaths;
use crate::error::{TripError, TripResult};
use crate::models::{Expense, ItineraryDetails, TripSettings};

/// Key of the trip settings record
pub const SETTINGS_KEY: &str = "tripSettings";

/// Key of the itinerary details record
pub const ITINERARY_KEY: &str = "tripItineraryDetails";

/// Key of the expense list
pub const EXPENSES_KEY: &str = "tokyoExpenses";

/// All channel keys, in display order
pub const CHANNEL_KEYS: [&str; 3] = [SETTINGS_KEY, ITINERARY_KEY, EXPENSES_KEY];

/// Health of a stored channel
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelStatus {
    /// Nothing stored under the key
    Missing,
    /// Stored text parses as JSON
    Valid,
    /// Stored text is not JSON
    Corrupt(String),
}

/// Main storage coordinator over a key-value store
pub struct Storage {
    store: Box<dyn KeyValueStore>,
}

impl Storage {
    /// Open the file-backed store under the configured data directory
    pub fn open(paths: &TripPaths) -> Result<Self, TripError> {
        paths.ensure_directories()?;
        Ok(Self::with_store(Box::new(FileStore::new(paths.data_dir()))))
    }

    /// Storage backed by memory only
    pub fn in_memory() -> Self {
        Self::with_store(Box::new(MemoryStore::new()))
    }

    /// Storage over any key-value store
    pub fn with_store(store: Box<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// The underlying key-value store
    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    /// Load and parse a value, or `None` if nothing is stored
    pub fn load_optional<T: DeserializeOwned>(&self, key: &str) -> TripResult<Option<T>> {
        match self.store.get_item(key)? {
            None => {
                debug!(key, "no stored value");
                Ok(None)
            }
            Some(text) => {
                debug!(key, bytes = text.len(), "loaded stored value");
                serde_json::from_str(&text).map(Some).map_err(|e| {
                    TripError::Storage(format!("Failed to parse stored '{}': {}", key, e))
                })
            }
        }
    }

    /// Load and parse a value, or the type's default if nothing is stored
    pub fn load<T: DeserializeOwned + Default>(&self, key: &str) -> TripResult<T> {
        Ok(self.load_optional(key)?.unwrap_or_default())
    }

    /// Serialize a value to text and store it
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> TripResult<()> {
        let text = serde_json::to_string_pretty(value).map_err(|e| {
            TripError::Storage(format!("Failed to serialize '{}': {}", key, e))
        })?;
        self.store.set_item(key, &text)
    }

    /// Remove a stored value
    pub fn clear(&self, key: &str) -> TripResult<()> {
        self.store.remove_item(key)
    }

    /// Remove all three channels
    pub fn clear_all(&self) -> TripResult<()> {
        for key in CHANNEL_KEYS {
            self.clear(key)?;
        }
        Ok(())
    }

    pub fn load_settings(&self) -> TripResult<Option<TripSettings>> {
        self.load_optional(SETTINGS_KEY)
    }

    pub fn save_settings(&self, settings: &TripSettings) -> TripResult<()> {
        self.save(SETTINGS_KEY, settings)
    }

    pub fn load_itinerary(&self) -> TripResult<ItineraryDetails> {
        self.load(ITINERARY_KEY)
    }

    pub fn save_itinerary(&self, details: &ItineraryDetails) -> TripResult<()> {
        self.save(ITINERARY_KEY, details)
    }

    pub fn load_expenses(&self) -> TripResult<Vec<Expense>> {
        self.load(EXPENSES_KEY)
    }

    pub fn save_expenses(&self, expenses: &[Expense]) -> TripResult<()> {
        self.save(EXPENSES_KEY, &expenses)
    }

    /// Report whether each channel is missing, valid JSON or corrupt
    pub fn channel_status(&self) -> TripResult<Vec<(&'static str, ChannelStatus)>> {
        CHANNEL_KEYS
            .iter()
            .map(|key| {
                let status = match self.store.get_item(key)? {
                    None => ChannelStatus::Missing,
                    Some(text) => match serde_json::from_str::<serde_json::Value>(&text) {
                        Ok(_) => ChannelStatus::Valid,
                        Err(e) => ChannelStatus::Corrupt(e.to_string()),
                    },
                };
                Ok((*key, status))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseDraft, ExpenseId};
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_storage_creation() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TripPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::open(&paths).unwrap();

        assert!(temp_dir.path().join("data").exists());
        assert_eq!(storage.load_settings().unwrap(), None);
    }

    #[test]
    fn test_missing_channels_load_defaults() {
        let storage = Storage::in_memory();
        assert!(storage.load_itinerary().unwrap().is_empty());
        assert!(storage.load_expenses().unwrap().is_empty());
    }

    #[test]
    fn test_channels_are_independent() {
        let storage = Storage::in_memory();
        let settings = TripSettings::new("Tokyo", NaiveDate::from_ymd_opt(2024, 4, 1), 3);
        storage.save_settings(&settings).unwrap();

        assert_eq!(storage.load_settings().unwrap(), Some(settings));
        assert_eq!(storage.store().get_item(ITINERARY_KEY).unwrap(), None);
        assert_eq!(storage.store().get_item(EXPENSES_KEY).unwrap(), None);
    }

    #[test]
    fn test_itinerary_round_trip_through_files() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TripPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut details = ItineraryDetails::new();
        details.set(1, "<div>Tsukiji <i>breakfast</i></div>");
        Storage::open(&paths).unwrap().save_itinerary(&details).unwrap();

        // Simulate a fresh start
        let reopened = Storage::open(&paths).unwrap();
        assert_eq!(
            reopened.load_itinerary().unwrap().get(1),
            Some("<div>Tsukiji <i>breakfast</i></div>")
        );
    }

    #[test]
    fn test_expenses_round_trip() {
        let storage = Storage::in_memory();
        let expenses = vec![Expense::from_draft(
            ExpenseId::from_millis(5),
            ExpenseDraft::new(1, "Ramen", 1200.0, "Food"),
        )];
        storage.save_expenses(&expenses).unwrap();
        assert_eq!(storage.load_expenses().unwrap(), expenses);
    }

    #[test]
    fn test_malformed_value_is_storage_error() {
        let storage = Storage::in_memory();
        storage.store().set_item(EXPENSES_KEY, "{not json").unwrap();

        let err = storage.load_expenses().unwrap_err();
        assert!(matches!(err, TripError::Storage(_)));
        assert!(err.to_string().contains(EXPENSES_KEY));
    }

    #[test]
    fn test_clear_all() {
        let storage = Storage::in_memory();
        storage.save_settings(&TripSettings::default()).unwrap();
        storage.save_expenses(&[]).unwrap();

        storage.clear_all().unwrap();

        assert_eq!(storage.load_settings().unwrap(), None);
        assert_eq!(storage.store().get_item(EXPENSES_KEY).unwrap(), None);
    }

    #[test]
    fn test_channel_status() {
        let storage = Storage::in_memory();
        storage.save_settings(&TripSettings::default()).unwrap();
        storage.store().set_item(EXPENSES_KEY, "oops").unwrap();

        let status = storage.channel_status().unwrap();
        assert_eq!(status[0], (SETTINGS_KEY, ChannelStatus::Valid));
        assert_eq!(status[1], (ITINERARY_KEY, ChannelStatus::Missing));
        assert!(matches!(status[2], (EXPENSES_KEY, ChannelStatus::Corrupt(_))));
    }
}
