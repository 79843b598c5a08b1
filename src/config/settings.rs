//! User preferences for the trip planner
//!
//! Preferences control presentation (currency suffix, the category choices
//! offered by the expense form) and logging. They are separate from the trip
//! settings record, which lives in the key-value store.

use serde::{Deserialize, Serialize};

use super::paths::TripPaths;
use crate::error::TripError;

/// User preferences for the trip planner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Text appended to every displayed expense amount
    #[serde(default = "default_currency_suffix")]
    pub currency_suffix: String,

    /// Categories offered by the expense form
    #[serde(default = "default_expense_categories")]
    pub expense_categories: Vec<String>,

    /// Default log filter when `TRIP_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency_suffix() -> String {
    "円".to_string()
}

fn default_expense_categories() -> Vec<String> {
    ["Food", "Transport", "Shopping", "Lodging", "Sightseeing", "Other"]
        .iter()
        .map(|c| c.to_string())
        .collect()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            currency_suffix: default_currency_suffix(),
            expense_categories: default_expense_categories(),
            log_level: default_log_level(),
        }
    }
}

impl Preferences {
    /// Load preferences from disk, or return defaults if the file doesn't exist
    pub fn load_or_create(paths: &TripPaths) -> Result<Self, TripError> {
        let path = paths.preferences_file();

        if path.exists() {
            let contents = std::fs::read_to_string(&path)
                .map_err(|e| TripError::Io(format!("Failed to read preferences file: {}", e)))?;

            let preferences: Preferences = serde_json::from_str(&contents).map_err(|e| {
                TripError::Config(format!("Failed to parse preferences file: {}", e))
            })?;

            Ok(preferences)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Preferences::default())
        }
    }

    /// Save preferences to disk
    pub fn save(&self, paths: &TripPaths) -> Result<(), TripError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| TripError::Config(format!("Failed to serialize preferences: {}", e)))?;

        std::fs::write(paths.preferences_file(), contents)
            .map_err(|e| TripError::Io(format!("Failed to write preferences file: {}", e)))?;

        Ok(())
    }

    /// Category the expense form starts with
    pub fn default_category(&self) -> &str {
        self.expense_categories
            .first()
            .map(String::as_str)
            .unwrap_or("Other")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_preferences() {
        let prefs = Preferences::default();
        assert_eq!(prefs.currency_suffix, "円");
        assert_eq!(prefs.default_category(), "Food");
        assert_eq!(prefs.log_level, "info");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TripPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut prefs = Preferences::default();
        prefs.currency_suffix = "EUR".into();
        prefs.expense_categories = vec!["Coffee".into()];
        prefs.save(&paths).unwrap();

        let loaded = Preferences::load_or_create(&paths).unwrap();
        assert_eq!(loaded, prefs);
        assert_eq!(loaded.default_category(), "Coffee");
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let prefs: Preferences = serde_json::from_str(r#"{"currency_suffix": "$"}"#).unwrap();
        assert_eq!(prefs.currency_suffix, "$");
        assert_eq!(prefs.schema_version, 1);
        assert_eq!(prefs.expense_categories.len(), 6);
    }

    #[test]
    fn test_empty_category_list_defaults_to_other() {
        let prefs = Preferences {
            expense_categories: Vec::new(),
            ..Preferences::default()
        };
        assert_eq!(prefs.default_category(), "Other");
    }
}
