//! Path management for the trip planner
//!
//! Resolves where preferences, the key-value store files, exports and the log
//! file live.
//!
//! ## Path Resolution Order
//!
//! 1. `TRIP_PLANNER_DATA_DIR` environment variable (if set)
//! 2. The platform config directory (`~/.config/trip-planner` on Linux,
//!    `~/Library/Application Support/trip-planner` on macOS,
//!    `%APPDATA%\trip-planner` on Windows)

use std::path::PathBuf;

use directories::BaseDirs;

use crate::error::TripError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "TRIP_PLANNER_DATA_DIR";

/// Manages all paths used by the trip planner
#[derive(Debug, Clone)]
pub struct TripPaths {
    /// Base directory for all trip planner data
    base_dir: PathBuf,
}

impl TripPaths {
    /// Create a new TripPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and the
    /// override variable is not set.
    pub fn new() -> Result<Self, TripError> {
        let base_dir = if let Ok(custom) = std::env::var(DATA_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create TripPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding one file per store key
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Default destination for `trip export`
    pub fn export_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Get the path to the preferences file
    pub fn preferences_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the log file
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("trip.log")
    }

    /// Ensure the base, data and export directories exist
    pub fn ensure_directories(&self) -> Result<(), TripError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| TripError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| TripError::Io(format!("Failed to create data directory: {}", e)))?;

        std::fs::create_dir_all(self.export_dir())
            .map_err(|e| TripError::Io(format!("Failed to create export directory: {}", e)))?;

        Ok(())
    }
}

/// Resolve the default base directory from the platform config dir
fn resolve_default_path() -> Result<PathBuf, TripError> {
    let dirs = BaseDirs::new()
        .ok_or_else(|| TripError::Config("Could not determine home directory".into()))?;
    Ok(dirs.config_dir().join("trip-planner"))
}
