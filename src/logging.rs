//! Logging setup
//!
//! Events go to `trip.log` in the base directory because the TUI owns the
//! terminal. `TRIP_LOG` overrides the filter from preferences.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::paths::TripPaths;
use crate::error::{TripError, TripResult};

/// Environment variable overriding the log filter
pub const LOG_ENV: &str = "TRIP_LOG";

/// Build the filter from an explicit directive or the default level
fn build_filter(directive: Option<&str>, default_level: &str) -> EnvFilter {
    directive
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(default_level))
}

/// Install the global subscriber writing to the log file
pub fn init(paths: &TripPaths, default_level: &str) -> TripResult<()> {
    paths.ensure_directories()?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths.log_file())
        .map_err(|e| TripError::Io(format!("Failed to open log file: {}", e)))?;

    let directive = std::env::var(LOG_ENV).ok();
    let filter = build_filter(directive.as_deref(), default_level);

    fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| TripError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_prefers_directive() {
        let filter = build_filter(Some("debug"), "info");
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn test_filter_falls_back_to_default() {
        assert_eq!(build_filter(None, "warn").to_string(), "warn");
        assert_eq!(build_filter(Some("trip=verbose"), "info").to_string(), "info");
    }
}
