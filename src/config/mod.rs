//! Configuration module for the trip planner
//!
//! This module provides configuration management including:
//! - Platform-aware path resolution
//! - User preferences persistence

pub mod paths;
pub mod settings;

pub use paths::TripPaths;
pub use settings::Preferences;
