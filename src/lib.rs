//! Trip planner - plan a trip day by day and track what it costs
//!
//! This library provides the core of the trip planner: trip settings, a
//! per-day itinerary, and a daily expense ledger, all persisted as JSON
//! documents in a key-value store.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Paths and user preferences
//! - `error`: Custom error types
//! - `models`: Core data models (trip settings, itinerary, expenses, pages)
//! - `storage`: Key-value store and the typed channels kept in it
//! - `services`: Business logic and view building
//! - `state`: Application state and message dispatch
//! - `display`: Text formatting for amounts, ledgers and itineraries
//! - `export`: CSV, JSON and YAML export and import
//! - `cli` / `tui`: Front-ends
//!
//! # Example
//!
//! ```rust,ignore
//! use trip_planner::config::{paths::TripPaths, settings::Preferences};
//! use trip_planner::state::{AppState, Message};
//! use trip_planner::storage::Storage;
//!
//! let paths = TripPaths::new()?;
//! let preferences = Preferences::load_or_create(&paths)?;
//! let mut state = AppState::load(Storage::open(&paths)?, &preferences)?;
//! state.dispatch(Message::SelectExpenseDay(2))?;
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod state;
pub mod storage;
pub mod tui;

pub use error::{TripError, TripResult};
