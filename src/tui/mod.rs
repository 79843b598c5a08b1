//! Terminal User Interface module
//!
//! This module provides the interactive trip planner using ratatui: the
//! setup form, the itinerary cards with their editor, and the expense
//! ledger, switched through a navigation bar.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
