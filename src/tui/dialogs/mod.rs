//! Dialog modules for the TUI
//!
//! Contains modal dialogs drawn over the active page

pub mod day_editor;
pub mod help;
