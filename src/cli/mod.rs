//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the application state.

pub mod expense;
pub mod export;
pub mod itinerary;
pub mod setup;

pub use expense::{handle_expense_command, ExpenseCommands};
pub use export::{handle_export_command, handle_import_command, ExportArgs, ExportFormat, ImportArgs};
pub use itinerary::{handle_itinerary_command, ItineraryCommands};
pub use setup::{handle_setup_command, SetupArgs};

use crate::config::{paths::TripPaths, settings::Preferences};
use crate::display::format_money;
use crate::error::TripResult;
use crate::models::Page;
use crate::services::LedgerService;
use crate::state::AppState;
use crate::storage::{ChannelStatus, Storage};

/// Print what the app would show on startup
pub fn print_startup_summary(state: &AppState) -> TripResult<()> {
    match state.settings() {
        Some(settings) => {
            println!("{}", settings.title());
            let total = LedgerService::new(state.storage()).trip_total()?;
            println!(
                "Spent so far: {}",
                format_money(total, state.currency_suffix())
            );
        }
        None => {
            println!("No trip set up yet.");
            println!("Run 'trip setup --destination <NAME> --duration <DAYS>' to begin.");
        }
    }

    let page = state.visible_page();
    println!();
    println!("Start page: {}", page.label());
    if page == Page::Setup {
        println!("Run 'trip tui' to fill in the setup form interactively.");
    } else {
        println!("Run 'trip tui' to launch the interactive interface.");
    }

    Ok(())
}

/// Handle `trip clear`
pub fn handle_clear_command(storage: &Storage, yes: bool) -> TripResult<()> {
    if !yes {
        println!("This removes the trip settings, itinerary and expenses.");
        println!("Re-run with --yes to confirm.");
        return Ok(());
    }

    storage.clear_all()?;
    println!("All trip data cleared.");
    Ok(())
}

/// Handle `trip config`
pub fn handle_config_command(
    storage: &Storage,
    paths: &TripPaths,
    preferences: &Preferences,
) -> TripResult<()> {
    println!("Trip Planner Configuration");
    println!("==========================");
    println!("Base directory:   {}", paths.base_dir().display());
    println!("Data directory:   {}", paths.data_dir().display());
    println!("Export directory: {}", paths.export_dir().display());
    println!("Log file:         {}", paths.log_file().display());
    println!();
    println!("Preferences:");
    println!("  Currency suffix: {}", preferences.currency_suffix);
    println!("  Categories:      {}", preferences.expense_categories.join(", "));
    println!("  Log level:       {}", preferences.log_level);
    println!();
    println!("Stored data:");
    for (key, status) in storage.channel_status()? {
        let status = match status {
            ChannelStatus::Missing => "missing".to_string(),
            ChannelStatus::Valid => "ok".to_string(),
            ChannelStatus::Corrupt(reason) => format!("corrupt ({})", reason),
        };
        println!("  {:<22} {}", key, status);
    }

    Ok(())
}
