use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use trip_planner::cli::{
    handle_clear_command, handle_config_command, handle_expense_command, handle_export_command,
    handle_import_command, handle_itinerary_command, handle_setup_command, print_startup_summary,
    ExpenseCommands, ExportArgs, ImportArgs, ItineraryCommands, SetupArgs,
};
use trip_planner::config::{paths::TripPaths, settings::Preferences};
use trip_planner::logging;
use trip_planner::state::AppState;
use trip_planner::storage::Storage;

#[derive(Parser)]
#[command(
    name = "trip",
    version,
    about = "Plan a trip day by day and track its expenses",
    long_about = "A terminal trip planner. Set a destination, start date and \
                  number of days, write notes for each day of the itinerary, \
                  and keep a per-day ledger of what you spend."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI
    #[command(alias = "ui")]
    Tui,

    /// Save the trip destination, start date and length
    Setup(SetupArgs),

    /// Itinerary commands
    #[command(subcommand)]
    Itinerary(ItineraryCommands),

    /// Expense ledger commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Export the trip to CSV, JSON or YAML
    Export(ExportArgs),

    /// Replace the trip with a JSON or YAML export
    Import(ImportArgs),

    /// Remove all stored trip data
    Clear {
        /// Confirm removal
        #[arg(long)]
        yes: bool,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = TripPaths::new()?;
    paths.ensure_directories()?;
    let preferences = Preferences::load_or_create(&paths)?;

    if let Err(e) = logging::init(&paths, &preferences.log_level) {
        eprintln!("Warning: logging disabled: {}", e);
    }

    let storage = Storage::open(&paths)?;

    match cli.command {
        Some(Commands::Tui) => {
            let state = load_state(storage, &preferences)?;
            trip_planner::tui::run_tui(state, &preferences)?;
        }
        Some(Commands::Setup(args)) => {
            handle_setup_command(&mut load_state(storage, &preferences)?, args)?;
        }
        Some(Commands::Itinerary(cmd)) => {
            handle_itinerary_command(&mut load_state(storage, &preferences)?, cmd)?;
        }
        Some(Commands::Expense(cmd)) => {
            let mut state = load_state(storage, &preferences)?;
            handle_expense_command(&mut state, &preferences, cmd)?;
        }
        Some(Commands::Export(args)) => {
            handle_export_command(&storage, &paths, args)?;
        }
        Some(Commands::Import(args)) => {
            handle_import_command(&storage, args)?;
        }
        Some(Commands::Clear { yes }) => {
            handle_clear_command(&storage, yes)?;
        }
        Some(Commands::Config) => {
            handle_config_command(&storage, &paths, &preferences)?;
        }
        None => print_startup_summary(&load_state(storage, &preferences)?)?,
    }

    Ok(())
}

/// Restore saved state and pick the start page
fn load_state(storage: Storage, preferences: &Preferences) -> Result<AppState> {
    let state = AppState::load(storage, preferences)?;
    info!(page = %state.visible_page(), "state loaded");
    Ok(state)
}
