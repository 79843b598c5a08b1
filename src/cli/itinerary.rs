//! Itinerary CLI commands
//!
//! Show the day cards or replace a day's notes.

use clap::Subcommand;

use crate::display::format_itinerary;
use crate::error::{TripError, TripResult};
use crate::state::{AppState, Message};

/// Itinerary subcommands
#[derive(Subcommand, Debug)]
pub enum ItineraryCommands {
    /// Show every day of the trip
    Show,
    /// Replace the notes of one day
    Edit {
        /// Day number (1-based)
        day: u32,
        /// New notes, stored verbatim (markup allowed)
        content: String,
    },
    /// List notes kept for days past the current trip length
    Stale,
}

/// Handle an itinerary command
pub fn handle_itinerary_command(state: &mut AppState, cmd: ItineraryCommands) -> TripResult<()> {
    match cmd {
        ItineraryCommands::Show => {
            print!("{}", format_itinerary(state.itinerary_view()));
        }

        ItineraryCommands::Edit { day, content } => {
            if state.settings().is_none() {
                return Err(TripError::settings_not_found());
            }
            state.dispatch(Message::EditDay { day, content })?;

            if let Some(card) = state.itinerary_view().card(day) {
                println!("Saved {}:", card.heading);
                println!("  {}", card.content);
            }
        }

        ItineraryCommands::Stale => {
            let duration = state.settings().map(|s| s.duration).unwrap_or(0);
            let stale = state.itinerary().stale_days(duration);
            if stale.is_empty() {
                println!("No notes beyond day {}.", duration);
            } else {
                for day in stale {
                    let content = state.itinerary().get(day).unwrap_or_default();
                    println!("Day {}: {}", day, content);
                }
            }
        }
    }

    Ok(())
}
