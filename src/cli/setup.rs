//! Setup CLI command
//!
//! Submits the trip settings form from the command line.

use clap::Args;

use crate::display::format_itinerary;
use crate::error::TripResult;
use crate::models::SetupForm;
use crate::state::{AppState, Message};

/// Arguments of `trip setup`
#[derive(Args, Debug)]
pub struct SetupArgs {
    /// Trip destination
    #[arg(short, long)]
    pub destination: String,

    /// First day of the trip (YYYY-MM-DD)
    #[arg(short, long)]
    pub start_date: Option<String>,

    /// Number of days
    #[arg(short = 'n', long)]
    pub duration: String,
}

/// Handle `trip setup`
pub fn handle_setup_command(state: &mut AppState, args: SetupArgs) -> TripResult<()> {
    let form = SetupForm::new(
        args.destination,
        args.start_date.unwrap_or_default(),
        args.duration,
    );

    state.dispatch(Message::SubmitSetup(form))?;

    println!("Trip settings saved.");
    println!();
    print!("{}", format_itinerary(state.itinerary_view()));

    Ok(())
}
