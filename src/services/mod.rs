//! Service layer for the trip planner
//!
//! The service layer provides the trip planner's behaviour on top of the
//! storage layer: applying settings, rendering the itinerary, appending to and
//! rendering the ledger, and page navigation.

pub mod itinerary;
pub mod ledger;
pub mod navigator;
pub mod trip;

pub use itinerary::{DayCard, ItineraryService, ItineraryView};
pub use ledger::{CategoryTotal, LedgerLine, LedgerService, LedgerView};
pub use navigator::{Navigator, Transition};
pub use trip::TripService;
