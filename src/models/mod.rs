//! Core data models for the trip planner
//!
//! Flat records persisted in the key-value store: trip settings, per-day
//! itinerary notes and the expense list, plus the page identifiers used by
//! navigation.

pub mod expense;
pub mod itinerary;
pub mod page;
pub mod trip;

pub use expense::{Expense, ExpenseDraft, ExpenseForm, ExpenseId};
pub use itinerary::{day_key, ItineraryDetails};
pub use page::Page;
pub use trip::{SetupForm, TripSettings};
