//! Itinerary details model
//!
//! Per-day planning notes keyed `day_N`. Values are stored verbatim and may
//! embed markup. Entries for days beyond the current trip length are kept.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Key under which a day's notes are stored
pub fn day_key(day: u32) -> String {
    format!("day_{}", day)
}

/// Parse a `day_N` key back into its day number
pub fn parse_day_key(key: &str) -> Option<u32> {
    key.strip_prefix("day_")?.parse().ok()
}

/// Mapping from `day_N` to that day's notes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItineraryDetails(BTreeMap<String, String>);

impl ItineraryDetails {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Notes for a day; an empty entry counts as absent
    pub fn get(&self, day: u32) -> Option<&str> {
        self.0
            .get(&day_key(day))
            .map(String::as_str)
            .filter(|content| !content.is_empty())
    }

    /// Replace a day's notes with the captured content
    pub fn set(&mut self, day: u32, content: impl Into<String>) {
        self.0.insert(day_key(day), content.into());
    }

    /// Number of stored entries, including stale ones
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries keyed by day number, in day order
    ///
    /// Keys that do not follow the `day_N` layout are skipped.
    pub fn days(&self) -> Vec<(u32, &str)> {
        let mut days: Vec<_> = self
            .0
            .iter()
            .filter_map(|(key, content)| parse_day_key(key).map(|day| (day, content.as_str())))
            .collect();
        days.sort_by_key(|(day, _)| *day);
        days
    }

    /// Entries for days after `duration`
    pub fn stale_days(&self, duration: u32) -> Vec<u32> {
        self.days()
            .into_iter()
            .map(|(day, _)| day)
            .filter(|day| *day > duration)
            .collect()
    }
}
