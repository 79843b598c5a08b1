//! Itinerary service
//!
//! Builds one card per trip day from the stored notes and writes notes back
//! when a day's editor loses focus. Rendering always reloads the notes from
//! the store first, so stored state wins over anything held in memory.

use chrono::NaiveDate;
use tracing::info;

use crate::display::amount::format_day_heading;
use crate::error::TripResult;
use crate::models::{day_key, ItineraryDetails, TripSettings};
use crate::storage::Storage;

/// Shown instead of day cards when the trip has no days
pub const SETUP_FIRST_MESSAGE: &str = "Set the number of trip days on the setup page first.";

/// Invitation shown on a day without notes
pub fn day_placeholder(day: u32) -> String {
    format!("Start planning Day {}...", day)
}

/// One editable day card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCard {
    /// 1-based day number
    pub day: u32,
    /// Store key of the day's notes (`day_N`)
    pub key: String,
    /// `Day N` with the calendar date when known
    pub heading: String,
    pub date: Option<NaiveDate>,
    /// Stored notes, or the placeholder invitation
    pub content: String,
    /// Whether `content` is the placeholder rather than stored notes
    pub is_placeholder: bool,
}

impl DayCard {
    /// Text to seed an editor with; empty when showing the placeholder
    pub fn editable_content(&self) -> &str {
        if self.is_placeholder {
            ""
        } else {
            &self.content
        }
    }
}

/// Rendered itinerary page
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItineraryView {
    pub title: String,
    /// Instruction shown when there are no days to plan
    pub placeholder: Option<String>,
    pub days: Vec<DayCard>,
}

impl ItineraryView {
    /// Build the page from settings and stored notes
    pub fn build(settings: Option<&TripSettings>, details: &ItineraryDetails) -> Self {
        let title = settings.map(TripSettings::title).unwrap_or_default();
        let duration = settings.map(|s| s.duration).unwrap_or(0);

        if duration == 0 {
            return Self {
                title,
                placeholder: Some(SETUP_FIRST_MESSAGE.to_string()),
                days: Vec::new(),
            };
        }

        let days = (1..=duration)
            .map(|day| {
                let date = settings.and_then(|s| s.date_of_day(day));
                let (content, is_placeholder) = match details.get(day) {
                    Some(content) => (content.to_string(), false),
                    None => (day_placeholder(day), true),
                };
                DayCard {
                    day,
                    key: day_key(day),
                    heading: format_day_heading(day, date),
                    date,
                    content,
                    is_placeholder,
                }
            })
            .collect();

        Self {
            title,
            placeholder: None,
            days,
        }
    }

    /// Card for a day, if it is displayed
    pub fn card(&self, day: u32) -> Option<&DayCard> {
        self.days.iter().find(|card| card.day == day)
    }
}

/// Service for itinerary notes
pub struct ItineraryService<'a> {
    storage: &'a Storage,
}

impl<'a> ItineraryService<'a> {
    /// Create a new itinerary service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Load the stored notes
    pub fn load(&self) -> TripResult<ItineraryDetails> {
        self.storage.load_itinerary()
    }

    /// Reload the notes from the store and build the page
    pub fn render(
        &self,
        settings: Option<&TripSettings>,
    ) -> TripResult<(ItineraryDetails, ItineraryView)> {
        let details = self.load()?;
        let view = ItineraryView::build(settings, &details);
        Ok((details, view))
    }

    /// Capture a day's content verbatim and persist the whole mapping
    pub fn save_day(
        &self,
        details: &mut ItineraryDetails,
        day: u32,
        content: impl Into<String>,
    ) -> TripResult<()> {
        details.set(day, content);
        self.storage.save_itinerary(details)?;
        info!(day, "itinerary day saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::ITINERARY_KEY;

    fn settings(duration: u32) -> TripSettings {
        TripSettings::new("Tokyo", NaiveDate::from_ymd_opt(2024, 4, 1), duration)
    }

    #[test]
    fn test_one_card_per_day() {
        let details = ItineraryDetails::new();
        for duration in 1..=10 {
            let view = ItineraryView::build(Some(&settings(duration)), &details);
            let days: Vec<u32> = view.days.iter().map(|c| c.day).collect();
            assert_eq!(days, (1..=duration).collect::<Vec<_>>());
            assert!(view.placeholder.is_none());
        }
    }

    #[test]
    fn test_zero_days_shows_placeholder() {
        let details = ItineraryDetails::new();

        let view = ItineraryView::build(None, &details);
        assert!(view.days.is_empty());
        assert_eq!(view.placeholder.as_deref(), Some(SETUP_FIRST_MESSAGE));

        let view = ItineraryView::build(Some(&settings(0)), &details);
        assert!(view.days.is_empty());
        assert!(view.placeholder.is_some());
    }

    #[test]
    fn test_tokyo_headings() {
        let view = ItineraryView::build(Some(&settings(3)), &ItineraryDetails::new());
        let headings: Vec<&str> = view.days.iter().map(|c| c.heading.as_str()).collect();
        assert_eq!(headings, vec!["Day 1 (4/1)", "Day 2 (4/2)", "Day 3 (4/3)"]);
        assert_eq!(view.title, "Tokyo · 3-day itinerary");
    }

    #[test]
    fn test_headings_without_start_date() {
        let settings = TripSettings::new("Tokyo", None, 2);
        let view = ItineraryView::build(Some(&settings), &ItineraryDetails::new());
        assert_eq!(view.days[1].heading, "Day 2");
        assert_eq!(view.days[1].date, None);
    }

    #[test]
    fn test_cards_use_stored_notes_or_placeholder() {
        let mut details = ItineraryDetails::new();
        details.set(2, "AnimeJapan all day");

        let view = ItineraryView::build(Some(&settings(3)), &details);

        assert!(view.days[0].is_placeholder);
        assert_eq!(view.days[0].content, day_placeholder(1));
        assert_eq!(view.days[0].editable_content(), "");
        assert!(!view.days[1].is_placeholder);
        assert_eq!(view.days[1].content, "AnimeJapan all day");
        assert_eq!(view.days[1].key, "day_2");
    }

    #[test]
    fn test_stale_entries_are_kept_but_hidden() {
        let storage = Storage::in_memory();
        let service = ItineraryService::new(&storage);

        let mut details = service.load().unwrap();
        service.save_day(&mut details, 5, "Day five").unwrap();

        let (details, view) = service.render(Some(&settings(3))).unwrap();
        assert_eq!(view.days.len(), 3);
        assert!(view.card(5).is_none());
        assert_eq!(details.get(5), Some("Day five"));
    }

    #[test]
    fn test_save_day_round_trip() {
        let storage = Storage::in_memory();
        let service = ItineraryService::new(&storage);
        let content = "<div>Morning: <b>NRT</b> arrival</div>";

        let (mut details, _) = service.render(Some(&settings(3))).unwrap();
        service.save_day(&mut details, 1, content).unwrap();

        let (reloaded, view) = service.render(Some(&settings(3))).unwrap();
        assert_eq!(reloaded.get(1), Some(content));
        assert_eq!(view.days[0].content, content);
    }

    #[test]
    fn test_render_is_idempotent() {
        let storage = Storage::in_memory();
        let service = ItineraryService::new(&storage);

        let (mut details, _) = service.render(Some(&settings(2))).unwrap();
        service.save_day(&mut details, 2, "Kamakura").unwrap();
        let before = storage.store().get_item(ITINERARY_KEY).unwrap();

        let (_, first) = service.render(Some(&settings(2))).unwrap();
        let (_, second) = service.render(Some(&settings(2))).unwrap();

        assert_eq!(first, second);
        assert_eq!(storage.store().get_item(ITINERARY_KEY).unwrap(), before);
    }

    #[test]
    fn test_render_prefers_stored_state() {
        let storage = Storage::in_memory();
        let service = ItineraryService::new(&storage);

        let (mut stale, _) = service.render(Some(&settings(1))).unwrap();
        stale.set(1, "only in memory");

        let mut external = ItineraryDetails::new();
        external.set(1, "restored from elsewhere");
        storage.save_itinerary(&external).unwrap();

        let (details, view) = service.render(Some(&settings(1))).unwrap();
        assert_eq!(details.get(1), Some("restored from elsewhere"));
        assert_eq!(view.days[0].content, "restored from elsewhere");
    }
}
