//! Page identifiers
//!
//! The app has a fixed set of pages. `Bonuses` appears in the navigation bar
//! but has no content; navigating to it does nothing.

use std::fmt;

/// A page of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    /// Trip settings form
    #[default]
    Setup,
    /// Per-day itinerary cards
    Itinerary,
    /// Daily expense ledger
    Expense,
    /// Placeholder page without content
    Bonuses,
}

impl Page {
    /// Order of the buttons in the bottom navigation bar
    pub const NAV_ORDER: [Page; 4] = [Page::Setup, Page::Itinerary, Page::Expense, Page::Bonuses];

    /// Stable page identifier
    pub fn id(&self) -> &'static str {
        match self {
            Self::Setup => "setup-page",
            Self::Itinerary => "itinerary-page",
            Self::Expense => "expense-page",
            Self::Bonuses => "bonuses-page",
        }
    }

    /// Look up a page by identifier
    pub fn from_id(id: &str) -> Option<Self> {
        Self::NAV_ORDER.into_iter().find(|page| page.id() == id.trim())
    }

    /// Label used in the navigation bar
    pub fn label(&self) -> &'static str {
        match self {
            Self::Setup => "Setup",
            Self::Itinerary => "Itinerary",
            Self::Expense => "Expenses",
            Self::Bonuses => "Bonuses",
        }
    }

    /// Whether the page has content that can be shown
    pub fn is_implemented(&self) -> bool {
        !matches!(self, Self::Bonuses)
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}
