//! Page navigator
//!
//! Shows exactly one page at a time and keeps the bottom navigation bar in
//! sync. There is no page stack: showing a page hides all others.

use tracing::{debug, warn};

use crate::models::Page;

/// Result of a navigation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// The page is now visible
    Shown(Page),
    /// The request was ignored and nothing changed
    Ignored,
}

/// Visible page and navigation bar state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    visible: Page,
    nav_visible: bool,
    active_nav: Option<Page>,
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator {
    /// Start on the setup page with the navigation bar hidden
    pub fn new() -> Self {
        Self {
            visible: Page::Setup,
            nav_visible: false,
            active_nav: None,
        }
    }

    /// The page currently shown
    pub fn visible(&self) -> Page {
        self.visible
    }

    /// Whether the bottom navigation bar is shown
    pub fn nav_visible(&self) -> bool {
        self.nav_visible
    }

    /// The highlighted navigation button, if any
    pub fn active_nav(&self) -> Option<Page> {
        self.active_nav
    }

    /// Show `page`, hiding every other page
    ///
    /// The setup page hides the navigation bar. Any other page shows it with
    /// exactly that page's button active. `Bonuses` is ignored.
    pub fn navigate(&mut self, page: Page) -> Transition {
        if !page.is_implemented() {
            warn!(page = page.id(), "navigation to unimplemented page ignored");
            return Transition::Ignored;
        }

        self.visible = page;
        if page == Page::Setup {
            self.nav_visible = false;
        } else {
            self.nav_visible = true;
            self.active_nav = Some(page);
        }

        debug!(page = page.id(), "page shown");
        Transition::Shown(page)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_setup() {
        let nav = Navigator::new();
        assert_eq!(nav.visible(), Page::Setup);
        assert!(!nav.nav_visible());
    }

    #[test]
    fn test_navigate_marks_single_active_button() {
        let mut nav = Navigator::new();

        assert_eq!(nav.navigate(Page::Itinerary), Transition::Shown(Page::Itinerary));
        assert!(nav.nav_visible());
        assert_eq!(nav.active_nav(), Some(Page::Itinerary));

        nav.navigate(Page::Expense);
        assert_eq!(nav.visible(), Page::Expense);
        assert_eq!(nav.active_nav(), Some(Page::Expense));
    }

    #[test]
    fn test_setup_hides_nav_bar() {
        let mut nav = Navigator::new();
        nav.navigate(Page::Expense);
        nav.navigate(Page::Setup);

        assert_eq!(nav.visible(), Page::Setup);
        assert!(!nav.nav_visible());
    }

    #[test]
    fn test_bonuses_is_a_no_op() {
        let mut nav = Navigator::new();
        nav.navigate(Page::Itinerary);
        let before = nav.clone();

        assert_eq!(nav.navigate(Page::Bonuses), Transition::Ignored);
        assert_eq!(nav, before);
    }

    #[test]
    fn test_navigating_to_same_page_is_stable() {
        let mut nav = Navigator::new();
        nav.navigate(Page::Itinerary);
        let before = nav.clone();
        nav.navigate(Page::Itinerary);
        assert_eq!(nav, before);
    }
}
