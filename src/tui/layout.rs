//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: page, bottom navigation bar, status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Navigation bar; zero height while it is hidden
    pub nav_bar: Rect,
    /// Active page
    pub page: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect, nav_visible: bool) -> Self {
        let nav_height = if nav_visible { 3 } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),
                Constraint::Length(nav_height),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            page: chunks[0],
            nav_bar: chunks[1],
            status_bar: chunks[2],
        }
    }
}

/// Split the expense page into form and ledger
pub struct ExpenseLayout {
    pub form: Rect,
    pub ledger: Rect,
}

impl ExpenseLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6), // Four fields plus borders
                Constraint::Min(3),
            ])
            .split(area);

        Self {
            form: chunks[0],
            ledger: chunks[1],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_nav_bar_takes_no_rows() {
        let layout = AppLayout::new(Rect::new(0, 0, 80, 24), false);
        assert_eq!(layout.nav_bar.height, 0);
        assert_eq!(layout.page.height, 23);

        let layout = AppLayout::new(Rect::new(0, 0, 80, 24), true);
        assert_eq!(layout.nav_bar.height, 3);
        assert_eq!(layout.nav_bar.y, 20);
        assert_eq!(layout.status_bar.y, 23);
    }
}
