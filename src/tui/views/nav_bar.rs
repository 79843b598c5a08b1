//! Navigation bar
//!
//! One numbered button per page. Hidden while the setup page is shown.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::Page;
use crate::tui::app::App;

/// Render the navigation bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let active = app.state.navigator().active_nav();

    let mut spans = Vec::new();
    for (i, page) in Page::NAV_ORDER.iter().enumerate() {
        let style = if Some(*page) == active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else if page.is_implemented() {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(format!(" {} {} ", i + 1, page.label()), style));
        spans.push(Span::raw(" "));
    }

    let title = app
        .state
        .settings()
        .map(|s| format!(" {} ", s.title()))
        .unwrap_or_else(|| " Trip planner ".to_string());

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(paragraph, area);
}
