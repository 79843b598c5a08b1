//! Status bar view
//!
//! Shows the current page, the last status message and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::models::Page;
use crate::tui::app::{App, InputMode};

fn hints(app: &App) -> &'static str {
    if app.has_dialog() {
        return " Enter/Esc:Close ";
    }
    match (app.page(), app.input_mode) {
        (Page::Setup, _) => " Enter:Save  Tab:Next  Ctrl-C:Quit ",
        (Page::Expense, InputMode::Editing) => " Enter:Add  Tab:Next  Esc:Done ",
        (Page::Expense, InputMode::Normal) => " a:Add  h/l:Day  q:Quit  ?:Help ",
        (Page::Itinerary, _) => " e:Edit  j/k:Move  q:Quit  ?:Help ",
        (Page::Bonuses, _) => " q:Quit  ?:Help ",
    }
}

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let mut spans = vec![Span::styled(
        format!(" {} ", app.page().label()),
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    let hints = hints(app);
    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.len());
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
