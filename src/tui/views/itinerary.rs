//! Itinerary page
//!
//! One card per trip day. Cards without notes show the planning invitation
//! in grey.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use crate::services::DayCard;
use crate::tui::app::App;

fn card_item(card: &DayCard) -> ListItem<'_> {
    let mut lines = vec![Line::from(Span::styled(
        card.heading.as_str(),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    ))];

    let body_style = if card.is_placeholder {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };
    lines.extend(
        card.content
            .lines()
            .map(|line| Line::from(Span::styled(format!("  {}", line), body_style))),
    );
    lines.push(Line::from(""));

    ListItem::new(Text::from(lines))
}

/// Render the itinerary page
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let view = app.state.itinerary_view();
    let title = if view.title.is_empty() {
        " Itinerary ".to_string()
    } else {
        format!(" {} ", view.title)
    };

    let block = Block::default()
        .title(title)
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL);

    if let Some(placeholder) = &view.placeholder {
        let paragraph = Paragraph::new(placeholder.as_str())
            .style(Style::default().fg(Color::DarkGray))
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = view.days.iter().map(card_item).collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("▶ ");

    let mut list_state = ListState::default().with_selected(Some(app.selected_day_index));
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Handle a key on the itinerary page
pub fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') | KeyCode::Home => app.selected_day_index = 0,
        KeyCode::Char('G') | KeyCode::End => {
            app.selected_day_index = app.day_count().saturating_sub(1);
        }
        KeyCode::Enter | KeyCode::Char('e') => app.edit_selected_day(),
        _ => {}
    }
}
