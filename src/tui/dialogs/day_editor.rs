//! Day editor dialog
//!
//! Edits one itinerary day. Closing the dialog is the editor losing focus,
//! so both Enter and Esc save what was typed.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::services::DayCard;
use crate::state::{Message, Update};
use crate::tui::app::App;
use crate::tui::layout::centered_rect;
use crate::tui::widgets::TextInput;

/// State for the day editor
#[derive(Debug, Clone, Default)]
pub struct DayEditorState {
    pub day: u32,
    pub heading: String,
    pub input: TextInput,
}

impl DayEditorState {
    /// Seed the editor from a card; the placeholder is shown, not edited
    pub fn for_card(card: &DayCard) -> Self {
        let mut input = TextInput::new()
            .placeholder(card.content.clone())
            .content(card.editable_content());
        input.focused = true;
        Self {
            day: card.day,
            heading: card.heading.clone(),
            input,
        }
    }
}

/// Render the day editor
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = centered_rect(70, 30, frame.area());
    frame.render_widget(Clear, area);

    let editor = &app.day_editor;
    let block = Block::default()
        .title(format!(" {} ", editor.heading))
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner);

    frame.render_widget(editor.input.clone(), chunks[0]);
    frame.render_widget(
        Paragraph::new("Enter/Esc: save and close").style(Style::default().fg(Color::DarkGray)),
        chunks[2],
    );
}

/// Handle a key while the editor is open
pub fn handle_key(app: &mut App, key: KeyEvent) {
    let input = &mut app.day_editor.input;

    match key.code {
        KeyCode::Enter | KeyCode::Esc => blur(app),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Delete => input.delete(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.move_start(),
        KeyCode::End => input.move_end(),
        KeyCode::Char(c) => input.insert(c),
        _ => {}
    }
}

/// Save the editor content and close
fn blur(app: &mut App) {
    let day = app.day_editor.day;
    let content = app.day_editor.input.value().to_string();
    app.close_dialog();

    if let Some(Update::DaySaved(day)) = app.dispatch(Message::EditDay { day, content }) {
        app.set_status(format!("Saved Day {}", day));
    }
}
