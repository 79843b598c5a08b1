//! Setup page
//!
//! Form for the destination, start date and number of days. Submitting it
//! saves the settings and moves on to the itinerary.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::{SetupForm, TripSettings};
use crate::state::{Message, Update};
use crate::tui::app::App;
use crate::tui::widgets::TextInput;

/// Which field is currently focused in the setup form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SetupField {
    #[default]
    Destination,
    StartDate,
    Duration,
}

impl SetupField {
    pub fn next(self) -> Self {
        match self {
            Self::Destination => Self::StartDate,
            Self::StartDate => Self::Duration,
            Self::Duration => Self::Destination,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Destination => Self::Duration,
            Self::StartDate => Self::Destination,
            Self::Duration => Self::StartDate,
        }
    }
}

/// State for the setup form
#[derive(Debug, Clone)]
pub struct SetupFormState {
    pub focused_field: SetupField,
    pub destination_input: TextInput,
    pub start_date_input: TextInput,
    pub duration_input: TextInput,
    pub error_message: Option<String>,
}

impl SetupFormState {
    /// Pre-fill from saved settings, or start blank
    pub fn from_settings(settings: Option<&TripSettings>) -> Self {
        let form = settings.map(SetupForm::from_settings).unwrap_or_default();
        let mut state = Self {
            focused_field: SetupField::Destination,
            destination_input: TextInput::new()
                .label("Destination")
                .placeholder("Where are you going?")
                .content(form.destination),
            start_date_input: TextInput::new()
                .label("Start date")
                .placeholder("YYYY-MM-DD (optional)")
                .content(form.start_date),
            duration_input: TextInput::new()
                .label("Days")
                .placeholder("Number of days")
                .content(form.duration),
            error_message: None,
        };
        state.update_focus();
        state
    }

    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
        self.update_focus();
    }

    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
        self.update_focus();
    }

    fn update_focus(&mut self) {
        self.destination_input.focused = self.focused_field == SetupField::Destination;
        self.start_date_input.focused = self.focused_field == SetupField::StartDate;
        self.duration_input.focused = self.focused_field == SetupField::Duration;
    }

    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focused_field {
            SetupField::Destination => &mut self.destination_input,
            SetupField::StartDate => &mut self.start_date_input,
            SetupField::Duration => &mut self.duration_input,
        }
    }

    /// Raw values as submitted
    pub fn to_form(&self) -> SetupForm {
        SetupForm::new(
            self.destination_input.value(),
            self.start_date_input.value(),
            self.duration_input.value(),
        )
    }
}

/// Render the setup page
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Plan a trip ")
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
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    let form = &app.setup_form;
    frame.render_widget(form.destination_input.clone(), chunks[0]);
    frame.render_widget(form.start_date_input.clone(), chunks[1]);
    frame.render_widget(form.duration_input.clone(), chunks[2]);

    if let Some(error) = &form.error_message {
        frame.render_widget(
            Paragraph::new(error.as_str()).style(Style::default().fg(Color::Red)),
            chunks[4],
        );
    }

    let hint = Line::from(vec![
        Span::styled("Enter", Style::default().fg(Color::Cyan)),
        Span::raw(" save  "),
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::raw(" next field"),
    ]);
    frame.render_widget(Paragraph::new(hint), chunks[5]);
}

/// Handle a key while the setup form has focus
pub fn handle_key(app: &mut App, key: KeyEvent) {
    let form = &mut app.setup_form;

    match key.code {
        KeyCode::Tab | KeyCode::Down => form.next_field(),
        KeyCode::BackTab | KeyCode::Up => form.prev_field(),
        KeyCode::Enter => submit(app),
        KeyCode::Esc => {
            // Leaving the form is only possible once a trip exists
            if app.state.settings().is_some() {
                app.navigate(crate::models::Page::Itinerary);
            }
        }
        KeyCode::Backspace => {
            form.error_message = None;
            form.focused_input().backspace();
        }
        KeyCode::Delete => form.focused_input().delete(),
        KeyCode::Left => form.focused_input().move_left(),
        KeyCode::Right => form.focused_input().move_right(),
        KeyCode::Home => form.focused_input().move_start(),
        KeyCode::End => form.focused_input().move_end(),
        KeyCode::Char(c) => {
            form.error_message = None;
            form.focused_input().insert(c);
        }
        _ => {}
    }
}

fn submit(app: &mut App) {
    let form = app.setup_form.to_form();
    match app.try_dispatch(Message::SubmitSetup(form)) {
        Ok(Update::SettingsSaved(settings)) => {
            app.selected_day_index = 0;
            app.set_status(format!("Saved {}", settings.title()));
            app.sync_input_mode();
        }
        Ok(_) => app.sync_input_mode(),
        Err(e) => app.setup_form.error_message = Some(e.to_string()),
    }
}
