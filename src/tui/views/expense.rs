//! Expense page
//!
//! Entry form on top, the selected day's ledger below.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::display::format_day_heading;
use crate::models::ExpenseForm;
use crate::state::{Message, Update};
use crate::tui::app::{App, InputMode};
use crate::tui::layout::ExpenseLayout;
use crate::tui::widgets::TextInput;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseField {
    Day,
    #[default]
    Description,
    Amount,
    Category,
}

impl ExpenseField {
    pub fn next(self) -> Self {
        match self {
            Self::Day => Self::Description,
            Self::Description => Self::Amount,
            Self::Amount => Self::Category,
            Self::Category => Self::Day,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Day => Self::Category,
            Self::Description => Self::Day,
            Self::Amount => Self::Description,
            Self::Category => Self::Amount,
        }
    }
}

/// State for the expense entry form
#[derive(Debug, Clone)]
pub struct ExpenseFormState {
    pub focused_field: ExpenseField,
    pub day_input: TextInput,
    pub description_input: TextInput,
    pub amount_input: TextInput,
    pub category_input: TextInput,
    pub error_message: Option<String>,
}

impl ExpenseFormState {
    pub fn new(default_category: &str) -> Self {
        Self {
            focused_field: ExpenseField::Description,
            day_input: TextInput::new().label("Day").content("1"),
            description_input: TextInput::new()
                .label("Description")
                .placeholder("What was it?"),
            amount_input: TextInput::new().label("Amount").placeholder("e.g. 1200"),
            category_input: TextInput::new()
                .label("Category")
                .content(default_category),
            error_message: None,
        }
    }

    pub fn set_day(&mut self, day: u32) {
        self.day_input.set_value(day.to_string());
    }

    /// Give focus to a field, or clear all focus with `None`
    pub fn set_focus(&mut self, field: Option<ExpenseField>) {
        if let Some(field) = field {
            self.focused_field = field;
        }
        self.day_input.focused = field == Some(ExpenseField::Day);
        self.description_input.focused = field == Some(ExpenseField::Description);
        self.amount_input.focused = field == Some(ExpenseField::Amount);
        self.category_input.focused = field == Some(ExpenseField::Category);
    }

    pub fn focused_input(&mut self) -> &mut TextInput {
        match self.focused_field {
            ExpenseField::Day => &mut self.day_input,
            ExpenseField::Description => &mut self.description_input,
            ExpenseField::Amount => &mut self.amount_input,
            ExpenseField::Category => &mut self.category_input,
        }
    }

    /// Step through the configured categories
    pub fn cycle_category(&mut self, categories: &[String], forward: bool) {
        if categories.is_empty() {
            return;
        }
        let current = categories
            .iter()
            .position(|c| c == self.category_input.value());
        let next = match (current, forward) {
            (None, _) => 0,
            (Some(i), true) => (i + 1) % categories.len(),
            (Some(i), false) => (i + categories.len() - 1) % categories.len(),
        };
        self.category_input.set_value(categories[next].clone());
    }

    pub fn to_form(&self) -> ExpenseForm {
        ExpenseForm::new(
            self.day_input.value(),
            self.description_input.value(),
            self.amount_input.value(),
            self.category_input.value(),
        )
    }
}

/// Render the expense page
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let layout = ExpenseLayout::new(area);
    render_form(frame, app, layout.form);
    render_ledger(frame, app, layout.ledger);
}

fn render_form(frame: &mut Frame, app: &App, area: Rect) {
    let editing = app.input_mode == InputMode::Editing;
    let border = if editing { Color::Cyan } else { Color::White };
    let block = Block::default()
        .title(" Add expense ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1); 4])
        .split(inner);
    let halves = |row: Rect| {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(row)
    };

    let form = &app.expense_form;
    let top = halves(rows[0]);
    frame.render_widget(form.day_input.clone(), top[0]);
    frame.render_widget(form.category_input.clone(), top[1]);
    frame.render_widget(form.description_input.clone(), rows[1]);
    frame.render_widget(form.amount_input.clone(), rows[2]);

    if let Some(error) = &form.error_message {
        frame.render_widget(
            Paragraph::new(error.as_str()).style(Style::default().fg(Color::Red)),
            rows[3],
        );
    }
}

fn render_ledger(frame: &mut Frame, app: &App, area: Rect) {
    let view = app.state.ledger_view();
    let date = app.state.settings().and_then(|s| s.date_of_day(view.day));
    let heading = format!(" {} ", format_day_heading(view.day, date));

    let block = Block::default()
        .title(heading)
        .title_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let items: Vec<ListItem> = if view.is_empty() {
        vec![ListItem::new(Span::styled(
            "No expenses for this day",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        view.lines
            .iter()
            .map(|line| ListItem::new(line.text.as_str()))
            .collect()
    };
    frame.render_widget(List::new(items), chunks[0]);

    let total = Line::from(vec![
        Span::styled("Total: ", Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(
            view.total_display.as_str(),
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(total), chunks[1]);
}

/// Handle a key on the expense page outside the form
pub fn handle_normal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('a') | KeyCode::Char('i') => {
            app.expense_form.set_focus(Some(ExpenseField::Description));
            app.input_mode = InputMode::Editing;
        }
        KeyCode::Char('l') | KeyCode::Char(']') | KeyCode::Right => app.next_expense_day(),
        KeyCode::Char('h') | KeyCode::Char('[') | KeyCode::Left => app.prev_expense_day(),
        _ => {}
    }
}

/// Handle a key while the expense form has focus
pub fn handle_editing_key(app: &mut App, key: KeyEvent) {
    let form = &mut app.expense_form;

    match key.code {
        KeyCode::Esc => {
            form.set_focus(None);
            form.error_message = None;
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Tab => {
            let next = form.focused_field.next();
            form.set_focus(Some(next));
        }
        KeyCode::BackTab => {
            let prev = form.focused_field.prev();
            form.set_focus(Some(prev));
        }
        KeyCode::Up | KeyCode::Down if form.focused_field == ExpenseField::Category => {
            let forward = key.code == KeyCode::Down;
            form.cycle_category(&app.categories, forward);
        }
        KeyCode::Enter => submit(app),
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
    let form = app.expense_form.to_form();
    match app.try_dispatch(Message::SubmitExpense(form)) {
        Ok(Update::ExpenseAdded(expense)) => {
            let default_category = app
                .categories
                .first()
                .cloned()
                .unwrap_or_else(|| "Other".to_string());
            let form = &mut app.expense_form;
            form.set_day(expense.day);
            form.description_input.clear();
            form.amount_input.clear();
            form.category_input.set_value(default_category);
            form.set_focus(Some(ExpenseField::Description));
            app.set_status(format!("Added {} to Day {}", expense.description, expense.day));
        }
        Ok(_) => {}
        Err(e) => app.expense_form.error_message = Some(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_category_wraps() {
        let categories: Vec<String> = ["Food", "Transport", "Other"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let mut form = ExpenseFormState::new("Food");

        form.cycle_category(&categories, false);
        assert_eq!(form.category_input.value(), "Other");
        form.cycle_category(&categories, true);
        assert_eq!(form.category_input.value(), "Food");

        form.category_input.set_value("Souvenirs");
        form.cycle_category(&categories, true);
        assert_eq!(form.category_input.value(), "Food");
    }

    #[test]
    fn test_to_form_keeps_raw_values() {
        let mut form = ExpenseFormState::new("Food");
        form.set_day(2);
        form.description_input.set_value("Ramen");
        form.amount_input.set_value("1,200");

        assert_eq!(form.to_form(), ExpenseForm::new("2", "Ramen", "1,200", "Food"));
    }
}
