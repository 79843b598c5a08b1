//! TUI Views module
//!
//! Contains the setup, itinerary and expense pages, plus the navigation bar
//! and status bar.

pub mod expense;
pub mod itinerary;
pub mod nav_bar;
pub mod setup;
pub mod status_bar;

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;
use crate::models::Page;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area(), app.state.navigator().nav_visible());

    if app.state.navigator().nav_visible() {
        nav_bar::render(frame, app, layout.nav_bar);
    }

    match app.page() {
        Page::Setup => setup::render(frame, app, layout.page),
        Page::Itinerary => itinerary::render(frame, app, layout.page),
        Page::Expense => expense::render(frame, app, layout.page),
        Page::Bonuses => render_placeholder(frame, layout.page, Page::Bonuses.label()),
    }

    status_bar::render(frame, app, layout.status_bar);

    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame, app),
        ActiveDialog::DayEditor => dialogs::day_editor::render(frame, app),
        ActiveDialog::None => {}
    }
}

fn render_placeholder(frame: &mut Frame, area: Rect, name: &str) {
    let block = Block::default()
        .title(name)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let text = Paragraph::new(format!("{} - coming soon", name))
        .block(block)
        .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(text, area);
}
