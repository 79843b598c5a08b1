//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the open
//! dialog, the visible page and the input mode.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveDialog, App, InputMode};
use super::dialogs;
use super::event::Event;
use super::views;
use crate::models::Page;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick | Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return Ok(());
    }

    match app.active_dialog {
        ActiveDialog::Help => {
            app.close_dialog();
            return Ok(());
        }
        ActiveDialog::DayEditor => {
            dialogs::day_editor::handle_key(app, key);
            return Ok(());
        }
        ActiveDialog::None => {}
    }

    match (app.page(), app.input_mode) {
        (Page::Setup, _) => views::setup::handle_key(app, key),
        (Page::Expense, InputMode::Editing) => views::expense::handle_editing_key(app, key),
        _ => handle_normal_key(app, key),
    }

    Ok(())
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
            return;
        }
        KeyCode::Char('?') => {
            app.open_dialog(ActiveDialog::Help);
            return;
        }
        KeyCode::Char(c @ '1'..='4') if app.state.navigator().nav_visible() => {
            let index = c as usize - '1' as usize;
            app.navigate(Page::NAV_ORDER[index]);
            return;
        }
        _ => {}
    }

    match app.page() {
        Page::Itinerary => views::itinerary::handle_key(app, key),
        Page::Expense => views::expense::handle_normal_key(app, key),
        Page::Setup | Page::Bonuses => {}
    }
}
