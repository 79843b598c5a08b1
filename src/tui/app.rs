//! Application state for the TUI
//!
//! The App struct wraps the shared [`AppState`] with everything only the
//! terminal front-end needs: focus, open dialogs, form buffers and the
//! status line.

use tracing::warn;

use crate::config::settings::Preferences;
use crate::error::TripResult;
use crate::models::Page;
use crate::state::{AppState, Message, Update};

use super::dialogs::day_editor::DayEditorState;
use super::views::expense::ExpenseFormState;
use super::views::setup::SetupFormState;

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    DayEditor,
}

/// Main application state
pub struct App {
    /// Shared trip state; every change goes through its dispatch
    pub state: AppState,

    /// Categories offered by the expense form
    pub categories: Vec<String>,

    pub should_quit: bool,

    pub input_mode: InputMode,

    pub active_dialog: ActiveDialog,

    pub setup_form: SetupFormState,

    pub expense_form: ExpenseFormState,

    pub day_editor: DayEditorState,

    /// Selected card on the itinerary page
    pub selected_day_index: usize,

    /// Status message to display
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App over loaded state
    pub fn new(state: AppState, preferences: &Preferences) -> Self {
        let mut app = Self {
            setup_form: SetupFormState::from_settings(state.settings()),
            expense_form: ExpenseFormState::new(preferences.default_category()),
            state,
            categories: preferences.expense_categories.clone(),
            should_quit: false,
            input_mode: InputMode::Normal,
            active_dialog: ActiveDialog::None,
            day_editor: DayEditorState::default(),
            selected_day_index: 0,
            status_message: None,
        };
        app.sync_input_mode();
        app
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn page(&self) -> Page {
        self.state.visible_page()
    }

    /// Dispatch a message, reporting failures on the status line
    pub fn dispatch(&mut self, message: Message) -> Option<Update> {
        match self.state.dispatch(message) {
            Ok(update) => Some(update),
            Err(e) => {
                self.report(&e);
                None
            }
        }
    }

    /// Dispatch a message and hand failures back to the caller
    pub fn try_dispatch(&mut self, message: Message) -> TripResult<Update> {
        self.state.dispatch(message).inspect_err(|e| {
            warn!(error = %e, "action rejected");
        })
    }

    fn report(&mut self, error: &crate::error::TripError) {
        warn!(error = %error, "action failed");
        self.set_status(error.to_string());
    }

    /// Press a navigation bar button
    pub fn navigate(&mut self, page: Page) {
        match self.dispatch(Message::Navigate(page)) {
            Some(Update::Ignored) => {
                self.set_status(format!("{} is not available yet", page.label()));
            }
            Some(_) => {
                self.clear_status();
                match page {
                    Page::Setup => {
                        self.setup_form = SetupFormState::from_settings(self.state.settings());
                    }
                    Page::Expense => {
                        self.expense_form.set_day(self.state.expense_day());
                    }
                    Page::Itinerary => self.clamp_day_selection(),
                    Page::Bonuses => {}
                }
                self.sync_input_mode();
            }
            None => {}
        }
    }

    /// The setup page is a form and always takes text input
    pub fn sync_input_mode(&mut self) {
        self.input_mode = if self.page() == Page::Setup {
            InputMode::Editing
        } else {
            InputMode::Normal
        };
    }

    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        self.active_dialog = dialog;
        if dialog == ActiveDialog::DayEditor {
            self.input_mode = InputMode::Editing;
        }
    }

    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
        self.sync_input_mode();
    }

    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    pub fn day_count(&self) -> usize {
        self.state.itinerary_view().days.len()
    }

    pub fn move_up(&mut self) {
        self.selected_day_index = self.selected_day_index.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.selected_day_index + 1 < self.day_count() {
            self.selected_day_index += 1;
        }
    }

    /// Keep the selection inside the rendered cards
    pub fn clamp_day_selection(&mut self) {
        let count = self.day_count();
        if self.selected_day_index >= count {
            self.selected_day_index = count.saturating_sub(1);
        }
    }

    /// Day number of the selected itinerary card
    pub fn selected_day(&self) -> Option<u32> {
        self.state
            .itinerary_view()
            .days
            .get(self.selected_day_index)
            .map(|card| card.day)
    }

    /// Open the editor on the selected card
    pub fn edit_selected_day(&mut self) {
        let card = self
            .state
            .itinerary_view()
            .days
            .get(self.selected_day_index)
            .cloned();
        if let Some(card) = card {
            self.day_editor = DayEditorState::for_card(&card);
            self.open_dialog(ActiveDialog::DayEditor);
        }
    }

    /// Show another day's ledger on the expense page
    pub fn select_expense_day(&mut self, day: u32) {
        if self.dispatch(Message::SelectExpenseDay(day)).is_some() {
            self.expense_form.set_day(day);
            self.clear_status();
        }
    }

    pub fn next_expense_day(&mut self) {
        let day = self.state.expense_day().saturating_add(1);
        self.select_expense_day(day);
    }

    pub fn prev_expense_day(&mut self) {
        let day = self.state.expense_day();
        if day > 1 {
            self.select_expense_day(day - 1);
        }
    }
}
