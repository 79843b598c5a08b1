//! Application state and message dispatch
//!
//! Every user action is a [`Message`] handled by [`AppState::dispatch`], which
//! reads the current state, updates it through the services and re-renders
//! the affected view. Front-ends (CLI and TUI) only build messages and draw
//! the views this state exposes.

use tracing::debug;

use crate::config::settings::Preferences;
use crate::error::{TripError, TripResult};
use crate::models::{Expense, ExpenseForm, ItineraryDetails, Page, SetupForm, TripSettings};
use crate::services::{
    ItineraryService, ItineraryView, LedgerService, LedgerView, Navigator, TripService,
    Transition,
};
use crate::storage::Storage;

/// A discrete user action
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Application start
    PageLoad,
    /// Setup form submitted
    SubmitSetup(SetupForm),
    /// Navigation bar button pressed
    Navigate(Page),
    /// A day's editor lost focus with this content
    EditDay { day: u32, content: String },
    /// Expense form submitted
    SubmitExpense(ExpenseForm),
    /// Another day picked on the expense page
    SelectExpenseDay(u32),
}

/// What a dispatched message did
#[derive(Debug, Clone, PartialEq)]
pub enum Update {
    /// State changed and views were refreshed
    Rendered,
    /// The message was ignored
    Ignored,
    /// Trip settings were saved
    SettingsSaved(TripSettings),
    /// A day's notes were saved
    DaySaved(u32),
    /// An expense was appended
    ExpenseAdded(Expense),
}

/// Explicit application state shared by all front-ends
pub struct AppState {
    storage: Storage,
    currency_suffix: String,
    settings: Option<TripSettings>,
    itinerary: ItineraryDetails,
    itinerary_view: ItineraryView,
    ledger_view: LedgerView,
    expense_day: u32,
    navigator: Navigator,
}

impl AppState {
    /// Create state over a storage backend; call with [`Message::PageLoad`] next
    pub fn new(storage: Storage, preferences: &Preferences) -> Self {
        Self {
            storage,
            currency_suffix: preferences.currency_suffix.clone(),
            settings: None,
            itinerary: ItineraryDetails::new(),
            itinerary_view: ItineraryView::build(None, &ItineraryDetails::new()),
            ledger_view: LedgerView::default(),
            expense_day: 1,
            navigator: Navigator::new(),
        }
    }

    /// Create state and run the start-up message
    pub fn load(storage: Storage, preferences: &Preferences) -> TripResult<Self> {
        let mut state = Self::new(storage, preferences);
        state.dispatch(Message::PageLoad)?;
        Ok(state)
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    pub fn settings(&self) -> Option<&TripSettings> {
        self.settings.as_ref()
    }

    pub fn itinerary(&self) -> &ItineraryDetails {
        &self.itinerary
    }

    pub fn itinerary_view(&self) -> &ItineraryView {
        &self.itinerary_view
    }

    pub fn ledger_view(&self) -> &LedgerView {
        &self.ledger_view
    }

    /// Value of the expense form's day field
    pub fn expense_day(&self) -> u32 {
        self.expense_day
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn visible_page(&self) -> Page {
        self.navigator.visible()
    }

    pub fn currency_suffix(&self) -> &str {
        &self.currency_suffix
    }

    /// Handle one message to completion
    pub fn dispatch(&mut self, message: Message) -> TripResult<Update> {
        debug!(?message, "dispatch");
        match message {
            Message::PageLoad => self.page_load(),
            Message::SubmitSetup(form) => self.submit_setup(&form),
            Message::Navigate(page) => self.navigate(page),
            Message::EditDay { day, content } => self.edit_day(day, content),
            Message::SubmitExpense(form) => self.submit_expense(&form),
            Message::SelectExpenseDay(day) => self.select_expense_day(day),
        }
    }

    fn page_load(&mut self) -> TripResult<Update> {
        self.settings = TripService::new(&self.storage).restore()?;

        if self.settings.is_some() {
            self.render_itinerary()?;
            self.navigator.navigate(Page::Itinerary);
        } else {
            self.navigator.navigate(Page::Setup);
        }
        Ok(Update::Rendered)
    }

    fn submit_setup(&mut self, form: &SetupForm) -> TripResult<Update> {
        let settings = TripService::new(&self.storage).apply_form(form)?;
        self.settings = Some(settings.clone());

        self.render_itinerary()?;
        self.navigator.navigate(Page::Itinerary);
        Ok(Update::SettingsSaved(settings))
    }

    fn navigate(&mut self, page: Page) -> TripResult<Update> {
        match self.navigator.navigate(page) {
            Transition::Ignored => Ok(Update::Ignored),
            Transition::Shown(Page::Expense) => {
                self.expense_day = 1;
                self.render_ledger(1)?;
                Ok(Update::Rendered)
            }
            Transition::Shown(_) => Ok(Update::Rendered),
        }
    }

    fn edit_day(&mut self, day: u32, content: String) -> TripResult<Update> {
        let displayed = self
            .settings
            .as_ref()
            .is_some_and(|settings| settings.contains_day(day));
        if !displayed {
            return Err(TripError::day_not_found(day));
        }

        ItineraryService::new(&self.storage).save_day(&mut self.itinerary, day, content)?;
        self.itinerary_view = ItineraryView::build(self.settings.as_ref(), &self.itinerary);
        Ok(Update::DaySaved(day))
    }

    fn submit_expense(&mut self, form: &ExpenseForm) -> TripResult<Update> {
        let draft = form.parse()?;
        let expense = LedgerService::new(&self.storage).append(draft)?;

        self.expense_day = expense.day;
        self.render_ledger(expense.day)?;
        Ok(Update::ExpenseAdded(expense))
    }

    fn select_expense_day(&mut self, day: u32) -> TripResult<Update> {
        if day == 0 {
            return Err(TripError::Validation("Days start at 1".into()));
        }
        self.expense_day = day;
        self.render_ledger(day)?;
        Ok(Update::Rendered)
    }

    fn render_itinerary(&mut self) -> TripResult<()> {
        let (details, view) =
            ItineraryService::new(&self.storage).render(self.settings.as_ref())?;
        self.itinerary = details;
        self.itinerary_view = view;
        Ok(())
    }

    fn render_ledger(&mut self, day: u32) -> TripResult<()> {
        self.ledger_view = LedgerService::new(&self.storage).render(day, &self.currency_suffix)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::TripPaths;
    use tempfile::TempDir;

    fn prefs() -> Preferences {
        Preferences {
            currency_suffix: String::new(),
            ..Preferences::default()
        }
    }

    fn fresh_state() -> AppState {
        AppState::load(Storage::in_memory(), &prefs()).unwrap()
    }

    fn tokyo_form() -> SetupForm {
        SetupForm::new("Tokyo", "2024-04-01", "3")
    }

    #[test]
    fn test_first_start_shows_setup() {
        let state = fresh_state();
        assert_eq!(state.visible_page(), Page::Setup);
        assert!(!state.navigator().nav_visible());
        assert!(state.settings().is_none());
        assert!(state.itinerary_view().placeholder.is_some());
    }

    #[test]
    fn test_setup_submit_renders_itinerary() {
        let mut state = fresh_state();

        let update = state.dispatch(Message::SubmitSetup(tokyo_form())).unwrap();
        assert!(matches!(update, Update::SettingsSaved(_)));

        assert_eq!(state.visible_page(), Page::Itinerary);
        assert_eq!(state.navigator().active_nav(), Some(Page::Itinerary));
        let headings: Vec<&str> = state
            .itinerary_view()
            .days
            .iter()
            .map(|c| c.heading.as_str())
            .collect();
        assert_eq!(headings, vec!["Day 1 (4/1)", "Day 2 (4/2)", "Day 3 (4/3)"]);
        assert_eq!(state.itinerary_view().title, "Tokyo · 3-day itinerary");
    }

    #[test]
    fn test_invalid_setup_keeps_page() {
        let mut state = fresh_state();
        let err = state
            .dispatch(Message::SubmitSetup(SetupForm::new("Tokyo", "", "x")))
            .unwrap_err();
        assert!(err.is_validation());
        assert_eq!(state.visible_page(), Page::Setup);
    }

    #[test]
    fn test_returning_user_skips_setup() {
        let temp_dir = TempDir::new().unwrap();
        let paths = TripPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut state = AppState::load(Storage::open(&paths).unwrap(), &prefs()).unwrap();
        state.dispatch(Message::SubmitSetup(tokyo_form())).unwrap();
        state
            .dispatch(Message::EditDay {
                day: 2,
                content: "<p>Ghibli museum</p>".into(),
            })
            .unwrap();

        let reloaded = AppState::load(Storage::open(&paths).unwrap(), &prefs()).unwrap();
        assert_eq!(reloaded.visible_page(), Page::Itinerary);
        assert_eq!(reloaded.settings().unwrap().destination, "Tokyo");
        assert_eq!(
            reloaded.itinerary_view().days[1].content,
            "<p>Ghibli museum</p>"
        );
    }

    #[test]
    fn test_edit_day_updates_view_and_store() {
        let mut state = fresh_state();
        state.dispatch(Message::SubmitSetup(tokyo_form())).unwrap();

        let update = state
            .dispatch(Message::EditDay {
                day: 1,
                content: "Tsukiji".into(),
            })
            .unwrap();

        assert_eq!(update, Update::DaySaved(1));
        assert_eq!(state.itinerary_view().days[0].content, "Tsukiji");
        assert_eq!(state.storage().load_itinerary().unwrap().get(1), Some("Tsukiji"));
    }

    #[test]
    fn test_edit_day_outside_trip_is_rejected() {
        let mut state = fresh_state();
        let err = state
            .dispatch(Message::EditDay {
                day: 1,
                content: "x".into(),
            })
            .unwrap_err();
        assert!(err.is_not_found());

        state.dispatch(Message::SubmitSetup(tokyo_form())).unwrap();
        assert!(state
            .dispatch(Message::EditDay {
                day: 4,
                content: "x".into(),
            })
            .is_err());
    }

    #[test]
    fn test_expense_scenario() {
        let mut state = fresh_state();
        state.dispatch(Message::SubmitSetup(tokyo_form())).unwrap();
        state.dispatch(Message::Navigate(Page::Expense)).unwrap();

        state
            .dispatch(Message::SubmitExpense(ExpenseForm::new("1", "Ramen", "1200", "Food")))
            .unwrap();
        let update = state
            .dispatch(Message::SubmitExpense(ExpenseForm::new(
                "1",
                "Train",
                "300",
                "Transport",
            )))
            .unwrap();

        assert!(matches!(update, Update::ExpenseAdded(ref e) if e.description == "Train"));
        assert_eq!(state.ledger_view().total_display, "1,500");
        assert_eq!(state.ledger_view().day, 1);
        assert_eq!(state.ledger_view().lines.len(), 2);
    }

    #[test]
    fn test_day_total_omits_currency_suffix() {
        let mut state = AppState::load(Storage::in_memory(), &Preferences::default()).unwrap();
        state.dispatch(Message::SubmitSetup(tokyo_form())).unwrap();
        state.dispatch(Message::Navigate(Page::Expense)).unwrap();

        state
            .dispatch(Message::SubmitExpense(ExpenseForm::new("1", "Ramen", "1200", "Food")))
            .unwrap();
        state
            .dispatch(Message::SubmitExpense(ExpenseForm::new("1", "Train", "300", "Transport")))
            .unwrap();

        let view = state.ledger_view();
        assert_eq!(view.lines[0].text, "[Food] Ramen: 1,200 円");
        assert_eq!(view.total_display, "1,500");
    }

    #[test]
    fn test_null_amount_on_another_day_keeps_ledger_readable() {
        let storage = Storage::in_memory();
        storage
            .store()
            .set_item(
                crate::storage::EXPENSES_KEY,
                r#"[
                    {"id":1,"day":1,"description":"Ramen","amount":1200,"category":"Food"},
                    {"id":2,"day":2,"description":"Lost receipt","amount":null,"category":"Other"}
                ]"#,
            )
            .unwrap();
        let mut state = AppState::load(storage, &prefs()).unwrap();

        state.dispatch(Message::Navigate(Page::Expense)).unwrap();
        assert_eq!(state.ledger_view().total_display, "1,200");

        state.dispatch(Message::SelectExpenseDay(2)).unwrap();
        assert_eq!(state.ledger_view().lines.len(), 1);
        assert_eq!(state.ledger_view().total_display, "NaN");
    }

    #[test]
    fn test_expense_submit_renders_that_day() {
        let mut state = fresh_state();
        state.dispatch(Message::Navigate(Page::Expense)).unwrap();

        state
            .dispatch(Message::SubmitExpense(ExpenseForm::new("3", "Onsen", "2500", "Sightseeing")))
            .unwrap();

        assert_eq!(state.expense_day(), 3);
        assert_eq!(state.ledger_view().day, 3);
        assert_eq!(state.ledger_view().total, 2500.0);
    }

    #[test]
    fn test_entering_expense_page_resets_to_day_one() {
        let mut state = fresh_state();
        state.dispatch(Message::SubmitSetup(tokyo_form())).unwrap();
        state.dispatch(Message::Navigate(Page::Expense)).unwrap();
        state.dispatch(Message::SelectExpenseDay(3)).unwrap();
        assert_eq!(state.ledger_view().day, 3);

        state.dispatch(Message::Navigate(Page::Itinerary)).unwrap();
        state.dispatch(Message::Navigate(Page::Expense)).unwrap();

        assert_eq!(state.expense_day(), 1);
        assert_eq!(state.ledger_view().day, 1);
    }

    #[test]
    fn test_bonuses_click_is_ignored() {
        let mut state = fresh_state();
        state.dispatch(Message::SubmitSetup(tokyo_form())).unwrap();
        state.dispatch(Message::Navigate(Page::Expense)).unwrap();

        let update = state.dispatch(Message::Navigate(Page::Bonuses)).unwrap();

        assert_eq!(update, Update::Ignored);
        assert_eq!(state.visible_page(), Page::Expense);
        assert_eq!(state.navigator().active_nav(), Some(Page::Expense));
    }

    #[test]
    fn test_select_day_zero_is_rejected() {
        let mut state = fresh_state();
        assert!(state.dispatch(Message::SelectExpenseDay(0)).is_err());
    }

    #[test]
    fn test_bad_amount_is_rejected_without_writing() {
        let mut state = fresh_state();
        let err = state
            .dispatch(Message::SubmitExpense(ExpenseForm::new("1", "Ramen", "abc", "Food")))
            .unwrap_err();
        assert!(err.is_validation());
        assert!(state.storage().load_expenses().unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_settings_fail_page_load() {
        let storage = Storage::in_memory();
        storage
            .store()
            .set_item(crate::storage::SETTINGS_KEY, "{{")
            .unwrap();

        let result = AppState::load(storage, &prefs());
        assert!(matches!(result, Err(TripError::Storage(_))));
    }
}
