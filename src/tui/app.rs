//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events:
//! the form inputs, the session history log, the last advice text, and
//! transient status messages.

use std::path::Path;
use std::time::Instant;

use chrono::Local;
use tracing::info;

use crate::config::Settings;
use crate::error::BudgetResult;
use crate::export::{export_history_to_path, DEFAULT_EXPORT_FILENAME};
use crate::models::{categories_for, HistoryLog, HistoryRecord, Mode};
use crate::services::{AdviceService, BudgetState, BudgetSummary};

use super::widgets::AmountInput;

/// How long a status message stays on screen
const STATUS_SECS: u64 = 5;

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    Help,
    Advice,
}

/// Severity of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl StatusLevel {
    /// Get the color for this level
    pub fn color(&self) -> ratatui::style::Color {
        use ratatui::style::Color;
        match self {
            Self::Info => Color::Blue,
            Self::Success => Color::Green,
            Self::Warning => Color::Yellow,
            Self::Error => Color::Red,
        }
    }
}

/// A transient message shown in the status bar
#[derive(Debug, Clone)]
pub struct StatusMessage {
    pub text: String,
    pub level: StatusLevel,
    created_at: Instant,
}

/// Main application state
pub struct App<'a> {
    /// Application settings
    pub settings: &'a Settings,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Current budgeting mode
    pub mode: Mode,

    /// Budget amount input
    pub budget_input: AmountInput,

    /// Savings goal input
    pub goal_input: AmountInput,

    /// One amount input per category of the active set
    pub category_inputs: Vec<AmountInput>,

    /// Focused field: 0 = budget, 1 = goal, 2.. = categories
    pub focus: usize,

    /// Session history log (append-only, discarded on exit)
    pub history: HistoryLog,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Last advice text received, shown in the advice dialog
    pub advice_text: Option<String>,

    /// Scroll offset inside the advice dialog
    pub advice_scroll: u16,

    /// Status message to display
    pub status_message: Option<StatusMessage>,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(settings: &'a Settings) -> Self {
        let mode = settings.default_mode;
        let mut app = Self {
            settings,
            should_quit: false,
            mode,
            budget_input: AmountInput::new("Budget"),
            goal_input: AmountInput::new("Savings Goal"),
            category_inputs: Vec::new(),
            focus: 0,
            history: HistoryLog::new(),
            active_dialog: ActiveDialog::default(),
            advice_text: None,
            advice_scroll: 0,
            status_message: None,
        };
        app.rebuild_category_inputs();
        app.update_focus_flags();
        app
    }

    /// Number of focusable fields
    pub fn field_count(&self) -> usize {
        2 + self.category_inputs.len()
    }

    /// Move focus to the next field
    pub fn focus_next(&mut self) {
        self.focus = (self.focus + 1) % self.field_count();
        self.update_focus_flags();
    }

    /// Move focus to the previous field
    pub fn focus_prev(&mut self) {
        let count = self.field_count();
        self.focus = (self.focus + count - 1) % count;
        self.update_focus_flags();
    }

    /// The currently focused input
    pub fn focused_input_mut(&mut self) -> &mut AmountInput {
        match self.focus {
            0 => &mut self.budget_input,
            1 => &mut self.goal_input,
            i => &mut self.category_inputs[i - 2],
        }
    }

    /// Input step for the focused field, in whole rupees
    ///
    /// Budget and goal step by the mode's quantum; category amounts always
    /// step by 500.
    pub fn focused_step(&self) -> i64 {
        match self.focus {
            0 | 1 => self.mode.step(),
            _ => 500,
        }
    }

    /// Toggle between Monthly and Semester
    ///
    /// The category set changes, so category amounts are cleared; the typed
    /// budget and goal are kept.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.rebuild_category_inputs();
        if self.focus >= self.field_count() {
            self.focus = 0;
        }
        self.update_focus_flags();
    }

    /// Read the current form state
    pub fn current_state(&self) -> BudgetState {
        let mut state = BudgetState::new(self.mode, self.budget_input.amount(), self.goal_input.amount());
        for (i, input) in self.category_inputs.iter().enumerate() {
            // Inputs are digits-only, so the amount is always non-negative
            let _ = state.expenses.set_at(i, input.amount());
        }
        state
    }

    /// Evaluate the calculator over the current form state
    pub fn evaluate(&self) -> BudgetResult<BudgetSummary> {
        BudgetSummary::compute(&self.current_state())
    }

    /// Save the current evaluation as a history snapshot
    pub fn save_snapshot(&mut self) {
        match self.evaluate() {
            Ok(summary) => {
                self.history.push(HistoryRecord {
                    date: Local::now().date_naive(),
                    mode: summary.mode,
                    budget: summary.budget,
                    total: summary.total,
                    remaining: summary.remaining,
                    goal: summary.goal,
                });
                info!(snapshots = self.history.len(), "snapshot saved");
                self.set_status(StatusLevel::Success, "Snapshot saved");
            }
            Err(e) => self.set_status(StatusLevel::Error, e.to_string()),
        }
    }

    /// Export the history log to `expenses.csv` in the current directory
    pub fn export_history(&mut self) {
        if self.history.is_empty() {
            self.set_status(StatusLevel::Warning, "No snapshots to export");
            return;
        }
        match export_history_to_path(&self.history, Path::new(DEFAULT_EXPORT_FILENAME)) {
            Ok(()) => self.set_status(
                StatusLevel::Success,
                format!("Exported {} snapshot(s) to {}", self.history.len(), DEFAULT_EXPORT_FILENAME),
            ),
            Err(e) => self.set_status(StatusLevel::Error, e.to_string()),
        }
    }

    /// Request AI tips for the current evaluation (blocking, single attempt)
    pub fn request_advice(&mut self) {
        let summary = match self.evaluate() {
            Ok(summary) => summary,
            Err(e) => {
                self.set_status(StatusLevel::Error, e.to_string());
                return;
            }
        };

        let service = match AdviceService::from_settings(self.settings) {
            Ok(service) => service,
            Err(e) => {
                // ConfigurationError: feature disabled, no call attempted
                self.set_status(StatusLevel::Warning, e.to_string());
                return;
            }
        };

        self.set_status(StatusLevel::Info, "Fetching tips...");
        match service.request_tips(&summary, &self.current_state().expenses) {
            Ok(text) => {
                self.advice_text = Some(text);
                self.advice_scroll = 0;
                self.active_dialog = ActiveDialog::Advice;
                self.status_message = None;
            }
            Err(e) => {
                // Single attempt; warn with the raw detail and carry on
                self.set_status(StatusLevel::Warning, format!("Unable to fetch tips. {}", e));
            }
        }
    }

    /// Set a status message
    pub fn set_status(&mut self, level: StatusLevel, text: impl Into<String>) {
        self.status_message = Some(StatusMessage {
            text: text.into(),
            level,
            created_at: Instant::now(),
        });
    }

    /// Drop the status message once it has been on screen long enough
    pub fn expire_status(&mut self) {
        if let Some(message) = &self.status_message {
            if message.created_at.elapsed().as_secs() >= STATUS_SECS {
                self.status_message = None;
            }
        }
    }

    /// Whether a dialog is open
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Close any open dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    fn rebuild_category_inputs(&mut self) {
        self.category_inputs = categories_for(self.mode)
            .iter()
            .map(|cat| AmountInput::new(cat.label))
            .collect();
    }

    fn update_focus_flags(&mut self) {
        let focus = self.focus;
        self.budget_input.focused = focus == 0;
        self.goal_input.focused = focus == 1;
        for (i, input) in self.category_inputs.iter_mut().enumerate() {
            input.focused = focus == i + 2;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use crate::services::BudgetStatus;

    fn settings() -> Settings {
        Settings::default()
    }

    #[test]
    fn test_new_app_matches_default_mode() {
        let settings = settings();
        let app = App::new(&settings);
        assert_eq!(app.mode, Mode::Monthly);
        assert_eq!(app.category_inputs.len(), 9);
        assert!(app.budget_input.focused);
    }

    #[test]
    fn test_focus_wraps() {
        let settings = settings();
        let mut app = App::new(&settings);
        for _ in 0..app.field_count() {
            app.focus_next();
        }
        assert_eq!(app.focus, 0);

        app.focus_prev();
        assert_eq!(app.focus, app.field_count() - 1);
    }

    #[test]
    fn test_toggle_mode_rebuilds_categories_keeps_budget() {
        let settings = settings();
        let mut app = App::new(&settings);
        app.budget_input.insert_digit('5');
        app.category_inputs[0].insert_digit('9');

        app.toggle_mode();
        assert_eq!(app.mode, Mode::Semester);
        assert_eq!(app.category_inputs.len(), 10);
        // Categories cleared, budget kept
        assert!(app.category_inputs.iter().all(|i| i.content.is_empty()));
        assert_eq!(app.budget_input.amount(), Money::from_rupees(5));
    }

    #[test]
    fn test_evaluate_reads_form_state() {
        let settings = settings();
        let mut app = App::new(&settings);
        for c in "5000".chars() {
            app.budget_input.insert_digit(c);
        }
        for c in "2000".chars() {
            app.category_inputs[0].insert_digit(c);
        }

        let summary = app.evaluate().unwrap();
        assert_eq!(summary.total, Money::from_rupees(2000));
        assert_eq!(summary.remaining, Money::from_rupees(3000));
        assert_eq!(summary.status, BudgetStatus::OnTrack);
    }

    #[test]
    fn test_save_snapshot_appends() {
        let settings = settings();
        let mut app = App::new(&settings);
        app.save_snapshot();
        app.save_snapshot();
        assert_eq!(app.history.len(), 2);
    }

    #[test]
    fn test_export_with_empty_history_warns() {
        let settings = settings();
        let mut app = App::new(&settings);
        app.export_history();
        let message = app.status_message.as_ref().unwrap();
        assert_eq!(message.level, StatusLevel::Warning);
    }
}
