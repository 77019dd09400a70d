//! TUI Views module
//!
//! Contains the form, summary, charts, and history panels, plus the
//! status bar.

pub mod charts;
pub mod form;
pub mod history;
pub mod status_bar;
pub mod summary;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    form::render(frame, app, layout.form);
    summary::render(frame, app, layout.summary);
    charts::render(frame, app, layout.charts);
    history::render(frame, app, layout.history);
    status_bar::render(frame, app, layout.status_bar);

    // Render dialog if active
    match app.active_dialog {
        ActiveDialog::Help => dialogs::help::render(frame),
        ActiveDialog::Advice => dialogs::advice::render(frame, app),
        ActiveDialog::None => {}
    }
}
