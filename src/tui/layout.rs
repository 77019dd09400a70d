//! Layout definitions for the TUI
//!
//! Defines the overall layout structure: form column, results column
//! (summary, charts, history), status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Input form (mode, budget, goal, categories)
    pub form: Rect,
    /// Summary metrics and status banner
    pub summary: Rect,
    /// Charts (distribution + comparison)
    pub charts: Rect,
    /// History table
    pub history: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        // Split into main area and status bar
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),    // Main area
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        // Split main area into form and results
        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(44), // Form (fixed width)
                Constraint::Min(40),    // Results
            ])
            .split(vertical[0]);

        // Split results into summary, charts, history
        let results = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(9), // Summary
                Constraint::Min(8),    // Charts
                Constraint::Length(8), // History
            ])
            .split(horizontal[1]);

        Self {
            form: horizontal[0],
            summary: results[0],
            charts: results[1],
            history: results[2],
            status_bar: vertical[1],
        }
    }
}

/// Create a centered rect for dialogs
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
