//! Help dialog
//!
//! Lists the keybindings.

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::layout::centered_rect;

/// Key/description pairs shown in the dialog
const BINDINGS: &[(&str, &str)] = &[
    ("0-9", "Type into the focused amount field"),
    ("+ / -", "Step the focused amount up/down"),
    ("Backspace", "Delete the last digit"),
    ("Delete", "Clear the focused field"),
    ("Tab / Down / Enter", "Next field"),
    ("Shift-Tab / Up", "Previous field"),
    ("m", "Toggle Monthly / Semester mode"),
    ("s", "Save the current budget as a snapshot"),
    ("x", "Export snapshots to expenses.csv"),
    ("a", "Request AI budgeting tips"),
    ("t", "Reopen the last tips"),
    ("Esc", "Dismiss the status message"),
    ("q", "Quit"),
];

/// Render the help dialog
pub fn render(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let mut lines = vec![Line::raw("")];
    for (key, description) in BINDINGS {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<20}", key),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled(*description, Style::default().fg(Color::White)),
        ]));
    }
    lines.push(Line::raw(""));
    lines.push(Line::from(Span::styled(
        "  Press Esc to close",
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
