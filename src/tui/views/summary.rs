//! Summary view
//!
//! Shows the three summary metrics, the time-scaled equivalent line, and
//! the status banner.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::services::BudgetStatus;
use crate::tui::app::App;

/// Render the summary panel
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Budget Summary ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let summary = match app.evaluate() {
        Ok(summary) => summary,
        Err(_) => {
            frame.render_widget(block, area);
            return;
        }
    };

    let remaining_color = if summary.remaining.is_negative() {
        Color::Red
    } else {
        Color::Green
    };

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Budget:    ", Style::default().fg(Color::White)),
            Span::styled(
                summary.budget.to_string(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Expenses:  ", Style::default().fg(Color::White)),
            Span::styled(
                summary.total.to_string(),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Remaining: ", Style::default().fg(Color::White)),
            Span::styled(
                summary.remaining.to_string(),
                Style::default()
                    .fg(remaining_color)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled("Goal:      ", Style::default().fg(Color::White)),
            Span::styled(summary.goal.to_string(), Style::default().fg(Color::Yellow)),
        ]),
    ];

    // Equivalent line is only surfaced for a positive budget
    if summary.shows_equivalent() {
        lines.push(Line::from(Span::styled(
            format!(
                "{}: ₹{:.2}",
                summary.mode.equivalent_label(),
                summary.equivalent
            ),
            Style::default().fg(Color::Blue),
        )));
    }

    lines.push(Line::raw(""));

    let (banner_color, banner_prefix) = match summary.status {
        BudgetStatus::Exceeded => (Color::Red, "[!]"),
        BudgetStatus::NearLimit => (Color::Yellow, "[~]"),
        BudgetStatus::OnTrack => (Color::Green, "[+]"),
    };
    lines.push(Line::from(Span::styled(
        format!("{} {}", banner_prefix, summary.status.banner()),
        Style::default()
            .fg(banner_color)
            .add_modifier(Modifier::BOLD),
    )));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
