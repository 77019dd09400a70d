//! History view
//!
//! Table of saved snapshots for the current session, in append order.

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::tui::app::App;

/// Render the history panel
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(format!(" Expense Log ({}) ", app.history.len()))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    if app.history.is_empty() {
        let text = Paragraph::new("No snapshots yet. Press [s] to save this budget.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("Date"),
        Cell::from("Mode"),
        Cell::from("Budget"),
        Cell::from("Expenses"),
        Cell::from("Remaining"),
        Cell::from("Goal"),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    )
    .height(1);

    let rows: Vec<Row> = app
        .history
        .records()
        .iter()
        .map(|record| {
            let remaining_style = if record.remaining.is_negative() {
                Style::default().fg(Color::Red)
            } else {
                Style::default().fg(Color::Green)
            };
            Row::new(vec![
                Cell::from(record.date.to_string()),
                Cell::from(record.mode.to_string()),
                Cell::from(record.budget.to_string()),
                Cell::from(record.total.to_string()),
                Cell::from(record.remaining.to_string()).style(remaining_style),
                Cell::from(record.goal.to_string()),
            ])
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Length(10),
        Constraint::Length(12),
        Constraint::Length(12),
        Constraint::Length(12),
        Constraint::Length(12),
    ];

    let table = Table::new(rows, widths).header(header).block(block);

    frame.render_widget(table, area);
}
