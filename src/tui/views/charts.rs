//! Charts view
//!
//! Left: the expense distribution with per-category percentages (rendered
//! only when total spending is positive). Right: the budget-vs-expenses
//! comparison as a horizontal bar chart with a synthetic "Remaining" bar.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use crate::reports::{comparison_bars, ExpenseDistribution};
use crate::tui::app::App;

/// Width of the text bar in the distribution listing
const DIST_BAR_WIDTH: usize = 12;

/// Render the charts panel
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_distribution(frame, app, halves[0]);
    render_comparison(frame, app, halves[1]);
}

/// Render the proportion chart over category amounts
fn render_distribution(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Expense Distribution ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let state = app.current_state();
    let distribution = match ExpenseDistribution::generate(&state.expenses) {
        Some(distribution) => distribution,
        None => {
            // Not rendered until there is something to proportion
            let text = Paragraph::new("Enter expenses to see the distribution.")
                .block(block)
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(text, area);
            return;
        }
    };

    let lines: Vec<Line> = distribution
        .shares
        .iter()
        .map(|share| {
            let filled = ((share.percentage / 100.0) * DIST_BAR_WIDTH as f64).round() as usize;
            let bar: String = "█".repeat(filled.min(DIST_BAR_WIDTH));
            Line::from(vec![
                Span::styled(
                    format!("{:<18}", share.label),
                    Style::default().fg(Color::White),
                ),
                Span::styled(
                    format!("{:>5.1}% ", share.percentage),
                    Style::default().fg(Color::Yellow),
                ),
                Span::styled(bar, Style::default().fg(Color::Magenta)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Render the budget-vs-expenses comparison chart
fn render_comparison(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Budget vs Expenses ")
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

    let state = app.current_state();
    let bars: Vec<Bar> = comparison_bars(&state.expenses, summary.remaining)
        .iter()
        .map(|bar| {
            let color = if bar.label == "Remaining" {
                if bar.amount.is_negative() {
                    Color::Red
                } else {
                    Color::Green
                }
            } else {
                Color::Yellow
            };
            Bar::default()
                .value(bar.height())
                .label(Line::from(bar.label))
                .text_value(bar.amount.to_string())
                .style(Style::default().fg(color))
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}
