//! Advice dialog
//!
//! Shows the advice text verbatim in a scrollable popup.

use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect;

/// Render the advice dialog
pub fn render(frame: &mut Frame, app: &mut App) {
    let text = match &app.advice_text {
        Some(text) => text.as_str(),
        None => return,
    };

    let area = centered_rect(70, 80, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" AI Budgeting Tips ")
        .title_style(
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
        .title_bottom(" j/k:Scroll  Esc:Close ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let paragraph = Paragraph::new(text)
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: false })
        .scroll((app.advice_scroll, 0))
        .block(block);

    frame.render_widget(paragraph, area);
}
