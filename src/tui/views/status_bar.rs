//! Status bar view
//!
//! Shows the transient status message (if any) and key hints.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::App;

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let mut spans = vec![];

    if let Some(message) = &app.status_message {
        spans.push(Span::styled(
            format!(" {} ", message.text),
            Style::default()
                .fg(message.level.color())
                .add_modifier(Modifier::BOLD),
        ));
        spans.push(Span::raw("│ "));
    }

    // Key hints (right-aligned)
    let hints = " m:Mode  s:Save  x:Export  a:Tips  ?:Help  q:Quit ";

    // Calculate padding
    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let padding_len = (area.width as usize)
        .saturating_sub(left_len)
        .saturating_sub(hints.len());
    let padding = " ".repeat(padding_len.max(1));

    spans.push(Span::raw(padding));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line);

    frame.render_widget(paragraph, area);
}
