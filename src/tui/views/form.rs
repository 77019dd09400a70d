//! Budget form view
//!
//! The input column: mode line, budget and goal inputs, and one input per
//! category of the active set. The focused category's description shows at
//! the bottom of the block.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::categories_for;
use crate::tui::app::App;

/// Render the form
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(format!(" Budget Form — {} ", app.mode))
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::White));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 2 {
        return;
    }

    // Mode line
    let mode_line = Line::from(vec![
        Span::styled("[m] Mode: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            app.mode.label(),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  (step ₹{})", app.mode.step()),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(mode_line),
        Rect::new(inner.x, inner.y, inner.width, 1),
    );

    // Budget + goal inputs, then a gap, then category inputs
    let mut y = inner.y + 2;
    let rows: Vec<&crate::tui::widgets::AmountInput> = std::iter::once(&app.budget_input)
        .chain(std::iter::once(&app.goal_input))
        .chain(app.category_inputs.iter())
        .collect();

    for (i, input) in rows.iter().enumerate() {
        if y >= inner.y + inner.height {
            break;
        }
        frame.render_widget(*input, Rect::new(inner.x, y, inner.width, 1));
        y += 1;
        if i == 1 {
            // Separator between budget/goal and the categories
            y += 1;
        }
    }

    // Description of the focused category in the last line
    if app.focus >= 2 && inner.height > 2 {
        let cats = categories_for(app.mode);
        if let Some(cat) = cats.get(app.focus - 2) {
            let description = Line::from(Span::styled(
                cat.description,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ));
            frame.render_widget(
                Paragraph::new(description),
                Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1),
            );
        }
    }
}
