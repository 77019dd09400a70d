//! Amount input widget
//!
//! A digits-only input field for money amounts in whole rupees. The
//! non-negative boundary is structural: there is no way to type a sign.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::models::Money;

/// Longest amount accepted, in digits
const MAX_DIGITS: usize = 10;

/// A digits-only amount input
#[derive(Debug, Clone)]
pub struct AmountInput {
    /// Current digits
    pub content: String,
    /// Whether the input is focused
    pub focused: bool,
    /// Label
    pub label: String,
}

impl AmountInput {
    /// Create a new input with a label
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            content: String::new(),
            focused: false,
            label: label.into(),
        }
    }

    /// Append a digit at the end; anything else is ignored
    pub fn insert_digit(&mut self, c: char) {
        if c.is_ascii_digit() && self.content.len() < MAX_DIGITS {
            // No leading zeros
            if c == '0' && self.content.is_empty() {
                return;
            }
            self.content.push(c);
        }
    }

    /// Delete the last digit
    pub fn backspace(&mut self) {
        self.content.pop();
    }

    /// Add a signed step to the current amount, clamping at zero
    pub fn bump(&mut self, step: i64) {
        let rupees = (self.amount().rupees() + step).max(0);
        if rupees == 0 {
            self.content.clear();
        } else {
            self.content = rupees.to_string();
        }
    }

    /// Clear the content
    pub fn clear(&mut self) {
        self.content.clear();
    }

    /// Current amount; an empty field is zero
    pub fn amount(&self) -> Money {
        self.content
            .parse::<i64>()
            .map(Money::from_rupees)
            .unwrap_or_else(|_| Money::zero())
    }
}

impl Widget for &AmountInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let label_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::White)
        };

        let value = if self.content.is_empty() {
            "0".to_string()
        } else {
            self.content.clone()
        };

        let value_style = if self.content.is_empty() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Yellow)
        };

        let mut spans = vec![
            Span::styled(format!("{:<24}", self.label), label_style),
            Span::raw("₹ "),
            Span::styled(value, value_style),
        ];

        // Block cursor after the last digit when focused
        if self.focused {
            spans.push(Span::styled(
                " ",
                Style::default().bg(Color::Cyan),
            ));
        }

        let line = Line::from(spans);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_digits_only() {
        let mut input = AmountInput::new("Budget");
        input.insert_digit('5');
        input.insert_digit('0');
        input.insert_digit('a');
        input.insert_digit('-');
        assert_eq!(input.content, "50");
        assert_eq!(input.amount(), Money::from_rupees(50));
    }

    #[test]
    fn test_no_leading_zero() {
        let mut input = AmountInput::new("Budget");
        input.insert_digit('0');
        assert_eq!(input.content, "");
        input.insert_digit('5');
        input.insert_digit('0');
        assert_eq!(input.content, "50");
    }

    #[test]
    fn test_empty_is_zero() {
        let input = AmountInput::new("Budget");
        assert_eq!(input.amount(), Money::zero());
    }

    #[test]
    fn test_backspace_and_clear() {
        let mut input = AmountInput::new("Budget");
        input.insert_digit('4');
        input.insert_digit('2');
        input.backspace();
        assert_eq!(input.content, "4");
        input.clear();
        assert_eq!(input.content, "");
    }

    #[test]
    fn test_bump_steps_and_clamps() {
        let mut input = AmountInput::new("Budget");
        input.bump(500);
        assert_eq!(input.amount(), Money::from_rupees(500));
        input.bump(500);
        assert_eq!(input.amount(), Money::from_rupees(1000));
        input.bump(-1500);
        assert_eq!(input.amount(), Money::zero());
        assert_eq!(input.content, "");
    }

    #[test]
    fn test_max_digits() {
        let mut input = AmountInput::new("Budget");
        for _ in 0..20 {
            input.insert_digit('9');
        }
        assert_eq!(input.content.len(), 10);
    }
}
