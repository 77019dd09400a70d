//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state. Dialogs take priority; otherwise keys either edit the
//! focused numeric field or trigger an action.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

use super::app::{ActiveDialog, App};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => Ok(()),
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Check if we're in a dialog first
    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
        }

        // Help
        KeyCode::Char('?') => {
            app.active_dialog = ActiveDialog::Help;
        }

        // Mode toggle
        KeyCode::Char('m') | KeyCode::Char('M') => {
            app.toggle_mode();
        }

        // Save snapshot
        KeyCode::Char('s') | KeyCode::Char('S') => {
            app.save_snapshot();
        }

        // Export history CSV
        KeyCode::Char('x') | KeyCode::Char('X') => {
            app.export_history();
        }

        // Request AI tips (blocks until the call returns)
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.request_advice();
        }

        // Reopen the last advice text
        KeyCode::Char('t') | KeyCode::Char('T') => {
            if app.advice_text.is_some() {
                app.advice_scroll = 0;
                app.active_dialog = ActiveDialog::Advice;
            }
        }

        // Field navigation
        KeyCode::Tab | KeyCode::Down | KeyCode::Enter => {
            app.focus_next();
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.focus_prev();
        }

        // Step the focused amount up/down
        KeyCode::Char('+') | KeyCode::Char('=') => {
            let step = app.focused_step();
            app.focused_input_mut().bump(step);
        }
        KeyCode::Char('-') => {
            let step = app.focused_step();
            app.focused_input_mut().bump(-step);
        }

        // Field editing
        KeyCode::Char(c) if c.is_ascii_digit() => {
            app.focused_input_mut().insert_digit(c);
        }
        KeyCode::Backspace => {
            app.focused_input_mut().backspace();
        }
        KeyCode::Delete => {
            app.focused_input_mut().clear();
        }

        // Dismiss status message
        KeyCode::Esc => {
            app.status_message = None;
        }

        _ => {}
    }

    Ok(())
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::Advice => match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => app.close_dialog(),
            KeyCode::Down | KeyCode::Char('j') => {
                app.advice_scroll = app.advice_scroll.saturating_add(1);
            }
            KeyCode::Up | KeyCode::Char('k') => {
                app.advice_scroll = app.advice_scroll.saturating_sub(1);
            }
            _ => {}
        },
        ActiveDialog::Help => match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter | KeyCode::Char('?') => {
                app.close_dialog()
            }
            _ => {}
        },
        ActiveDialog::None => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Settings;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    #[test]
    fn test_quit_key() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        handle_event(&mut app, Event::Key(key(KeyCode::Char('q')))).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn test_digit_goes_to_focused_field() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        handle_event(&mut app, Event::Key(key(KeyCode::Char('7')))).unwrap();
        assert_eq!(app.budget_input.content, "7");

        handle_event(&mut app, Event::Key(key(KeyCode::Tab))).unwrap();
        handle_event(&mut app, Event::Key(key(KeyCode::Char('3')))).unwrap();
        assert_eq!(app.goal_input.content, "3");
    }

    #[test]
    fn test_step_keys() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        // Budget focused; monthly step is 500
        handle_event(&mut app, Event::Key(key(KeyCode::Char('+')))).unwrap();
        handle_event(&mut app, Event::Key(key(KeyCode::Char('+')))).unwrap();
        assert_eq!(app.budget_input.content, "1000");
        handle_event(&mut app, Event::Key(key(KeyCode::Char('-')))).unwrap();
        assert_eq!(app.budget_input.content, "500");
    }

    #[test]
    fn test_mode_toggle_key() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        handle_event(&mut app, Event::Key(key(KeyCode::Char('m')))).unwrap();
        assert_eq!(app.mode, crate::models::Mode::Semester);
    }

    #[test]
    fn test_help_dialog_open_close() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        handle_event(&mut app, Event::Key(key(KeyCode::Char('?')))).unwrap();
        assert!(app.has_dialog());
        handle_event(&mut app, Event::Key(key(KeyCode::Esc))).unwrap();
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_save_key_appends_history() {
        let settings = Settings::default();
        let mut app = App::new(&settings);
        handle_event(&mut app, Event::Key(key(KeyCode::Char('s')))).unwrap();
        assert_eq!(app.history.len(), 1);
    }
}
