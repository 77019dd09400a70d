//! Terminal User Interface module
//!
//! This module provides the interactive budgeting form using ratatui:
//! a single screen with the input form, summary metrics, charts, the
//! session history, and dialogs for help and AI tips.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
