//! Display formatting for terminal output
//!
//! Provides utilities for formatting summaries, distributions, and the
//! history log for plain (non-TUI) terminal display.

pub mod history;
pub mod summary;

pub use history::format_history_table;
pub use summary::{format_distribution, format_summary};
