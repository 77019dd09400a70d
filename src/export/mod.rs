//! Data export
//!
//! CSV export of the session history log.

pub mod csv;

pub use csv::{export_history_csv, export_history_to_path, DEFAULT_EXPORT_FILENAME};
