//! CSV export of the history log
//!
//! Writes the saved snapshots as a UTF-8 comma-separated table: a header
//! row, then one row per snapshot in append order.

use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::error::{BudgetError, BudgetResult};
use crate::models::HistoryLog;

/// Default artifact name for the exported table
pub const DEFAULT_EXPORT_FILENAME: &str = "expenses.csv";

/// Export the history log to a writer
///
/// Columns: Date, Mode, Budget, Expenses, Remaining, Goal. Money cells are
/// plain decimals ("4000.00"); the header row is always present.
pub fn export_history_csv<W: Write>(log: &HistoryLog, writer: W) -> BudgetResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(["Date", "Mode", "Budget", "Expenses", "Remaining", "Goal"])?;

    for record in log.records() {
        wtr.write_record([
            record.date.to_string(),
            record.mode.to_string(),
            record.budget.to_decimal_string(),
            record.total.to_decimal_string(),
            record.remaining.to_decimal_string(),
            record.goal.to_decimal_string(),
        ])?;
    }

    wtr.flush().map_err(|e| BudgetError::Export(e.to_string()))?;
    Ok(())
}

/// Export the history log to a file path
///
/// Refuses an empty log: there is nothing to offer for download.
pub fn export_history_to_path(log: &HistoryLog, path: &Path) -> BudgetResult<()> {
    if log.is_empty() {
        return Err(BudgetError::Export(
            "history log is empty; save a snapshot first".to_string(),
        ));
    }

    let file = std::fs::File::create(path).map_err(|e| {
        BudgetError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;

    export_history_csv(log, std::io::BufWriter::new(file))?;
    info!(path = %path.display(), rows = log.len(), "exported history");
    Ok(())
}
