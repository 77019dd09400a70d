//! History log formatting for terminal display

use std::fmt::Write as _;

use crate::models::HistoryLog;

/// Format the history log as an aligned table
pub fn format_history_table(log: &HistoryLog) -> String {
    let mut output = String::new();

    if log.is_empty() {
        output.push_str("No snapshots saved this session.\n");
        return output;
    }

    let _ = writeln!(
        output,
        "{:<12} {:<10} {:>12} {:>12} {:>12} {:>12}",
        "Date", "Mode", "Budget", "Expenses", "Remaining", "Goal"
    );
    output.push_str(&"-".repeat(76));
    output.push('\n');

    for record in log.records() {
        let _ = writeln!(
            output,
            "{:<12} {:<10} {:>12} {:>12} {:>12} {:>12}",
            record.date.to_string(),
            record.mode.to_string(),
            record.budget.to_string(),
            record.total.to_string(),
            record.remaining.to_string(),
            record.goal.to_string()
        );
    }

    output
}
