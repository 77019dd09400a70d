//! The `summary` command: one-shot evaluation of a budget
//!
//! Prints the summary metrics, equivalent line, status, distribution, and
//! optionally writes the evaluation as a one-snapshot CSV.

use std::path::PathBuf;

use chrono::Local;

use crate::display::{format_distribution, format_history_table, format_summary};
use crate::error::BudgetResult;
use crate::export::export_history_to_path;
use crate::models::{HistoryLog, HistoryRecord};
use crate::reports::ExpenseDistribution;
use crate::services::BudgetSummary;

use super::EvalArgs;

/// Handle the `summary` command
pub fn handle_summary_command(args: &EvalArgs, save: Option<PathBuf>) -> BudgetResult<()> {
    let state = args.to_state()?;
    let summary = BudgetSummary::compute(&state)?;

    print!("{}", format_summary(&summary));

    if let Some(distribution) = ExpenseDistribution::generate(&state.expenses) {
        println!();
        print!("{}", format_distribution(&distribution));
    }

    if let Some(path) = save {
        let mut log = HistoryLog::new();
        log.push(snapshot(&summary));
        export_history_to_path(&log, &path)?;
        println!();
        print!("{}", format_history_table(&log));
        println!();
        println!("Saved snapshot to: {}", path.display());
    }

    Ok(())
}

/// Capture the evaluation as a history record dated today
fn snapshot(summary: &BudgetSummary) -> HistoryRecord {
    HistoryRecord {
        date: Local::now().date_naive(),
        mode: summary.mode,
        budget: summary.budget,
        total: summary.total,
        remaining: summary.remaining,
        goal: summary.goal,
    }
}
