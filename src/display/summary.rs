//! Summary formatting for terminal display

use std::fmt::Write as _;

use crate::reports::ExpenseDistribution;
use crate::services::{BudgetStatus, BudgetSummary};

/// Width of the text bar in the distribution listing
const BAR_WIDTH: usize = 30;

/// Format the summary metrics, equivalent line, and status banner
pub fn format_summary(summary: &BudgetSummary) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "Budget Summary ({})", summary.mode);
    output.push_str(&"=".repeat(40));
    output.push('\n');
    let _ = writeln!(output, "Budget:    {}", summary.budget);
    let _ = writeln!(output, "Expenses:  {}", summary.total);
    let _ = writeln!(output, "Remaining: {}", summary.remaining);
    let _ = writeln!(output, "Goal:      {}", summary.goal);

    if summary.shows_equivalent() {
        let _ = writeln!(
            output,
            "{}: ₹{:.2}",
            summary.mode.equivalent_label(),
            summary.equivalent
        );
    }

    let marker = match summary.status {
        BudgetStatus::Exceeded => "[!]",
        BudgetStatus::NearLimit => "[~]",
        BudgetStatus::OnTrack => "[+]",
    };
    let _ = writeln!(output, "{} {}", marker, summary.status.banner());

    output
}

/// Format the expense distribution as a percentage listing with text bars
pub fn format_distribution(distribution: &ExpenseDistribution) -> String {
    let mut output = String::new();

    let _ = writeln!(output, "Expense Distribution (total {})", distribution.total);
    output.push_str(&"-".repeat(70));
    output.push('\n');

    for share in &distribution.shares {
        let filled = ((share.percentage / 100.0) * BAR_WIDTH as f64).round() as usize;
        let bar: String = "#".repeat(filled.min(BAR_WIDTH));
        let _ = writeln!(
            output,
            "{:<24} {:>12} {:>6.1}%  {}",
            share.label,
            share.amount.to_string(),
            share.percentage,
            bar
        );
    }

    output
}
