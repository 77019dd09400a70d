//! Expense distribution
//!
//! Per-category shares of total spending for the proportion chart, and the
//! comparison series (category amounts plus a synthetic "Remaining" bar)
//! for the bar chart.

use crate::models::{ExpenseSheet, Money};

/// One category's share of total spending
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryShare {
    /// Category label
    pub label: &'static str,
    /// Amount spent in this category
    pub amount: Money,
    /// Share of total spending, 0.0–100.0
    pub percentage: f64,
}

/// Distribution of spending across categories
///
/// Only categories with a non-zero amount appear; shares sum to 100%.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseDistribution {
    /// Shares in category-set order
    pub shares: Vec<CategoryShare>,
    /// Total spending across all categories
    pub total: Money,
}

impl ExpenseDistribution {
    /// Generate the distribution for a sheet
    ///
    /// Returns `None` when total spending is zero: the proportion chart is
    /// not rendered for an empty sheet.
    pub fn generate(sheet: &ExpenseSheet) -> Option<Self> {
        let total = sheet.total();
        if !total.is_positive() {
            return None;
        }

        let shares = sheet
            .entries()
            .filter(|(_, amount)| !amount.is_zero())
            .map(|(cat, amount)| CategoryShare {
                label: cat.label,
                amount,
                percentage: amount.paise() as f64 / total.paise() as f64 * 100.0,
            })
            .collect();

        Some(Self { shares, total })
    }

    /// The largest single share, if any
    pub fn top_share(&self) -> Option<&CategoryShare> {
        self.shares
            .iter()
            .max_by(|a, b| a.amount.cmp(&b.amount))
    }
}

/// One bar of the comparison chart
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonBar {
    /// Bar label (a category, or the synthetic "Remaining")
    pub label: &'static str,
    /// Signed amount behind the bar
    pub amount: Money,
}

impl ComparisonBar {
    /// Bar height for chart widgets that take unsigned values; a negative
    /// remaining clamps to zero height while the label keeps the sign
    pub fn height(&self) -> u64 {
        self.amount.paise().max(0) as u64
    }
}

/// Build the comparison series: every category amount followed by a
/// synthetic "Remaining" bar
pub fn comparison_bars(sheet: &ExpenseSheet, remaining: Money) -> Vec<ComparisonBar> {
    let mut bars: Vec<ComparisonBar> = sheet
        .entries()
        .map(|(cat, amount)| ComparisonBar {
            label: cat.label,
            amount,
        })
        .collect();

    bars.push(ComparisonBar {
        label: "Remaining",
        amount: remaining,
    });

    bars
}
