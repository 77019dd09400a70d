//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the service layer.

pub mod categories;
pub mod summary;
pub mod tips;

pub use categories::handle_categories_command;
pub use summary::handle_summary_command;
pub use tips::handle_tips_command;

use clap::Args;

use crate::error::{BudgetError, BudgetResult};
use crate::models::{Mode, Money};
use crate::services::BudgetState;

/// Shared evaluation inputs: mode, budget, goal, and per-category amounts
#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Budgeting mode
    #[arg(short, long, value_enum, default_value_t = Mode::Monthly)]
    pub mode: Mode,

    /// Total budget (non-negative, e.g. "5000" or "5000.50")
    #[arg(short, long, value_parser = parse_amount, default_value = "0")]
    pub budget: Money,

    /// Savings goal (non-negative)
    #[arg(short, long, value_parser = parse_amount, default_value = "0")]
    pub goal: Money,

    /// Category amount as "Label=Amount"; repeatable
    #[arg(short = 's', long = "set", value_name = "LABEL=AMOUNT")]
    pub set: Vec<String>,
}

impl EvalArgs {
    /// Build a validated budget state from the parsed arguments
    pub fn to_state(&self) -> BudgetResult<BudgetState> {
        let mut state = BudgetState::new(self.mode, self.budget, self.goal);

        for assignment in &self.set {
            let (label, raw_amount) = assignment.split_once('=').ok_or_else(|| {
                BudgetError::InvalidInput(format!(
                    "expected LABEL=AMOUNT, got '{}'",
                    assignment
                ))
            })?;

            let amount = Money::parse(raw_amount.trim()).map_err(|e| {
                BudgetError::InvalidInput(format!("bad amount for '{}': {}", label.trim(), e))
            })?;

            state.expenses.set_by_label(label.trim(), amount)?;
        }

        Ok(state)
    }
}

/// Parse a non-negative money amount from a CLI argument
fn parse_amount(s: &str) -> Result<Money, String> {
    let amount = Money::parse(s).map_err(|e| e.to_string())?;
    if amount.is_negative() {
        return Err("amount must not be negative".to_string());
    }
    Ok(amount)
}
