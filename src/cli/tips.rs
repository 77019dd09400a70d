//! The `tips` command: one-shot advice request
//!
//! A single blocking attempt. Configuration and service failures are
//! warnings on stderr, not fatal errors; the summary already printed stays
//! useful either way.

use crate::config::Settings;
use crate::error::{BudgetError, BudgetResult};
use crate::services::{AdviceService, BudgetSummary};

use super::EvalArgs;

/// Handle the `tips` command
///
/// An explicit `--api-key` (or `GEMINI_API_KEY` via clap's env support)
/// overrides the settings file.
pub fn handle_tips_command(
    settings: &Settings,
    args: &EvalArgs,
    api_key: Option<String>,
) -> BudgetResult<()> {
    let state = args.to_state()?;
    let summary = BudgetSummary::compute(&state)?;

    let service = match api_key.filter(|k| !k.is_empty()) {
        Some(key) => AdviceService::with_key(key, settings.advice.model.clone()),
        None => match AdviceService::from_settings(settings) {
            Ok(service) => service,
            Err(BudgetError::AdviceUnavailable) => {
                eprintln!("Warning: {}", BudgetError::AdviceUnavailable);
                return Ok(());
            }
            Err(e) => return Err(e),
        },
    };

    match service.request_tips(&summary, &state.expenses) {
        Ok(tips) => {
            println!("{}", tips.trim_end());
        }
        Err(e) => {
            // Single attempt; surface the raw detail and carry on
            eprintln!("Warning: unable to fetch tips.");
            eprintln!("{}", e);
        }
    }

    Ok(())
}
