//! AI budgeting tips
//!
//! Client for the generative-language `generateContent` endpoint. One
//! blocking attempt per invocation: the caller shows either the returned
//! text or a warning with the raw error detail. Without a configured
//! credential the feature is disabled and no outbound call is made.

use std::fmt::Write as _;
use std::time::Duration;

use tracing::{debug, warn};

use crate::config::Settings;
use crate::error::{BudgetError, BudgetResult};
use crate::models::ExpenseSheet;

use super::summary::BudgetSummary;

const API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";
const TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the advice (AI tips) service
#[derive(Debug, Clone)]
pub struct AdviceService {
    api_key: String,
    model: String,
}

impl AdviceService {
    /// Build a client from settings
    ///
    /// The `GEMINI_API_KEY` environment variable takes precedence over the
    /// settings file. Fails fast with `AdviceUnavailable` when neither is set.
    pub fn from_settings(settings: &Settings) -> BudgetResult<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .ok()
            .filter(|k| !k.is_empty())
            .or_else(|| settings.advice.api_key.clone())
            .filter(|k| !k.is_empty())
            .ok_or(BudgetError::AdviceUnavailable)?;

        Ok(Self {
            api_key,
            model: settings.advice.model.clone(),
        })
    }

    /// Build a client from an explicit key and model (CLI override path)
    pub fn with_key(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: model.into(),
        }
    }

    /// Whether a credential is available without constructing a client
    pub fn is_configured(settings: &Settings) -> bool {
        Self::from_settings(settings).is_ok()
    }

    /// Request six budgeting tips for the given evaluation
    ///
    /// Blocks the calling thread for up to the transport timeout. A single
    /// attempt: transport, authentication, and quota failures all surface
    /// as `BudgetError::Advice` with the raw detail.
    pub fn request_tips(
        &self,
        summary: &BudgetSummary,
        expenses: &ExpenseSheet,
    ) -> BudgetResult<String> {
        let prompt = build_prompt(summary, expenses);
        debug!(model = %self.model, "requesting budgeting tips");

        let body = serde_json::json!({
            "contents": [{
                "parts": [{ "text": prompt }]
            }]
        });

        let url = format!(
            "{}/{}:generateContent?key={}",
            API_BASE, self.model, self.api_key
        );

        let agent = ureq::Agent::config_builder()
            .timeout_global(Some(TIMEOUT))
            .build()
            .new_agent();

        let mut response = agent
            .post(&url)
            .header("Content-Type", "application/json")
            .send(body.to_string())
            .map_err(|e| {
                warn!(error = %e, "advice request failed");
                BudgetError::Advice(e.to_string())
            })?;

        let raw = response
            .body_mut()
            .read_to_string()
            .map_err(|e| BudgetError::Advice(e.to_string()))?;

        parse_tips(&raw)
    }
}

/// Format the prompt sent to the advice service
fn build_prompt(summary: &BudgetSummary, expenses: &ExpenseSheet) -> String {
    let mut breakdown = String::new();
    for (cat, amount) in expenses.entries() {
        let _ = write!(breakdown, "{}: {}, ", cat.label, amount);
    }
    let breakdown = breakdown.trim_end_matches(", ");

    let focus = match summary.mode {
        crate::models::Mode::Monthly => {
            "Focus on food, outings, and daily savings."
        }
        crate::models::Mode::Semester => {
            "Focus on tuition fees, hostel, trips, exams, and long-term planning."
        }
    };

    format!(
        "You are a financial advisor for COLLEGE STUDENTS.\n\
         \n\
         Mode: {mode}\n\
         Expenses breakdown: {breakdown}\n\
         Budget: {budget}\n\
         Remaining: {remaining}\n\
         Savings Goal: {goal}\n\
         \n\
         Provide 6 personalized student-focused budgeting tips.\n\
         {focus}\n\
         Keep them simple and actionable.",
        mode = summary.mode,
        breakdown = breakdown,
        budget = summary.budget,
        remaining = summary.remaining,
        goal = summary.goal,
        focus = focus,
    )
}

/// Extract the advice text from a `generateContent` response body
fn parse_tips(raw: &str) -> BudgetResult<String> {
    let value: serde_json::Value =
        serde_json::from_str(raw).map_err(|e| BudgetError::Advice(format!("bad response: {}", e)))?;

    let parts = value
        .pointer("/candidates/0/content/parts")
        .and_then(|p| p.as_array())
        .ok_or_else(|| BudgetError::Advice("response has no candidates".to_string()))?;

    let text: String = parts
        .iter()
        .filter_map(|p| p.get("text").and_then(|t| t.as_str()))
        .collect();

    if text.is_empty() {
        return Err(BudgetError::Advice("response has no text parts".to_string()));
    }

    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Mode, Money};
    use crate::services::summary::BudgetState;

    fn sample_state() -> BudgetState {
        let mut state = BudgetState::new(
            Mode::Monthly,
            Money::from_rupees(5000),
            Money::from_rupees(1000),
        );
        state
            .expenses
            .set_by_label("Food", Money::from_rupees(2000))
            .unwrap();
        state
    }

    #[test]
    fn test_build_prompt_carries_all_figures() {
        let state = sample_state();
        let summary = BudgetSummary::compute(&state).unwrap();
        let prompt = build_prompt(&summary, &state.expenses);

        assert!(prompt.contains("Mode: Monthly"));
        assert!(prompt.contains("Food: ₹2000.00"));
        assert!(prompt.contains("Budget: ₹5000.00"));
        assert!(prompt.contains("Remaining: ₹3000.00"));
        assert!(prompt.contains("Savings Goal: ₹1000.00"));
        assert!(prompt.contains("6 personalized student-focused budgeting tips"));
        assert!(prompt.contains("daily savings"));
    }

    #[test]
    fn test_build_prompt_semester_focus() {
        let state = BudgetState::new(
            Mode::Semester,
            Money::from_rupees(50000),
            Money::from_rupees(5000),
        );
        let summary = BudgetSummary::compute(&state).unwrap();
        let prompt = build_prompt(&summary, &state.expenses);

        assert!(prompt.contains("Mode: Semester"));
        assert!(prompt.contains("long-term planning"));
    }

    #[test]
    fn test_parse_tips() {
        let raw = r#"{
            "candidates": [{
                "content": {
                    "parts": [
                        {"text": "1. Cook at the hostel mess.\n"},
                        {"text": "2. Track daily spends."}
                    ]
                }
            }]
        }"#;

        let tips = parse_tips(raw).unwrap();
        assert!(tips.contains("Cook at the hostel mess"));
        assert!(tips.contains("Track daily spends"));
    }

    #[test]
    fn test_parse_tips_empty_response() {
        let err = parse_tips(r#"{"candidates": []}"#).unwrap_err();
        assert!(matches!(err, BudgetError::Advice(_)));

        let err = parse_tips("not json").unwrap_err();
        assert!(matches!(err, BudgetError::Advice(_)));
    }

    #[test]
    fn test_from_settings_without_key() {
        // Only meaningful when the environment doesn't provide a key
        if std::env::var("GEMINI_API_KEY").is_ok() {
            return;
        }
        let settings = Settings::default();
        let err = AdviceService::from_settings(&settings).unwrap_err();
        assert!(matches!(err, BudgetError::AdviceUnavailable));
        assert!(!AdviceService::is_configured(&settings));
    }

    #[test]
    fn test_with_key() {
        let service = AdviceService::with_key("k", "gemini-1.5-flash");
        assert_eq!(service.model, "gemini-1.5-flash");
    }
}
