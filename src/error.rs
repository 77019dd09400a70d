//! Custom error types for CampusBudget
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for CampusBudget operations
#[derive(Error, Debug)]
pub enum BudgetError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Invalid user input (negative amount, unknown category, bad number)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// The advice feature has no credential configured; no call is attempted
    #[error("Advice service is not configured: set GEMINI_API_KEY or advice.api_key in settings")]
    AdviceUnavailable,

    /// The advice call failed (transport, authentication, or quota)
    #[error("Advice service error: {0}")]
    Advice(String),
}

impl BudgetError {
    /// Create an invalid-input error for a negative amount
    pub fn negative_amount(category: impl Into<String>) -> Self {
        Self::InvalidInput(format!(
            "amount for '{}' must not be negative",
            category.into()
        ))
    }

    /// Create an invalid-input error for an unknown category label
    pub fn unknown_category(label: impl Into<String>) -> Self {
        Self::InvalidInput(format!("unknown category: '{}'", label.into()))
    }

    /// Check if this is an invalid-input error
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }

    /// Check if this error came from the advice feature (either kind)
    pub fn is_advice(&self) -> bool {
        matches!(self, Self::AdviceUnavailable | Self::Advice(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for BudgetError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for BudgetError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for CampusBudget operations
pub type BudgetResult<T> = Result<T, BudgetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BudgetError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_negative_amount_error() {
        let err = BudgetError::negative_amount("Food");
        assert_eq!(
            err.to_string(),
            "Invalid input: amount for 'Food' must not be negative"
        );
        assert!(err.is_invalid_input());
    }

    #[test]
    fn test_advice_errors() {
        assert!(BudgetError::AdviceUnavailable.is_advice());
        assert!(BudgetError::Advice("quota exceeded".into()).is_advice());
        assert!(!BudgetError::Export("disk full".into()).is_advice());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let budget_err: BudgetError = io_err.into();
        assert!(matches!(budget_err, BudgetError::Io(_)));
    }
}
