//! User settings for CampusBudget
//!
//! Manages user preferences: the default budgeting mode, currency symbol,
//! and the advice (AI tips) service credential and model.

use serde::{Deserialize, Serialize};

use super::paths::BudgetPaths;
use crate::error::BudgetError;
use crate::models::Mode;

/// Advice (AI tips) service settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdviceSettings {
    /// API key for the generative-language service. The `GEMINI_API_KEY`
    /// environment variable takes precedence over this field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Model to request tips from
    #[serde(default = "default_advice_model")]
    pub model: String,
}

impl Default for AdviceSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            model: default_advice_model(),
        }
    }
}

/// User settings for CampusBudget
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Budgeting mode selected when the form opens
    #[serde(default)]
    pub default_mode: Mode,

    /// Currency symbol used in terminal output
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Advice service settings
    #[serde(default)]
    pub advice: AdviceSettings,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "₹".to_string()
}

fn default_advice_model() -> String {
    "gemini-1.5-flash".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            default_mode: Mode::default(),
            currency_symbol: default_currency(),
            advice: AdviceSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &BudgetPaths) -> Result<Self, BudgetError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path)
                .map_err(|e| BudgetError::Io(format!("Failed to read settings file: {}", e)))?;

            let settings: Settings = serde_json::from_str(&contents)
                .map_err(|e| BudgetError::Config(format!("Failed to parse settings file: {}", e)))?;

            Ok(settings)
        } else {
            // Create default settings
            let settings = Settings::default();
            // Don't save yet - let caller decide when to persist
            Ok(settings)
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetPaths) -> Result<(), BudgetError> {
        // Ensure the config directory exists
        paths.ensure_directories()?;

        let settings_path = paths.settings_file();
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| BudgetError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(&settings_path, contents)
            .map_err(|e| BudgetError::Io(format!("Failed to write settings file: {}", e)))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.default_mode, Mode::Monthly);
        assert_eq!(settings.currency_symbol, "₹");
        assert!(settings.advice.api_key.is_none());
        assert_eq!(settings.advice.model, "gemini-1.5-flash");
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.default_mode = Mode::Semester;
        settings.advice.api_key = Some("test-key".to_string());

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.default_mode, Mode::Semester);
        assert_eq!(loaded.advice.api_key.as_deref(), Some("test-key"));
    }

    #[test]
    fn test_load_or_create_without_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.default_mode, Mode::Monthly);
        // Nothing was persisted
        assert!(!paths.is_initialized());
    }

    #[test]
    fn test_serde_round_trip() {
        let settings = Settings::default();
        let json = serde_json::to_string(&settings).unwrap();
        let deserialized: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings.default_mode, deserialized.default_mode);
        assert_eq!(settings.advice.model, deserialized.advice.model);
    }
}
