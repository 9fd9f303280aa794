//! User settings for budgetlens
//!
//! Display preferences, the default period kind, the log filter and where
//! the categorization backend lives.

use serde::{Deserialize, Serialize};

use super::paths::BudgetLensPaths;
use crate::error::BudgetLensError;
use crate::models::PeriodKind;

/// Where and how to reach the categorization backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorizationSettings {
    /// Base URL of the budgeting backend
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for CategorizationSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// User settings for budgetlens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Period kind used when deriving day counts from today's date
    #[serde(default)]
    pub budget_period_type: PeriodKind,

    /// Default currency symbol
    #[serde(default = "default_currency")]
    pub currency_symbol: String,

    /// Default tracing filter, overridden by `RUST_LOG`
    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub categorization: CategorizationSettings,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "$".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_base_url() -> String {
    "http://localhost:8080/api/".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            budget_period_type: PeriodKind::default(),
            currency_symbol: default_currency(),
            log_level: default_log_level(),
            categorization: CategorizationSettings::default(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_create(paths: &BudgetLensPaths) -> Result<Self, BudgetLensError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            // Don't save yet - let caller decide when to persist
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| BudgetLensError::Io(format!("Failed to read settings file: {}", e)))?;

        let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
            BudgetLensError::Config(format!("Failed to parse settings file: {}", e))
        })?;

        if settings.categorization.timeout_secs == 0 {
            return Err(BudgetLensError::Config(
                "categorization.timeout_secs must be greater than zero".into(),
            ));
        }

        Ok(settings)
    }

    /// Save settings to disk
    pub fn save(&self, paths: &BudgetLensPaths) -> Result<(), BudgetLensError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            BudgetLensError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| BudgetLensError::Io(format!("Failed to write settings file: {}", e)))?;

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
        assert_eq!(settings.budget_period_type, PeriodKind::Monthly);
        assert_eq!(settings.currency_symbol, "$");
        assert_eq!(settings.log_level, "warn");
        assert_eq!(settings.categorization.timeout_secs, 30);
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetLensPaths::with_base_dir(temp_dir.path().to_path_buf());

        let mut settings = Settings::default();
        settings.budget_period_type = PeriodKind::Weekly;
        settings.currency_symbol = "€".into();
        settings.categorization.base_url = "https://budget.example.com/".into();

        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_create(&paths).unwrap();
        assert_eq!(loaded.budget_period_type, PeriodKind::Weekly);
        assert_eq!(loaded.currency_symbol, "€");
        assert_eq!(loaded.categorization.base_url, "https://budget.example.com/");
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetLensPaths::with_base_dir(temp_dir.path().to_path_buf());
        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.schema_version, 1);
        assert!(!paths.settings_file().exists());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetLensPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"budget_period_type": "biweekly"}"#).unwrap();

        let settings = Settings::load_or_create(&paths).unwrap();
        assert_eq!(settings.budget_period_type, PeriodKind::BiWeekly);
        assert_eq!(settings.currency_symbol, "$");
    }

    #[test]
    fn test_invalid_file() {
        let temp_dir = TempDir::new().unwrap();
        let paths = BudgetLensPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "{ not json").unwrap();
        assert!(matches!(
            Settings::load_or_create(&paths),
            Err(BudgetLensError::Config(_))
        ));

        std::fs::write(paths.settings_file(), r#"{"categorization": {"timeout_secs": 0}}"#)
            .unwrap();
        assert!(Settings::load_or_create(&paths).is_err());
    }
}
