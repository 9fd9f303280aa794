//! Path management for budgetlens
//!
//! ## Path Resolution Order
//!
//! 1. `BUDGETLENS_DATA_DIR` environment variable (if set)
//! 2. The platform config directory from `directories`
//!    (`~/.config/budgetlens` on Linux, `~/Library/Application Support/budgetlens`
//!    on macOS, `%APPDATA%\budgetlens` on Windows)

use directories::ProjectDirs;
use std::path::{Path, PathBuf};

use crate::error::BudgetLensError;

/// Environment variable overriding the base directory
pub const DATA_DIR_ENV: &str = "BUDGETLENS_DATA_DIR";

/// Manages all paths used by budgetlens
#[derive(Debug, Clone)]
pub struct BudgetLensPaths {
    base_dir: PathBuf,
}

impl BudgetLensPaths {
    /// Resolve the base directory from the environment or the platform
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, BudgetLensError> {
        let base_dir = match std::env::var_os(DATA_DIR_ENV) {
            Some(custom) => PathBuf::from(custom),
            None => ProjectDirs::from("", "", "budgetlens")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    BudgetLensError::Config("Could not determine a config directory".into())
                })?,
        };

        Ok(Self { base_dir })
    }

    /// Use a fixed base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), BudgetLensError> {
        std::fs::create_dir_all(&self.base_dir).map_err(|e| {
            BudgetLensError::Io(format!("Failed to create config directory: {}", e))
        })
    }
}
