//! Configuration module for budgetlens
//!
//! This module provides configuration management including:
//! - Platform config directory resolution
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::BudgetLensPaths;
pub use settings::{CategorizationSettings, Settings};
