//! Custom error types for budgetlens
//!
//! This module defines the error hierarchy for the library using thiserror
//! for ergonomic error definitions. Every variant is a local, recoverable
//! condition; the caller decides whether to show a message or a placeholder.

use thiserror::Error;

use crate::models::Money;

/// The main error type for budgetlens operations
#[derive(Error, Debug)]
pub enum BudgetLensError {
    /// A rate or projection was requested over a zero-length base
    #[error("Division by zero: {quantity} is zero")]
    DivisionByZero { quantity: &'static str },

    /// A negative amount was passed to a fund mutator
    #[error("Invalid amount: {amount} (amounts must not be negative)")]
    InvalidAmount { amount: Money },

    /// A withdrawal exceeded the current balance
    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds { requested: Money, available: Money },

    /// Scaled arithmetic overflowed the cent range
    #[error("Arithmetic overflow: {0}")]
    Arithmetic(String),

    /// Validation errors for data models
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// CSV parsing errors
    #[error("CSV error: {0}")]
    Csv(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),

    /// The categorization backend answered with a non-success status
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The categorization backend could not be reached
    #[error("Transport error: {0}")]
    Transport(String),
}

impl BudgetLensError {
    /// Create a division-by-zero error for a named denominator
    pub fn division_by_zero(quantity: &'static str) -> Self {
        Self::DivisionByZero { quantity }
    }

    /// Create an overflow error describing the failed operation
    pub fn overflow(what: impl Into<String>) -> Self {
        Self::Arithmetic(what.into())
    }

    /// Check if this is a division-by-zero error
    pub fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::DivisionByZero { .. })
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

// Implement From traits for common error types

impl From<std::io::Error> for BudgetLensError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for BudgetLensError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<csv::Error> for BudgetLensError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err.to_string())
    }
}

/// Result type alias for budgetlens operations
pub type BudgetLensResult<T> = Result<T, BudgetLensError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = BudgetLensError::Config("test error".into());
        assert_eq!(err.to_string(), "Configuration error: test error");
    }

    #[test]
    fn test_division_by_zero_error() {
        let err = BudgetLensError::division_by_zero("days elapsed");
        assert_eq!(err.to_string(), "Division by zero: days elapsed is zero");
        assert!(err.is_division_by_zero());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_insufficient_funds_error() {
        let err = BudgetLensError::InsufficientFunds {
            requested: Money::from_cents(50000),
            available: Money::from_cents(40000),
        };
        assert_eq!(
            err.to_string(),
            "Insufficient funds: requested $500.00, available $400.00"
        );
    }

    #[test]
    fn test_invalid_amount_error() {
        let err = BudgetLensError::InvalidAmount {
            amount: Money::from_cents(-100),
        };
        assert_eq!(
            err.to_string(),
            "Invalid amount: -$1.00 (amounts must not be negative)"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: BudgetLensError = io_err.into();
        assert!(matches!(err, BudgetLensError::Io(_)));
    }
}
