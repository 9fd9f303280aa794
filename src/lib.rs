//! budgetlens - spending projections and emergency fund tracking
//!
//! This library provides the calculation core of a personal budgeting
//! application. Callers feed in current totals and get back plain numbers
//! and classifications ready to render.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Money, period snapshots, budgets, categories, savings goals,
//!   users and the emergency fund ledger
//! - `services`: Spending projection, spending statistics and the
//!   categorization client
//! - `display`: Terminal formatting
//! - `export`: JSON and YAML output
//! - `config`: Settings and path management
//! - `cli`: Command handlers for the `budgetlens` binary
//! - `error`: Custom error types
//!
//! # Example
//!
//! ```
//! use budgetlens::models::{BudgetPeriod, Money};
//! use budgetlens::services::projection;
//!
//! let period = BudgetPeriod::new(Money::from_cents(53000), Money::from_cents(42550), 21, 7)?;
//! let remaining = projection::projected_remaining(&period)?;
//! assert_eq!(remaining, Money::from_cents(-3733));
//! # Ok::<(), budgetlens::BudgetLensError>(())
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;

pub use error::{BudgetLensError, BudgetLensResult};
