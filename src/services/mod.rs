//! Service layer for budgetlens
//!
//! Calculations over the models (projections and spending statistics) and
//! the client for the backend's categorization endpoint.

pub mod categorization;
pub mod projection;
pub mod statistics;

pub use categorization::{
    CategorizationClient, CategorizationTransport, CategorizeRequest, CategorizeResponse,
    HttpTransport,
};
pub use projection::{ProgressTier, ProjectionReport, SavingsProjection};
pub use statistics::{CategoryStatistic, SpendingStatistics, SpendingStatus};
