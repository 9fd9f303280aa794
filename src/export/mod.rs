//! Machine-readable output
//!
//! Writes reports as JSON or YAML with a small metadata header so
//! downstream tools can tell which version produced them.

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::Serialize;
use std::io::Write;

use crate::error::{BudgetLensError, BudgetLensResult};

/// Output format for report commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    Table,
    Json,
    Yaml,
}

/// A report wrapped with generation metadata
#[derive(Debug, Serialize)]
pub struct ExportDocument<'a, T: Serialize> {
    pub generated_at: DateTime<Utc>,
    pub app_version: &'static str,
    pub kind: &'static str,
    pub report: &'a T,
}

impl<'a, T: Serialize> ExportDocument<'a, T> {
    pub fn new(kind: &'static str, report: &'a T) -> Self {
        Self {
            generated_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION"),
            kind,
            report,
        }
    }
}

/// Write a report as pretty-printed JSON
pub fn export_json<T: Serialize, W: Write>(
    kind: &'static str,
    report: &T,
    writer: &mut W,
) -> BudgetLensResult<()> {
    serde_json::to_writer_pretty(&mut *writer, &ExportDocument::new(kind, report))
        .map_err(|e| BudgetLensError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| BudgetLensError::Export(e.to_string()))?;
    Ok(())
}

/// Write a report as YAML
pub fn export_yaml<T: Serialize, W: Write>(
    kind: &'static str,
    report: &T,
    writer: &mut W,
) -> BudgetLensResult<()> {
    serde_yaml::to_writer(writer, &ExportDocument::new(kind, report))
        .map_err(|e| BudgetLensError::Export(e.to_string()))
}
