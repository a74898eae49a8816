//! JSON export of expenses with their summary

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::ExpenseRecord;
use crate::services::{filter, summarize, FilterCriteria, SummaryResult};

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Exported expenses, the criteria that selected them and their summary
#[derive(Debug, Clone, Serialize)]
pub struct ExpenseExport {
    pub schema_version: String,
    pub exported_at: DateTime<Utc>,
    /// Application version that created the export
    pub app_version: String,
    pub criteria: FilterCriteria,
    pub expenses: Vec<ExpenseRecord>,
    pub summary: SummaryResult,
}

impl ExpenseExport {
    /// Select the matching records and summarize them
    pub fn build(records: &[ExpenseRecord], criteria: &FilterCriteria) -> Self {
        let expenses = filter(records, criteria);
        let summary = summarize(&expenses);
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            criteria: criteria.clone(),
            expenses,
            summary,
        }
    }
}

/// Write the export as JSON
pub fn export_json<W: Write>(export: &ExpenseExport, writer: &mut W, pretty: bool) -> ExpenseResult<()> {
    let result = if pretty {
        serde_json::to_writer_pretty(writer, export)
    } else {
        serde_json::to_writer(writer, export)
    };
    result.map_err(|e| ExpenseError::Export(format!("Failed to write JSON: {}", e)))
}
