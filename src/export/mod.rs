//! Export module for the expense tracker
//!
//! Writes expenses in several formats:
//! - CSV: the records only (spreadsheet-compatible)
//! - JSON / YAML: records plus the criteria and summary that go with them

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_expenses_csv;
pub use json::{export_json, ExpenseExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_yaml;
