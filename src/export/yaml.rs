//! YAML export of expenses with their summary

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};

use super::json::ExpenseExport;

/// Write the export as YAML
pub fn export_yaml<W: Write>(export: &ExpenseExport, writer: &mut W) -> ExpenseResult<()> {
    serde_yaml::to_writer(writer, export)
        .map_err(|e| ExpenseError::Export(format!("Failed to write YAML: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExpenseRecord, Money};
    use crate::services::FilterCriteria;
    use chrono::NaiveDate;

    #[test]
    fn test_export_yaml() {
        let records = vec![ExpenseRecord::new(
            Money::from_cents(250),
            "Food",
            "Tea",
            NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        )
        .unwrap()];
        let export = ExpenseExport::build(&records, &FilterCriteria::new());

        let mut buf = Vec::new();
        export_yaml(&export, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.contains("schema_version"));
        assert!(text.contains("description: Tea"));
        assert!(text.contains("grand_total: 250"));
    }
}
