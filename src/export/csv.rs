//! CSV export of expense records
//!
//! Amounts are written as plain decimals so the file opens cleanly in a
//! spreadsheet.

use std::io::Write;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::ExpenseRecord;

/// Write records as CSV with a header row
pub fn export_expenses_csv<W: Write>(records: &[ExpenseRecord], writer: &mut W) -> ExpenseResult<()> {
    let export_err = |e: csv::Error| ExpenseError::Export(e.to_string());
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(["ID", "Date", "Category", "Description", "Amount"])
        .map_err(export_err)?;

    for record in records {
        csv_writer
            .write_record([
                record.id().as_uuid().to_string(),
                record.date().format("%Y-%m-%d").to_string(),
                record.category().to_string(),
                record.description().to_string(),
                record.amount().to_decimal_string(),
            ])
            .map_err(export_err)?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    #[test]
    fn test_export_csv_escapes_fields() {
        let record = ExpenseRecord::new(
            Money::from_cents(1999),
            "Food",
            "Pizza, large",
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        )
        .unwrap();

        let mut buf = Vec::new();
        export_expenses_csv(&[record.clone()], &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "ID,Date,Category,Description,Amount");
        assert_eq!(
            lines[1],
            format!("{},2024-01-05,Food,\"Pizza, large\",19.99", record.id().as_uuid())
        );
    }

    #[test]
    fn test_export_csv_empty() {
        let mut buf = Vec::new();
        export_expenses_csv(&[], &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap().lines().count(), 1);
    }
}
