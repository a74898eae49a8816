//! Expense record stores
//!
//! [`CsvExpenseStore`] keeps records in a flat CSV file with the header
//! `id,amount,category,description,date`. Files without the `id` column are
//! accepted and get fresh IDs on load. [`MemoryStore`] holds records in memory
//! only.

use std::path::PathBuf;

use chrono::NaiveDate;
use serde::Deserialize;
use tracing::{debug, info};

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{ExpenseId, ExpenseRecord, Money};

use super::file_io::write_atomic;
use super::RecordStore;

const HEADER: [&str; 5] = ["id", "amount", "category", "description", "date"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// One CSV row as stored on disk
#[derive(Debug, Deserialize)]
struct ExpenseRow {
    #[serde(default)]
    id: Option<String>,
    amount: String,
    category: String,
    description: String,
    date: String,
}

impl ExpenseRow {
    fn into_record(self, line: u64) -> ExpenseResult<ExpenseRecord> {
        let at_line = |msg: String| ExpenseError::InvalidRecord(format!("line {}: {}", line, msg));

        let id = match self.id.as_deref().map(str::trim) {
            Some(id) if !id.is_empty() => id
                .parse::<ExpenseId>()
                .map_err(|e| at_line(format!("invalid id '{}': {}", id, e)))?,
            _ => ExpenseId::new(),
        };
        let amount = Money::parse(&self.amount).map_err(|e| at_line(e.to_string()))?;
        let date = NaiveDate::parse_from_str(self.date.trim(), DATE_FORMAT)
            .map_err(|_| at_line(format!("invalid date '{}'", self.date)))?;

        ExpenseRecord::with_id(id, amount, self.category, self.description, date).map_err(|e| {
            match e {
                ExpenseError::InvalidRecord(msg) => at_line(msg),
                other => other,
            }
        })
    }
}

/// Add a record unless its ID is already present
fn push_unique(records: &mut Vec<ExpenseRecord>, record: ExpenseRecord) -> ExpenseResult<()> {
    if records.iter().any(|r| r.id() == record.id()) {
        return Err(ExpenseError::Duplicate {
            entity_type: "Expense",
            identifier: record.id().to_string(),
        });
    }
    records.push(record);
    Ok(())
}

fn remove_by_id(records: &mut Vec<ExpenseRecord>, id: ExpenseId) -> Option<ExpenseRecord> {
    let index = records.iter().position(|r| r.id() == id)?;
    Some(records.remove(index))
}

/// Record store backed by a CSV file
pub struct CsvExpenseStore {
    path: PathBuf,
    records: Vec<ExpenseRecord>,
}

impl CsvExpenseStore {
    /// Create a new store for the given file. Nothing is read until `load`.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            records: Vec::new(),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl RecordStore for CsvExpenseStore {
    fn load(&mut self) -> ExpenseResult<()> {
        self.records.clear();

        if !self.path.exists() {
            debug!(path = %self.path.display(), "no expense file yet, starting empty");
            return Ok(());
        }

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::Fields)
            .from_path(&self.path)
            .map_err(|e| {
                ExpenseError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
            })?;
        let headers = reader.headers()?.clone();
        let mut assigned_ids = 0usize;

        for result in reader.records() {
            let row = result?;
            let line = row.position().map(|p| p.line()).unwrap_or_default();
            if row.iter().all(|field| field.is_empty()) {
                continue;
            }
            let parsed: ExpenseRow = row
                .deserialize(Some(&headers))
                .map_err(|e| ExpenseError::InvalidRecord(format!("line {}: {}", line, e)))?;
            if parsed.id.as_deref().map_or(true, |id| id.trim().is_empty()) {
                assigned_ids += 1;
            }
            let record = parsed.into_record(line)?;
            push_unique(&mut self.records, record).map_err(|_| {
                ExpenseError::InvalidRecord(format!("line {}: duplicate expense id", line))
            })?;
        }

        debug!(
            path = %self.path.display(),
            count = self.records.len(),
            "loaded expenses"
        );

        // IDs handed out to rows without one must survive until the next run
        if assigned_ids > 0 {
            self.save()?;
            info!(
                path = %self.path.display(),
                count = assigned_ids,
                "assigned ids to expenses without one"
            );
        }
        Ok(())
    }

    fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    fn append(&mut self, record: ExpenseRecord) -> ExpenseResult<()> {
        push_unique(&mut self.records, record)
    }

    fn remove(&mut self, id: ExpenseId) -> ExpenseResult<Option<ExpenseRecord>> {
        Ok(remove_by_id(&mut self.records, id))
    }

    fn save(&self) -> ExpenseResult<()> {
        write_atomic(&self.path, |writer| {
            let mut csv_writer = csv::Writer::from_writer(writer);
            csv_writer.write_record(HEADER)?;
            for record in &self.records {
                csv_writer.write_record([
                    record.id().as_uuid().to_string(),
                    record.amount().to_decimal_string(),
                    record.category().to_string(),
                    record.description().to_string(),
                    record.date().format(DATE_FORMAT).to_string(),
                ])?;
            }
            csv_writer.flush()?;
            Ok(())
        })?;

        debug!(
            path = %self.path.display(),
            count = self.records.len(),
            "saved expenses"
        );
        Ok(())
    }
}

/// Record store that lives entirely in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Vec<ExpenseRecord>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with records
    pub fn with_records(records: Vec<ExpenseRecord>) -> ExpenseResult<Self> {
        let mut store = Self::new();
        for record in records {
            store.append(record)?;
        }
        Ok(store)
    }
}

impl RecordStore for MemoryStore {
    fn load(&mut self) -> ExpenseResult<()> {
        Ok(())
    }

    fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    fn append(&mut self, record: ExpenseRecord) -> ExpenseResult<()> {
        push_unique(&mut self.records, record)
    }

    fn remove(&mut self, id: ExpenseId) -> ExpenseResult<Option<ExpenseRecord>> {
        Ok(remove_by_id(&mut self.records, id))
    }

    fn save(&self) -> ExpenseResult<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn create_test_store() -> (TempDir, CsvExpenseStore) {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("expenses.csv");
        (temp_dir, CsvExpenseStore::new(path))
    }

    fn expense(cents: i64, category: &str, description: &str, date: &str) -> ExpenseRecord {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap();
        ExpenseRecord::new(Money::from_cents(cents), category, description, date).unwrap()
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let (_temp_dir, mut store) = create_test_store();
        store.load().unwrap();
        assert!(store.records().is_empty());
    }

    #[test]
    fn test_save_and_reload_preserves_order() {
        let (_temp_dir, mut store) = create_test_store();
        let first = expense(1000, "Food", "Lunch, with friends", "2024-01-05");
        let second = expense(550, "Transport", "Bus \"express\"", "2024-01-04");

        store.append(first.clone()).unwrap();
        store.append(second.clone()).unwrap();
        store.save().unwrap();

        let mut reloaded = CsvExpenseStore::new(store.path().clone());
        reloaded.load().unwrap();
        assert_eq!(reloaded.records(), &[first, second]);
    }

    #[test]
    fn test_empty_store_writes_header() {
        let (_temp_dir, store) = create_test_store();
        store.save().unwrap();

        let contents = fs::read_to_string(store.path()).unwrap();
        assert_eq!(contents.trim(), "id,amount,category,description,date");
    }

    #[test]
    fn test_load_file_without_id_column() {
        let (_temp_dir, mut store) = create_test_store();
        fs::write(
            store.path(),
            "amount,category,description,date\n10,Food,Lunch,2024-01-05\n5,Transport,Bus,2024-01-06\n",
        )
        .unwrap();

        store.load().unwrap();
        assert_eq!(store.records().len(), 2);
        assert_eq!(store.records()[0].amount(), Money::from_cents(1000));
        assert_eq!(store.records()[1].category(), "Transport");
        assert_ne!(store.records()[0].id(), store.records()[1].id());
    }

    #[test]
    fn test_assigned_ids_are_written_back() {
        let (_temp_dir, mut store) = create_test_store();
        fs::write(
            store.path(),
            "amount,category,description,date\n10,Food,Lunch,2024-01-05\n",
        )
        .unwrap();

        store.load().unwrap();
        let id = store.records()[0].id();
        let contents = fs::read_to_string(store.path()).unwrap();
        assert!(contents.starts_with("id,amount,category,description,date"));
        assert!(contents.contains(&id.as_uuid().to_string()));

        let mut reloaded = CsvExpenseStore::new(store.path().clone());
        reloaded.load().unwrap();
        assert_eq!(reloaded.records()[0].id(), id);
    }

    #[test]
    fn test_load_rejects_malformed_rows() {
        let (_temp_dir, mut store) = create_test_store();

        fs::write(
            store.path(),
            "amount,category,description,date\n10,Food,Lunch,2024-13-05\n",
        )
        .unwrap();
        let err = store.load().unwrap_err();
        assert!(err.is_invalid_record());
        assert!(err.to_string().contains("line 2"));

        fs::write(
            store.path(),
            "amount,category,description,date\n-3,Food,Lunch,2024-01-05\n",
        )
        .unwrap();
        assert!(store.load().unwrap_err().is_invalid_record());
    }

    #[test]
    fn test_remove() {
        let (_temp_dir, mut store) = create_test_store();
        let record = expense(100, "Food", "Snack", "2024-01-01");
        let id = record.id();
        store.append(record).unwrap();

        assert_eq!(store.remove(id).unwrap().map(|r| r.id()), Some(id));
        assert!(store.remove(id).unwrap().is_none());
        assert!(store.records().is_empty());
    }

    #[test]
    fn test_append_duplicate_id_rejected() {
        let mut store = MemoryStore::new();
        let record = expense(100, "Food", "Snack", "2024-01-01");
        store.append(record.clone()).unwrap();

        let err = store.append(record).unwrap_err();
        assert!(matches!(err, ExpenseError::Duplicate { .. }));
    }
}
