//! Expense service
//!
//! Creating, finding, listing, summarizing and removing expense records on top
//! of the storage layer.

use chrono::NaiveDate;
use tracing::info;

use crate::audit::EntityType;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{normalize_category_name, ExpenseId, ExpenseRecord, Money};
use crate::storage::Storage;

use super::category::CategoryService;
use super::filter::{filter, FilterCriteria};
use super::summary::{summarize, SummaryResult};

/// Input for creating a new expense
#[derive(Debug, Clone)]
pub struct CreateExpenseInput {
    pub amount: Money,
    /// Category as typed by the user; normalized before storing
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
    /// Register the category if it is not known yet
    pub create_category: bool,
}

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a mut Storage,
}

impl<'a> ExpenseService<'a> {
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// Create, store and persist a new expense
    pub fn create(&mut self, input: CreateExpenseInput) -> ExpenseResult<ExpenseRecord> {
        // The registry only changes once the record is safely stored
        let record = ExpenseRecord::new(
            input.amount,
            normalize_category_name(&input.category)?,
            input.description.trim(),
            input.date,
        )?;
        let new_category = CategoryService::new(self.storage)
            .check_for_new_expense(record.category(), input.create_category)?;

        self.storage.expenses.append(record.clone())?;
        if let Err(e) = self.storage.expenses.save() {
            self.storage.expenses.remove(record.id())?;
            return Err(e);
        }

        self.storage.log_create(
            EntityType::Expense,
            record.id().to_string(),
            Some(format!("{} {}", record.date(), record.description())),
            &record,
        );
        if new_category {
            CategoryService::new(self.storage).register(record.category())?;
        }
        info!(id = %record.id(), amount = %record.amount(), category = record.category(), "expense added");

        Ok(record)
    }

    /// Records matching the criteria, in storage order
    pub fn list(&self, criteria: &FilterCriteria) -> Vec<ExpenseRecord> {
        filter(self.storage.expenses.records(), criteria)
    }

    /// Summary of the records matching the criteria
    pub fn summary(&self, criteria: &FilterCriteria) -> SummaryResult {
        summarize(&self.list(criteria))
    }

    /// Find an expense by full UUID, short ID ("exp-1a2b3c4d") or ID prefix
    ///
    /// # Errors
    ///
    /// `Validation` if a prefix matches more than one expense.
    pub fn find(&self, identifier: &str) -> ExpenseResult<Option<ExpenseRecord>> {
        let mut matches = self
            .storage
            .expenses
            .records()
            .iter()
            .filter(|r| r.id().matches(identifier));

        let first = matches.next().cloned();
        if matches.next().is_some() {
            return Err(ExpenseError::Validation(format!(
                "'{}' matches more than one expense; use a longer ID",
                identifier
            )));
        }
        Ok(first)
    }

    /// Remove an expense and persist the change
    pub fn delete(&mut self, identifier: &str) -> ExpenseResult<ExpenseRecord> {
        let record = self
            .find(identifier)?
            .ok_or_else(|| ExpenseError::expense_not_found(identifier))?;

        self.remove_by_id(record.id())
    }

    fn remove_by_id(&mut self, id: ExpenseId) -> ExpenseResult<ExpenseRecord> {
        let removed = self
            .storage
            .expenses
            .remove(id)?
            .ok_or_else(|| ExpenseError::expense_not_found(id.to_string()))?;
        self.storage.expenses.save()?;

        self.storage.log_delete(
            EntityType::Expense,
            removed.id().to_string(),
            Some(format!("{} {}", removed.date(), removed.description())),
            &removed,
        );
        info!(id = %removed.id(), "expense deleted");

        Ok(removed)
    }

    pub fn count(&self) -> usize {
        self.storage.expenses.records().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::config::{ExpensePaths, Settings};
    use crate::models::Period;
    use crate::storage::{MemoryStore, RecordStore};
    use tempfile::TempDir;

    /// Store whose saves always fail
    struct ReadOnlyStore(MemoryStore);

    impl RecordStore for ReadOnlyStore {
        fn load(&mut self) -> ExpenseResult<()> {
            Ok(())
        }

        fn records(&self) -> &[ExpenseRecord] {
            self.0.records()
        }

        fn append(&mut self, record: ExpenseRecord) -> ExpenseResult<()> {
            self.0.append(record)
        }

        fn remove(&mut self, id: ExpenseId) -> ExpenseResult<Option<ExpenseRecord>> {
            self.0.remove(id)
        }

        fn save(&self) -> ExpenseResult<()> {
            Err(ExpenseError::Storage("read-only".into()))
        }
    }

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths, &Settings::default()).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn input(amount: &str, category: &str, day: &str) -> CreateExpenseInput {
        CreateExpenseInput {
            amount: Money::parse(amount).unwrap(),
            category: category.to_string(),
            description: "Something".to_string(),
            date: date(day),
            create_category: true,
        }
    }

    #[test]
    fn test_create_persists_and_audits() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = ExpenseService::new(&mut storage);

        let record = service.create(input("12.34", "food", "2024-01-05")).unwrap();
        assert_eq!(record.category(), "Food");
        assert_eq!(service.count(), 1);

        let paths = storage.paths().clone();
        let contents = std::fs::read_to_string(paths.expenses_file()).unwrap();
        assert!(contents.contains("12.34,Food,Something,2024-01-05"));

        let entries = storage.audit().unwrap().read_all().unwrap();
        // expense creation, then the category it introduced
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].entity_type, EntityType::Expense);
        assert_eq!(entries[1].entity_type, EntityType::Category);
        assert!(storage.categories.contains("Food"));
    }

    #[test]
    fn test_create_rejects_unknown_category_without_flag() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = ExpenseService::new(&mut storage);

        let mut req = input("1", "Food", "2024-01-05");
        req.create_category = false;
        let err = service.create(req).unwrap_err();
        assert!(matches!(err, ExpenseError::Validation(_)));
        assert_eq!(service.count(), 0);
    }

    #[test]
    fn test_create_rejects_negative_amount() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = ExpenseService::new(&mut storage);

        let err = service.create(input("-5", "Food", "2024-01-05")).unwrap_err();
        assert!(err.is_invalid_record());
        assert_eq!(service.count(), 0);
    }

    #[test]
    fn test_list_and_summary_use_criteria() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = ExpenseService::new(&mut storage);
        service.create(input("10", "Food", "2024-01-05")).unwrap();
        service.create(input("20", "Food", "2024-02-01")).unwrap();
        service.create(input("5", "Transport", "2024-01-05")).unwrap();

        let january = FilterCriteria::new().period(Period::Month, date("2024-01-15"));
        assert_eq!(service.list(&january).len(), 2);

        let summary = service.summary(&january);
        assert_eq!(summary.total_for("Food"), Money::from_cents(1000));
        assert_eq!(summary.total_for("Transport"), Money::from_cents(500));
        assert_eq!(summary.grand_total, Money::from_cents(1500));
    }

    #[test]
    fn test_find_and_delete() {
        let (_temp_dir, mut storage) = create_test_storage();
        let mut service = ExpenseService::new(&mut storage);
        let record = service.create(input("3", "Food", "2024-01-05")).unwrap();

        let found = service.find(&record.id().to_string()).unwrap();
        assert_eq!(found.as_ref().map(|r| r.id()), Some(record.id()));

        let removed = service.delete(&record.id().to_string()).unwrap();
        assert_eq!(removed, record);
        assert_eq!(service.count(), 0);

        let err = service.delete(&record.id().to_string()).unwrap_err();
        assert!(err.is_not_found());

        let last = storage.audit().unwrap().read_recent(1).unwrap();
        assert_eq!(last[0].operation, Operation::Delete);
    }

    #[test]
    fn test_failed_save_leaves_no_category_behind() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ExpensePaths::with_base_dir(temp_dir.path().to_path_buf());
        let store = Box::new(ReadOnlyStore(MemoryStore::new()));
        let mut storage = Storage::with_record_store(paths, &Settings::default(), store).unwrap();
        storage.load_all().unwrap();

        let mut service = ExpenseService::new(&mut storage);
        let err = service.create(input("9.99", "travel", "2024-03-01")).unwrap_err();
        assert!(matches!(err, ExpenseError::Storage(_)));
        assert_eq!(service.count(), 0);

        assert!(!storage.categories.contains("Travel"));
        assert!(!storage.paths().categories_file().exists());
        assert!(storage.audit().unwrap().read_all().unwrap().is_empty());
    }
}
