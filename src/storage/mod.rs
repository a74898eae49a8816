//! Storage layer for the expense tracker
//!
//! Expense records live in a flat CSV file behind the [`RecordStore`] trait;
//! the category registry and settings are JSON. All writes are atomic.

pub mod categories;
pub mod expenses;
pub mod file_io;

pub use categories::CategoryRepository;
pub use expenses::{CsvExpenseStore, MemoryStore};
pub use file_io::{read_json, write_atomic, write_json_atomic};

use serde::Serialize;
use tracing::warn;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::{ExpensePaths, Settings};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::{ExpenseId, ExpenseRecord};

/// Ordered collection of expense records with explicit persistence
pub trait RecordStore {
    /// Replace the in-memory records with the persisted ones
    fn load(&mut self) -> ExpenseResult<()>;

    /// Records in insertion order
    fn records(&self) -> &[ExpenseRecord];

    /// Add a record at the end. Fails with `Duplicate` if the ID exists.
    fn append(&mut self, record: ExpenseRecord) -> ExpenseResult<()>;

    /// Remove a record by ID, returning it if it was present
    fn remove(&mut self, id: ExpenseId) -> ExpenseResult<Option<ExpenseRecord>>;

    /// Persist the current records
    fn save(&self) -> ExpenseResult<()>;
}

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: ExpensePaths,
    pub expenses: Box<dyn RecordStore>,
    pub categories: CategoryRepository,
    audit: Option<AuditLogger>,
}

impl Storage {
    /// Create a new Storage instance backed by the CSV record file
    pub fn new(paths: ExpensePaths, settings: &Settings) -> Result<Self, ExpenseError> {
        let expenses = Box::new(CsvExpenseStore::new(paths.expenses_file()));
        Self::with_record_store(paths, settings, expenses)
    }

    /// Create a Storage instance around any record store
    pub fn with_record_store(
        paths: ExpensePaths,
        settings: &Settings,
        expenses: Box<dyn RecordStore>,
    ) -> Result<Self, ExpenseError> {
        paths.ensure_directories()?;

        let audit = settings
            .audit_enabled
            .then(|| AuditLogger::new(paths.audit_log()));

        Ok(Self {
            expenses,
            categories: CategoryRepository::new(paths.categories_file()),
            audit,
            paths,
        })
    }

    pub fn paths(&self) -> &ExpensePaths {
        &self.paths
    }

    /// Load all data from disk
    ///
    /// Categories used by stored records are merged into the registry.
    pub fn load_all(&mut self) -> Result<(), ExpenseError> {
        self.expenses.load()?;
        self.categories.load()?;
        for record in self.expenses.records() {
            self.categories.insert(record.category());
        }
        Ok(())
    }

    /// Save all data to disk
    pub fn save_all(&self) -> Result<(), ExpenseError> {
        self.expenses.save()?;
        self.categories.save()?;
        Ok(())
    }

    /// The audit logger, if auditing is enabled
    pub fn audit(&self) -> Option<&AuditLogger> {
        self.audit.as_ref()
    }

    /// Record a create operation in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) {
        let entry = AuditEntry::create(entity_type, entity_id, entity_name, entity);
        self.write_audit(&entry);
    }

    /// Record a delete operation in the audit log
    pub fn log_delete<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) {
        let entry = AuditEntry::delete(entity_type, entity_id, entity_name, entity);
        self.write_audit(&entry);
    }

    // The data change is already persisted at this point; a failing audit
    // write is reported but does not fail the operation.
    fn write_audit(&self, entry: &AuditEntry) {
        if let Some(logger) = &self.audit {
            if let Err(e) = logger.log(entry) {
                warn!(error = %e, "failed to write audit entry");
            }
        }
    }
}
