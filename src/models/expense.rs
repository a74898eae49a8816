//! Expense record model
//!
//! An expense is immutable once created. All constructors validate the record
//! invariants, so any `ExpenseRecord` in hand is well-formed.

use chrono::NaiveDate;
use serde::Serialize;

use super::ids::ExpenseId;
use super::money::Money;
use crate::error::ExpenseError;

/// A single logged expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpenseRecord {
    id: ExpenseId,
    amount: Money,
    category: String,
    description: String,
    date: NaiveDate,
}

impl ExpenseRecord {
    /// Create a new expense with a fresh ID
    ///
    /// # Errors
    ///
    /// Returns `InvalidRecord` if the amount is negative or the category or
    /// description is blank.
    pub fn new(
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Result<Self, ExpenseError> {
        Self::with_id(ExpenseId::new(), amount, category, description, date)
    }

    /// Rebuild an expense with a known ID (e.g. when loading from storage)
    pub fn with_id(
        id: ExpenseId,
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
        date: NaiveDate,
    ) -> Result<Self, ExpenseError> {
        let record = Self {
            id,
            amount,
            category: category.into(),
            description: description.into(),
            date,
        };
        record.validate()?;
        Ok(record)
    }

    fn validate(&self) -> Result<(), ExpenseError> {
        if self.amount.is_negative() {
            return Err(ExpenseError::InvalidRecord(format!(
                "amount cannot be negative: {}",
                self.amount
            )));
        }
        if self.amount > Money::MAX_AMOUNT {
            return Err(ExpenseError::InvalidRecord(format!(
                "amount {} exceeds the maximum of {}",
                self.amount,
                Money::MAX_AMOUNT
            )));
        }
        if self.category.trim().is_empty() {
            return Err(ExpenseError::InvalidRecord(
                "category cannot be empty".into(),
            ));
        }
        if self.description.trim().is_empty() {
            return Err(ExpenseError::InvalidRecord(
                "description cannot be empty".into(),
            ));
        }
        Ok(())
    }

    pub fn id(&self) -> ExpenseId {
        self.id
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}
