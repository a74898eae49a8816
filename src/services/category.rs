//! Category service
//!
//! Provides business logic for the category registry: normalizing names,
//! registering new categories and resolving user input to stored names.

use std::collections::BTreeMap;

use crate::audit::EntityType;
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::category::title_case;
use crate::models::normalize_category_name;
use crate::storage::Storage;

/// Service for category management
pub struct CategoryService<'a> {
    storage: &'a mut Storage,
}

impl<'a> CategoryService<'a> {
    pub fn new(storage: &'a mut Storage) -> Self {
        Self { storage }
    }

    /// All registered categories with the number of expenses filed under each
    pub fn list_with_counts(&self) -> Vec<(String, usize)> {
        let mut counts: BTreeMap<String, usize> = self
            .storage
            .categories
            .get_all()
            .into_iter()
            .map(|name| (name, 0))
            .collect();

        for record in self.storage.expenses.records() {
            *counts.entry(record.category().to_string()).or_default() += 1;
        }

        counts.into_iter().collect()
    }

    /// Register a new category
    ///
    /// # Errors
    ///
    /// `Validation` if the name is not letters and spaces, `Duplicate` if the
    /// normalized name is already registered.
    pub fn add(&mut self, name: &str) -> ExpenseResult<String> {
        let name = normalize_category_name(name)?;

        if self.storage.categories.contains(&name) {
            return Err(ExpenseError::Duplicate {
                entity_type: "Category",
                identifier: name,
            });
        }

        self.register(name)
    }

    /// Insert an already-normalized name, persist the registry and audit it
    pub fn register(&mut self, name: impl Into<String>) -> ExpenseResult<String> {
        let name = name.into();
        self.storage.categories.insert(name.clone());
        self.storage.categories.save()?;
        self.storage
            .log_create(EntityType::Category, name.clone(), Some(name.clone()), &name);

        Ok(name)
    }

    /// Check a category typed for a new expense against the registry
    ///
    /// Returns true when the name is unknown and `create` allows registering
    /// it. Nothing is registered here; the caller does that once the expense
    /// itself is saved.
    pub fn check_for_new_expense(&self, input: &str, create: bool) -> ExpenseResult<bool> {
        let name = normalize_category_name(input)?;

        if self.storage.categories.contains(&name) {
            return Ok(false);
        }
        if create {
            return Ok(true);
        }

        Err(ExpenseError::Validation(format!(
            "Unknown category '{}'. Use --new-category to create it, or pick one of: {}",
            name,
            self.storage.categories.get_all().join(", ")
        )))
    }

    /// Map a filter argument onto the stored spelling
    ///
    /// An exact match against the registry wins; otherwise the input is
    /// title-cased the way new categories are.
    pub fn resolve_for_filter(&self, input: &str) -> String {
        let trimmed = input.trim();
        if self.storage.categories.contains(trimmed) {
            trimmed.to_string()
        } else {
            title_case(trimmed)
        }
    }
}
