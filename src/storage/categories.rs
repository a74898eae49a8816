//! Category registry repository
//!
//! Manages loading and saving the known category names to categories.json

use std::collections::BTreeSet;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ExpenseError;

use super::file_io::{read_json, write_json_atomic};

/// Serializable category data structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CategoryData {
    #[serde(default)]
    pub categories: Vec<String>,
}

/// Repository for the category registry
pub struct CategoryRepository {
    path: PathBuf,
    names: BTreeSet<String>,
}

impl CategoryRepository {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            names: BTreeSet::new(),
        }
    }

    /// Load categories from disk
    pub fn load(&mut self) -> Result<(), ExpenseError> {
        let file_data: CategoryData = read_json(&self.path)?;
        self.names = file_data.categories.into_iter().collect();
        Ok(())
    }

    /// Save categories to disk
    pub fn save(&self) -> Result<(), ExpenseError> {
        let file_data = CategoryData {
            categories: self.names.iter().cloned().collect(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// All registered names, sorted
    pub fn get_all(&self) -> Vec<String> {
        self.names.iter().cloned().collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Register a name. Returns false if it was already present.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    pub fn count(&self) -> usize {
        self.names.len()
    }
}
