//! expense-tracker - command-line personal expense tracking
//!
//! This library provides the core of the `expense` binary: expense records
//! kept in a flat CSV file, a filter engine that selects records by category
//! and calendar period, and a summary engine that totals the selection per
//! category with exact decimal arithmetic.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (money, expense records, periods)
//! - `storage`: CSV record store and JSON category registry
//! - `services`: Filter and summary engines plus business logic
//! - `audit`: Audit logging system
//! - `display`: Terminal output formatting
//! - `export`: CSV, JSON and YAML export
//! - `cli`: Command handlers for the binary
//! - `logging`: Diagnostic `tracing` setup
//!
//! # Example
//!
//! ```rust,ignore
//! use expense_tracker::config::{ExpensePaths, Settings};
//! use expense_tracker::services::{summarize, FilterCriteria};
//! use expense_tracker::storage::Storage;
//!
//! let paths = ExpensePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let mut storage = Storage::new(paths, &settings)?;
//! storage.load_all()?;
//!
//! let criteria = FilterCriteria::new().category("Food");
//! let summary = summarize(&expense_tracker::services::filter(storage.expenses.records(), &criteria));
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::ExpenseError;
