//! Core data models for the expense tracker
//!
//! Expense records, money amounts, filter periods and category names.

pub mod category;
pub mod expense;
pub mod ids;
pub mod money;
pub mod period;

pub use category::normalize_category_name;
pub use expense::ExpenseRecord;
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
pub use period::{DateWindow, Period};
