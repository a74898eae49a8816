//! Service layer for the expense tracker
//!
//! The filter and summary engines are pure functions over record slices. The
//! expense and category services add validation, persistence and auditing on
//! top of the storage layer.

pub mod category;
pub mod expense;
pub mod filter;
pub mod summary;

pub use category::CategoryService;
pub use expense::{CreateExpenseInput, ExpenseService};
pub use filter::{filter, FilterCriteria, PeriodFilter};
pub use summary::{summarize, SummaryResult};
