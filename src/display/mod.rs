//! Display formatting for terminal output

pub mod expense;
pub mod summary;

pub use expense::{format_expense_details, format_expense_table};
pub use summary::{format_category_list, format_summary};
