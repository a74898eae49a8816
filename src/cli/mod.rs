//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod audit;
pub mod category;
pub mod expense;
pub mod export;
pub mod filter_args;

pub use audit::handle_audit;
pub use category::{handle_category_command, CategoryCommands};
pub use expense::{handle_add, handle_delete, handle_list, handle_summary, AddArgs};
pub use export::{handle_export, ExportArgs, ExportFormat};
pub use filter_args::FilterArgs;

use chrono::{Local, NaiveDate};

/// Today's date in local time
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}
