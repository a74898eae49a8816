//! Category CLI commands

use clap::Subcommand;

use crate::display::format_category_list;
use crate::error::ExpenseResult;
use crate::services::CategoryService;
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand, Debug)]
pub enum CategoryCommands {
    /// List all categories with their expense counts
    List,

    /// Register a new category (letters and spaces only)
    Add {
        /// Category name
        name: String,
    },
}

/// Handle a category command
pub fn handle_category_command(storage: &mut Storage, cmd: CategoryCommands) -> ExpenseResult<()> {
    let mut service = CategoryService::new(storage);

    match cmd {
        CategoryCommands::List => {
            print!("{}", format_category_list(&service.list_with_counts()));
        }
        CategoryCommands::Add { name } => {
            let name = service.add(&name)?;
            println!("{} is added as a new category", name);
        }
    }

    Ok(())
}
