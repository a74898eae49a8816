//! Expense CLI commands
//!
//! Implements `add`, `list`, `summary` and `delete`.

use clap::Args;

use crate::config::Settings;
use crate::display::{format_expense_details, format_expense_table, format_summary};
use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Money;
use crate::services::{CreateExpenseInput, ExpenseService};
use crate::storage::Storage;

use super::filter_args::{parse_date, period_label, FilterArgs};
use super::today;

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Amount spent (e.g. "12", "12.50")
    pub amount: String,

    /// Category name (see 'category list')
    pub category: String,

    /// What the money was spent on
    pub description: String,

    /// Expense date (YYYY-MM-DD, default: today)
    #[arg(short, long)]
    pub date: Option<String>,

    /// Register the category if it does not exist yet
    #[arg(long)]
    pub new_category: bool,
}

/// Handle `add`
pub fn handle_add(storage: &mut Storage, settings: &Settings, args: AddArgs) -> ExpenseResult<()> {
    let amount = Money::parse(&args.amount)
        .map_err(|e| ExpenseError::Validation(format!("Invalid amount: {}", e)))?;
    let date = match args.date.as_deref() {
        Some(d) => parse_date(d)?,
        None => today(),
    };

    let record = ExpenseService::new(storage).create(CreateExpenseInput {
        amount,
        category: args.category,
        description: args.description,
        date,
        create_category: args.new_category,
    })?;

    println!("Added expense:");
    print!("{}", format_expense_details(&record, settings));
    Ok(())
}

/// Handle `list`
pub fn handle_list(storage: &mut Storage, settings: &Settings, args: FilterArgs) -> ExpenseResult<()> {
    let criteria = args.to_criteria(storage, today())?;
    let records = ExpenseService::new(storage).list(&criteria);

    print!("{}", format_expense_table(&records, settings));
    if !records.is_empty() {
        println!("{} expense(s)", records.len());
    }
    Ok(())
}

/// Handle `summary`
pub fn handle_summary(storage: &mut Storage, settings: &Settings, args: FilterArgs) -> ExpenseResult<()> {
    let today = today();
    let criteria = args.to_criteria(storage, today)?;
    let summary = ExpenseService::new(storage).summary(&criteria);

    print!(
        "{}",
        format_summary(&summary, &period_label(&criteria, today), settings)
    );
    Ok(())
}

/// Handle `delete`
pub fn handle_delete(storage: &mut Storage, settings: &Settings, id: String) -> ExpenseResult<()> {
    let removed = ExpenseService::new(storage).delete(&id)?;

    println!("Deleted expense:");
    print!("{}", format_expense_details(&removed, settings));
    Ok(())
}
