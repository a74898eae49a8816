//! Expense display formatting
//!
//! Renders expense lists as a table for terminal output.

use std::fmt::Write;

use chrono::NaiveDate;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::models::ExpenseRecord;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl ExpenseRow {
    fn from_record(record: &ExpenseRecord, settings: &Settings) -> Self {
        Self {
            id: record.id().to_string(),
            date: format_date(record.date(), &settings.date_format),
            category: record.category().to_string(),
            description: truncate(record.description(), 40),
            amount: record.amount().format_with_symbol(&settings.currency_symbol),
        }
    }
}

/// Format a list of expenses as a table
pub fn format_expense_table(records: &[ExpenseRecord], settings: &Settings) -> String {
    if records.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let rows = records
        .iter()
        .map(|r| ExpenseRow::from_record(r, settings));

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .with(Modify::new(Columns::single(4)).with(Alignment::right()));

    format!("{}\n", table)
}

/// Format one expense for confirmation messages
pub fn format_expense_details(record: &ExpenseRecord, settings: &Settings) -> String {
    let mut output = String::new();
    output.push_str(&format!("Expense:     {}\n", record.id()));
    output.push_str(&format!(
        "Date:        {}\n",
        format_date(record.date(), &settings.date_format)
    ));
    output.push_str(&format!(
        "Amount:      {}\n",
        record.amount().format_with_symbol(&settings.currency_symbol)
    ));
    output.push_str(&format!("Category:    {}\n", record.category()));
    output.push_str(&format!("Description: {}\n", record.description()));
    output
}

/// Format a date with a user pattern, falling back to ISO on a bad pattern
fn format_date(date: NaiveDate, pattern: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(pattern)).is_err() {
        return date.format("%Y-%m-%d").to_string();
    }
    out
}

/// Truncate a string to a maximum number of characters
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", kept)
    }
}
