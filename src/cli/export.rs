//! CLI command for data export
//!
//! Writes the selected expenses to a file as CSV, JSON or YAML.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::error::{ExpenseError, ExpenseResult};
use crate::export::{export_expenses_csv, export_json, export_yaml, ExpenseExport};
use crate::storage::Storage;

use super::filter_args::FilterArgs;
use super::today;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV format (records only)
    Csv,
    /// JSON format (records, criteria and summary)
    Json,
    /// YAML format (records, criteria and summary)
    Yaml,
}

/// Arguments for `export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path
    pub output: PathBuf,

    /// Export format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    #[command(flatten)]
    pub filter: FilterArgs,
}

/// Handle `export`
pub fn handle_export(storage: &mut Storage, args: ExportArgs) -> ExpenseResult<()> {
    let criteria = args.filter.to_criteria(storage, today())?;
    let export = ExpenseExport::build(storage.expenses.records(), &criteria);

    let file = File::create(&args.output).map_err(|e| {
        ExpenseError::Export(format!(
            "Failed to create file {}: {}",
            args.output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    match args.format {
        ExportFormat::Csv => export_expenses_csv(&export.expenses, &mut writer)?,
        ExportFormat::Json => export_json(&export, &mut writer, args.pretty)?,
        ExportFormat::Yaml => export_yaml(&export, &mut writer)?,
    }
    writer
        .flush()
        .map_err(|e| ExpenseError::Export(format!("Failed to write export: {}", e)))?;

    println!(
        "Exported {} expense(s) to: {}",
        export.expenses.len(),
        args.output.display()
    );
    Ok(())
}
