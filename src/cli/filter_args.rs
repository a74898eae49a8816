//! Filter flags shared by `list`, `summary` and `export`

use chrono::NaiveDate;
use clap::Args;

use crate::error::{ExpenseError, ExpenseResult};
use crate::models::Period;
use crate::services::{CategoryService, FilterCriteria};
use crate::storage::Storage;

/// Flags selecting a subset of expenses
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Only expenses in this category
    #[arg(short, long)]
    pub category: Option<String>,

    /// Only expenses in this period: day, week, month or year
    #[arg(short, long)]
    pub period: Option<String>,

    /// Reference date for --period (YYYY-MM-DD, default: today)
    #[arg(short, long, requires = "period")]
    pub date: Option<String>,
}

impl FilterArgs {
    /// Build filter criteria, resolving the category against the registry
    pub fn to_criteria(&self, storage: &mut Storage, today: NaiveDate) -> ExpenseResult<FilterCriteria> {
        let mut criteria = FilterCriteria::new();

        if let Some(category) = &self.category {
            let resolved = CategoryService::new(storage).resolve_for_filter(category);
            criteria = criteria.category(resolved);
        }

        if let Some(period) = &self.period {
            let period: Period = period.parse()?;
            let reference = match &self.date {
                Some(date) => parse_date(date)?,
                None => today,
            };
            criteria = criteria.period(period, reference);
        }

        Ok(criteria)
    }
}

/// Heading suffix describing the period criterion, e.g. " Of Current Month"
pub fn period_label(criteria: &FilterCriteria, today: NaiveDate) -> String {
    let mut label = String::new();

    if let Some(period) = criteria.period {
        let window = period.window();
        if window.contains(today) {
            label.push_str(&format!(" Of Current {}", period.period.title()));
        } else {
            label.push_str(&format!(" Of {} {}", period.period.title(), window));
        }
    }
    if let Some(category) = &criteria.category {
        label.push_str(&format!(" In {}", category));
    }

    label
}

/// Parse a YYYY-MM-DD date argument
pub fn parse_date(s: &str) -> ExpenseResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
        ExpenseError::Validation(format!("Invalid date '{}'. Use YYYY-MM-DD", s))
    })
}
