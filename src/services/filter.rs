//! Filter engine
//!
//! Selects the records matching a set of [`FilterCriteria`]. The result is
//! always an order-preserving subsequence of the input, and an empty result is
//! not an error.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::debug;

use crate::models::{DateWindow, ExpenseRecord, Period};

/// A period anchored at a reference date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PeriodFilter {
    pub period: Period,
    pub reference: NaiveDate,
}

impl PeriodFilter {
    pub fn new(period: Period, reference: NaiveDate) -> Self {
        Self { period, reference }
    }

    pub fn window(&self) -> DateWindow {
        self.period.window(self.reference)
    }
}

/// Conjunctive filter over expense records
///
/// A `None` criterion matches every record in that dimension.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FilterCriteria {
    /// Exact, case-sensitive category match
    pub category: Option<String>,
    pub period: Option<PeriodFilter>,
}

impl FilterCriteria {
    /// Create a new empty filter (matches everything)
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by category
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Filter by the period window containing `reference`
    pub fn period(mut self, period: Period, reference: NaiveDate) -> Self {
        self.period = Some(PeriodFilter::new(period, reference));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.category.is_none() && self.period.is_none()
    }

    /// The date window selected by the period criterion, if any
    pub fn window(&self) -> Option<DateWindow> {
        self.period.map(|p| p.window())
    }

    /// Check whether a single record satisfies every criterion
    pub fn matches(&self, record: &ExpenseRecord) -> bool {
        self.matches_in(record, self.window())
    }

    fn matches_in(&self, record: &ExpenseRecord, window: Option<DateWindow>) -> bool {
        let category_ok = self
            .category
            .as_deref()
            .map_or(true, |c| record.category() == c);
        let date_ok = window.map_or(true, |w| w.contains(record.date()));
        category_ok && date_ok
    }
}

/// Return the records matching `criteria`, in their original order
pub fn filter(records: &[ExpenseRecord], criteria: &FilterCriteria) -> Vec<ExpenseRecord> {
    let window = criteria.window();
    let matched: Vec<ExpenseRecord> = records
        .iter()
        .filter(|r| criteria.matches_in(r, window))
        .cloned()
        .collect();

    debug!(
        input = records.len(),
        matched = matched.len(),
        category = ?criteria.category,
        window = ?window,
        "filtered expenses"
    );
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn expense(units: i64, category: &str, day: &str) -> ExpenseRecord {
        ExpenseRecord::new(Money::from_units_cents(units, 0), category, "item", date(day)).unwrap()
    }

    fn sample() -> Vec<ExpenseRecord> {
        vec![
            expense(10, "food", "2024-01-05"),
            expense(20, "food", "2024-02-01"),
            expense(5, "transport", "2024-01-05"),
        ]
    }

    #[test]
    fn test_empty_criteria_passes_everything() {
        let records = sample();
        assert_eq!(filter(&records, &FilterCriteria::new()), records);
    }

    #[test]
    fn test_month_filter_keeps_january() {
        let records = sample();
        let criteria = FilterCriteria::new().period(Period::Month, date("2024-01-15"));

        let result = filter(&records, &criteria);
        assert_eq!(result, vec![records[0].clone(), records[2].clone()]);
    }

    #[test]
    fn test_category_is_case_sensitive() {
        let records = sample();
        assert_eq!(filter(&records, &FilterCriteria::new().category("food")).len(), 2);
        assert!(filter(&records, &FilterCriteria::new().category("Food")).is_empty());
    }

    #[test]
    fn test_criteria_are_conjunctive() {
        let records = sample();
        let criteria = FilterCriteria::new()
            .category("food")
            .period(Period::Month, date("2024-01-31"));

        assert_eq!(filter(&records, &criteria), vec![records[0].clone()]);
    }

    #[test]
    fn test_week_window_boundaries_inclusive() {
        let records = vec![
            expense(1, "a", "2024-01-07"), // Sunday before
            expense(2, "a", "2024-01-08"), // Monday
            expense(3, "a", "2024-01-14"), // Sunday
            expense(4, "a", "2024-01-15"), // next Monday
        ];
        let criteria = FilterCriteria::new().period(Period::Week, date("2024-01-10"));

        let result = filter(&records, &criteria);
        assert_eq!(result, records[1..3].to_vec());
    }

    #[test]
    fn test_day_and_year() {
        let records = sample();
        let day = FilterCriteria::new().period(Period::Day, date("2024-01-05"));
        assert_eq!(filter(&records, &day).len(), 2);

        let year = FilterCriteria::new().period(Period::Year, date("2023-06-01"));
        assert!(filter(&records, &year).is_empty());
    }

    #[test]
    fn test_empty_input() {
        let criteria = FilterCriteria::new().category("food");
        assert!(filter(&[], &criteria).is_empty());
    }
}
