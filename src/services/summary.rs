//! Summary engine
//!
//! Aggregates per-category totals and a grand total over a set of records.
//! Amounts are integer cents, so totals are exact.

use std::collections::BTreeMap;

use serde::Serialize;
use tracing::debug;

use crate::models::{ExpenseRecord, Money};

/// Totals per category plus a grand total
///
/// Categories iterate in sorted order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SummaryResult {
    pub totals: BTreeMap<String, Money>,
    pub grand_total: Money,
}

impl SummaryResult {
    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }

    /// Total for one category, zero if the category is absent
    pub fn total_for(&self, category: &str) -> Money {
        self.totals.get(category).copied().unwrap_or_default()
    }

    /// (category, total) pairs in sorted category order
    pub fn iter(&self) -> impl Iterator<Item = (&str, Money)> {
        self.totals.iter().map(|(c, m)| (c.as_str(), *m))
    }
}

/// Group records by category and sum their amounts
pub fn summarize(records: &[ExpenseRecord]) -> SummaryResult {
    let mut totals: BTreeMap<String, Money> = BTreeMap::new();

    for record in records {
        *totals.entry(record.category().to_string()).or_default() += record.amount();
    }

    let grand_total = totals.values().sum();

    debug!(
        records = records.len(),
        categories = totals.len(),
        "summarized expenses"
    );

    SummaryResult {
        totals,
        grand_total,
    }
}
