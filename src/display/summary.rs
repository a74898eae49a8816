//! Summary and category display formatting

use crate::config::Settings;
use crate::services::SummaryResult;

const WIDTH: usize = 50;

/// Format a summary with total and category breakdown
///
/// `label` is appended to the heading, e.g. " Of Month 2024-01-01..2024-01-31".
pub fn format_summary(summary: &SummaryResult, label: &str, settings: &Settings) -> String {
    let symbol = &settings.currency_symbol;
    let mut output = String::new();

    output.push_str(&"-".repeat(WIDTH));
    output.push('\n');
    output.push_str(&format!(
        "Total Expenses{}: {}\n",
        label,
        summary.grand_total.format_with_symbol(symbol)
    ));
    output.push_str("Category Breakdown:\n");

    if summary.is_empty() {
        output.push_str("    (no expenses)\n");
    }

    let name_width = summary
        .iter()
        .map(|(c, _)| c.chars().count())
        .max()
        .unwrap_or(0);
    for (category, total) in summary.iter() {
        output.push_str(&format!(
            "    - {:<width$} : {}\n",
            category,
            total.format_with_symbol(symbol),
            width = name_width
        ));
    }

    output.push_str(&"-".repeat(WIDTH));
    output.push('\n');
    output
}

/// Format the category registry with usage counts
pub fn format_category_list(categories: &[(String, usize)]) -> String {
    if categories.is_empty() {
        return "No categories yet. Add one with 'expense category add <name>'.\n".to_string();
    }

    let mut output = String::from("Categories:\n");
    for (name, count) in categories {
        let noun = if *count == 1 { "expense" } else { "expenses" };
        output.push_str(&format!("  {} ({} {})\n", name, count, noun));
    }
    output
}
