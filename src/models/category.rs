//! Category names
//!
//! Categories are plain names. Names typed by the user are normalized to
//! title case and may only contain letters and spaces.

use crate::error::ExpenseError;

/// Normalize a user-typed category name ("dining OUT" -> "Dining Out")
///
/// Leading and trailing whitespace is dropped and inner runs of whitespace
/// collapse to one space.
pub fn normalize_category_name(input: &str) -> Result<String, ExpenseError> {
    let collapsed = input.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.is_empty() {
        return Err(ExpenseError::Validation(
            "Category name cannot be empty".into(),
        ));
    }

    if !collapsed.chars().all(|c| c.is_alphabetic() || c == ' ') {
        return Err(ExpenseError::Validation(format!(
            "Category name may only contain letters and spaces: '{}'",
            input.trim()
        )));
    }

    Ok(title_case(&collapsed))
}

/// Uppercase the first letter of every word and lowercase the rest
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;
    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }
    out
}
