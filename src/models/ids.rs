//! Strongly-typed ID wrapper for expense records

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Display prefix for expense IDs
pub const EXPENSE_ID_PREFIX: &str = "exp-";

/// Unique identifier of an expense record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpenseId(Uuid);

impl ExpenseId {
    /// Create a new random ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }

    /// Short display form ("exp-" plus the first 8 hex digits)
    pub fn short(&self) -> String {
        format!("{}{}", EXPENSE_ID_PREFIX, &self.0.to_string()[..8])
    }

    /// Check whether a user-supplied identifier refers to this ID
    ///
    /// Accepts the full UUID, the short display form, or a bare hex prefix of
    /// at least 4 characters.
    pub fn matches(&self, identifier: &str) -> bool {
        let identifier = identifier.trim().to_ascii_lowercase();
        let full = self.0.to_string();
        if identifier == full {
            return true;
        }
        let prefix = identifier
            .strip_prefix(EXPENSE_ID_PREFIX)
            .unwrap_or(&identifier);
        prefix.len() >= 4 && full.starts_with(prefix)
    }
}

impl Default for ExpenseId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ExpenseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short())
    }
}

impl From<Uuid> for ExpenseId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl FromStr for ExpenseId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix(EXPENSE_ID_PREFIX).unwrap_or(s);
        Ok(Self(Uuid::parse_str(s)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_short() {
        let id = ExpenseId::new();
        let shown = id.to_string();
        assert!(shown.starts_with("exp-"));
        assert_eq!(shown.len(), 12);
    }

    #[test]
    fn test_round_trip_through_full_uuid() {
        let id = ExpenseId::new();
        let parsed: ExpenseId = id.as_uuid().to_string().parse().unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn test_matches() {
        let id = ExpenseId::new();
        assert!(id.matches(&id.short()));
        assert!(id.matches(&id.as_uuid().to_string()));
        assert!(id.matches(&id.as_uuid().to_string()[..6]));
        assert!(!id.matches("exp-"));
        assert!(!id.matches("ab"));
    }
}
