//! CLI command for viewing the audit log

use crate::error::ExpenseResult;
use crate::storage::Storage;

/// Handle `audit`: print the most recent entries, oldest first
pub fn handle_audit(storage: &Storage, limit: usize) -> ExpenseResult<()> {
    let Some(logger) = storage.audit() else {
        println!("Audit logging is disabled in settings.");
        return Ok(());
    };

    let entries = logger.read_recent(limit)?;
    if entries.is_empty() {
        println!("No audit entries.");
        return Ok(());
    }

    for entry in &entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
