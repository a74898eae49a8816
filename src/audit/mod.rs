//! Audit logging for the expense tracker
//!
//! Records every create and delete of expenses and categories in an
//! append-only, line-delimited JSON log.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
