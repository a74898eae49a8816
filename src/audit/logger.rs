//! Append-only audit log
//!
//! One JSON object per line. Each entry goes out in a single write so a crash
//! can at worst truncate the last line, never interleave two.

use std::collections::VecDeque;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use tracing::debug;

use crate::error::{ExpenseError, ExpenseResult};

use super::entry::AuditEntry;

/// Writes and reads the JSONL audit log
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Append one entry
    pub fn log(&self, entry: &AuditEntry) -> ExpenseResult<()> {
        let mut line = serde_json::to_vec(entry)?;
        line.push(b'\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| ExpenseError::Io(format!("Failed to open audit log: {}", e)))?;
        file.write_all(&line)
            .and_then(|_| file.flush())
            .map_err(|e| ExpenseError::Io(format!("Failed to write audit entry: {}", e)))?;

        debug!(entry = %entry.format_human_readable(), "audit");
        Ok(())
    }

    /// Every entry, oldest first
    pub fn read_all(&self) -> ExpenseResult<Vec<AuditEntry>> {
        let mut entries = Vec::new();
        self.for_each_entry(|entry| entries.push(entry))?;
        Ok(entries)
    }

    /// The last `count` entries, oldest first
    ///
    /// Only `count` entries are held in memory while scanning.
    pub fn read_recent(&self, count: usize) -> ExpenseResult<Vec<AuditEntry>> {
        let mut window = VecDeque::new();
        if count > 0 {
            self.for_each_entry(|entry| {
                if window.len() == count {
                    window.pop_front();
                }
                window.push_back(entry);
            })?;
        }
        Ok(window.into())
    }

    pub fn path(&self) -> &PathBuf {
        &self.log_path
    }

    fn for_each_entry(&self, mut visit: impl FnMut(AuditEntry)) -> ExpenseResult<()> {
        let file = match File::open(&self.log_path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(e) => return Err(ExpenseError::Io(format!("Failed to open audit log: {}", e))),
        };

        for (index, line) in BufReader::new(file).lines().enumerate() {
            let line_no = index + 1;
            let line = line.map_err(|e| {
                ExpenseError::Io(format!("Failed to read audit log line {}: {}", line_no, e))
            })?;
            if line.trim().is_empty() {
                continue;
            }

            let entry: AuditEntry = serde_json::from_str(&line).map_err(|e| {
                ExpenseError::Json(format!("Bad audit entry at line {}: {}", line_no, e))
            })?;
            visit(entry);
        }
        Ok(())
    }
}
