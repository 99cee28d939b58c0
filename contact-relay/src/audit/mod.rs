//! Append-only audit log of delivery attempts

pub mod file;
pub mod memory;

pub use file::FileAuditLog;
pub use memory::InMemoryAuditLog;

use std::fmt;

use chrono::{DateTime, Local};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuditError {
    #[error("Failed to write audit log {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Audit log lock poisoned")]
    Poisoned,
}

/// Result of a delivery attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuditOutcome {
    Sent,
    Failed,
}

impl AuditOutcome {
    fn as_str(self) -> &'static str {
        match self {
            AuditOutcome::Sent => "Email sent successfully from",
            AuditOutcome::Failed => "Email failed to send from",
        }
    }
}

/// One delivery attempt, rendered as a single log line
#[derive(Debug, Clone)]
pub struct AuditEntry {
    pub timestamp: DateTime<Local>,
    pub outcome: AuditOutcome,
    pub email: String,
    pub name: String,
}

impl AuditEntry {
    /// Record an attempt made now
    pub fn now(outcome: AuditOutcome, email: &str, name: &str) -> Self {
        Self {
            timestamp: Local::now(),
            outcome,
            email: email.to_string(),
            name: name.to_string(),
        }
    }
}

// Fields come from the submitter; keep the entry on one line.
fn single_line(s: &str) -> String {
    s.chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect()
}

impl fmt::Display for AuditEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}: {} (Name: {})",
            self.timestamp.format("%Y-%m-%d %H:%M:%S"),
            self.outcome.as_str(),
            single_line(&self.email),
            single_line(&self.name),
        )
    }
}

/// Trait for audit log storage
///
/// Each call to [`AuditLog::append`] must add exactly one complete line,
/// even when called from many requests at once.
pub trait AuditLog: Send + Sync {
    fn append(&self, entry: &AuditEntry) -> Result<(), AuditError>;
}

impl AuditLog for Box<dyn AuditLog> {
    fn append(&self, entry: &AuditEntry) -> Result<(), AuditError> {
        (**self).append(entry)
    }
}
