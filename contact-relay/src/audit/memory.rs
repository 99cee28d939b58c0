//! In-memory audit log

use std::sync::{Arc, RwLock};

use super::{AuditEntry, AuditError, AuditLog};

/// Audit log that keeps rendered lines in memory
///
/// Clones share the same lines.
#[derive(Default, Clone)]
pub struct InMemoryAuditLog {
    lines: Arc<RwLock<Vec<String>>>,
}

impl InMemoryAuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines appended so far, oldest first
    pub fn lines(&self) -> Vec<String> {
        self.lines.read().unwrap().clone()
    }
}

impl AuditLog for InMemoryAuditLog {
    fn append(&self, entry: &AuditEntry) -> Result<(), AuditError> {
        self.lines
            .write()
            .map_err(|_| AuditError::Poisoned)?
            .push(entry.to_string());
        Ok(())
    }
}
