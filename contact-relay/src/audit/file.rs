//! File-backed audit log

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::{AuditEntry, AuditError, AuditLog};

/// Audit log stored as a plain text file, one entry per line
///
/// The file is opened in append mode for every entry, so it can be rotated
/// underneath a running relay.
pub struct FileAuditLog {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileAuditLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> AuditError {
        AuditError::Io {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl AuditLog for FileAuditLog {
    fn append(&self, entry: &AuditEntry) -> Result<(), AuditError> {
        let line = format!("{}\n", entry);

        let _guard = self.lock.lock().map_err(|_| AuditError::Poisoned)?;

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_error(e))?;

        // A single write of the whole line; O_APPEND keeps other
        // processes from landing in the middle of it.
        file.write_all(line.as_bytes()).map_err(|e| self.io_error(e))?;
        file.flush().map_err(|e| self.io_error(e))?;

        Ok(())
    }
}
