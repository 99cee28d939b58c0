//! Relay application state

use crate::audit::AuditLog;
use crate::email::EmailSender;

/// Shared state for the relay routes
pub struct AppState<E, A> {
    /// Where notifications are handed off for delivery
    pub email_sender: E,
    /// Where delivery attempts are recorded
    pub audit_log: A,
    /// Address that receives every notification
    pub destination: String,
    /// Largest request body the relay will read
    pub max_body_bytes: usize,
}

impl<E, A> AppState<E, A>
where
    E: EmailSender,
    A: AuditLog,
{
    pub fn new(email_sender: E, audit_log: A, destination: impl Into<String>) -> Self {
        Self {
            email_sender,
            audit_log,
            destination: destination.into(),
            max_body_bytes: crate::config::DEFAULT_MAX_BODY_BYTES,
        }
    }

    pub fn with_max_body_bytes(mut self, max_body_bytes: usize) -> Self {
        self.max_body_bytes = max_body_bytes;
        self
    }
}
