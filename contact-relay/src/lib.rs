//! Contact Form Relay
//!
//! Receives contact form submissions over HTTP, validates them again,
//! emails a notification to the site owner and keeps an append-only log
//! of every delivery attempt.

pub mod audit;
pub mod config;
pub mod email;
pub mod error;
pub mod routes;
pub mod state;

pub use audit::{AuditEntry, AuditError, AuditLog, AuditOutcome, FileAuditLog, InMemoryAuditLog};
pub use config::{Config, MailTransport};
pub use email::{
    ConsoleEmailSender, EmailSender, OutgoingEmail, SendmailEmailSender, SmtpConfig,
    SmtpEmailSender,
};
pub use error::RelayError;
pub use state::AppState;
