//! Outbound mail abstractions

pub mod console;
pub mod sendmail;
pub mod smtp;

pub use console::ConsoleEmailSender;
pub use sendmail::SendmailEmailSender;
pub use smtp::{SmtpConfig, SmtpEmailSender};

use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::Message;

/// A fully rendered notification, ready for a mail transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    pub to: String,
    pub from: String,
    pub reply_to: String,
    pub subject: String,
    pub html_body: String,
}

/// Trait for handing notifications to a mail transport
///
/// Implementations talk to systems the relay does not control, so every
/// send may fail. Failures are reported once and never retried.
pub trait EmailSender: Send + Sync {
    /// Deliver a message, or describe why it could not be delivered
    fn send(&self, email: &OutgoingEmail) -> Result<(), String>;
}

/// Allow using Box<dyn EmailSender> as an EmailSender
impl EmailSender for Box<dyn EmailSender> {
    fn send(&self, email: &OutgoingEmail) -> Result<(), String> {
        (**self).send(email)
    }
}

/// Build a lettre message from an outgoing email.
///
/// `from_override` replaces the `From` header for transports that refuse
/// to relay on behalf of arbitrary senders. `Reply-To` always points at
/// the submitter.
pub(crate) fn build_message(email: &OutgoingEmail, from_override: Option<&str>) -> Result<Message, String> {
    let from: Mailbox = from_override
        .unwrap_or(&email.from)
        .parse()
        .map_err(|e| format!("Invalid from address: {}", e))?;

    let reply_to: Mailbox = email
        .reply_to
        .parse()
        .map_err(|e| format!("Invalid reply-to address: {}", e))?;

    let to: Mailbox = email
        .to
        .parse()
        .map_err(|e| format!("Invalid to address: {}", e))?;

    Message::builder()
        .from(from)
        .reply_to(reply_to)
        .to(to)
        .subject(email.subject.as_str())
        .header(ContentType::TEXT_HTML)
        .body(email.html_body.clone())
        .map_err(|e| format!("Failed to build email: {}", e))
}
