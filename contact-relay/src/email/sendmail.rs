//! Sendmail-based email sender, using the host's local mail facility

use lettre::{SendmailTransport, Transport};

use super::{build_message, EmailSender, OutgoingEmail};

/// Email sender that pipes notifications into the local sendmail binary
pub struct SendmailEmailSender {
    transport: SendmailTransport,
    from_email: Option<String>,
}

impl SendmailEmailSender {
    /// Use the sendmail binary found on `PATH`
    pub fn new() -> Self {
        Self {
            transport: SendmailTransport::new(),
            from_email: None,
        }
    }

    /// Use a specific sendmail-compatible command
    pub fn with_command(command: impl Into<String>) -> Self {
        Self {
            transport: SendmailTransport::new_with_command(command.into()),
            from_email: None,
        }
    }

    /// Send every notification with a fixed From address
    pub fn with_from(mut self, from_email: impl Into<String>) -> Self {
        self.from_email = Some(from_email.into());
        self
    }
}

impl Default for SendmailEmailSender {
    fn default() -> Self {
        Self::new()
    }
}

impl EmailSender for SendmailEmailSender {
    fn send(&self, email: &OutgoingEmail) -> Result<(), String> {
        let message = build_message(email, self.from_email.as_deref())?;

        self.transport
            .send(&message)
            .map_err(|e| format!("sendmail failed: {}", e))?;

        tracing::info!(to = %email.to, reply_to = %email.reply_to, "Notification handed to sendmail");
        Ok(())
    }
}
