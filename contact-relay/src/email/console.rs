//! Console-based email sender for development

use super::{EmailSender, OutgoingEmail};

/// Email sender that prints notifications instead of delivering them
pub struct ConsoleEmailSender;

impl ConsoleEmailSender {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleEmailSender {
    fn default() -> Self {
        Self::new()
    }
}

impl EmailSender for ConsoleEmailSender {
    fn send(&self, email: &OutgoingEmail) -> Result<(), String> {
        println!();
        println!("========================================");
        println!("  TO:       {}", email.to);
        println!("  REPLY-TO: {}", email.reply_to);
        println!("  SUBJECT:  {}", email.subject);
        println!("========================================");
        println!("{}", email.html_body);
        println!();

        tracing::info!(to = %email.to, reply_to = %email.reply_to, "Notification printed to console");

        Ok(())
    }
}
