//! SMTP-based email sender for production

use std::fmt;

use lettre::{transport::smtp::authentication::Credentials, SmtpTransport, Transport};

use super::{build_message, EmailSender, OutgoingEmail};

/// Configuration for SMTP email sending
#[derive(Clone)]
pub struct SmtpConfig {
    /// SMTP server host (e.g., "smtp.resend.com")
    pub host: String,
    /// SMTP server port (typically 465 for TLS, 587 for STARTTLS)
    pub port: u16,
    /// SMTP username
    pub username: String,
    /// SMTP password (or API key for services like Resend)
    pub password: String,
    /// Fixed From address, for servers that refuse to send as the submitter
    pub from_email: Option<String>,
}

impl SmtpConfig {
    /// Create config from environment variables
    ///
    /// Required:
    /// - SMTP_HOST
    /// - SMTP_USERNAME
    /// - SMTP_PASSWORD
    ///
    /// Optional:
    /// - SMTP_PORT (default: 465)
    /// - SMTP_FROM_EMAIL
    pub fn from_env() -> Option<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Option<Self> {
        // Non-empty values only
        let get = |key: &str| lookup(key).filter(|s| !s.is_empty());

        let host = get("SMTP_HOST")?;
        let username = get("SMTP_USERNAME")?;
        let password = get("SMTP_PASSWORD")?;

        let port = get("SMTP_PORT")
            .and_then(|s| s.parse().ok())
            .unwrap_or(465);

        let from_email = get("SMTP_FROM_EMAIL");

        Some(Self {
            host,
            port,
            username,
            password,
            from_email,
        })
    }
}

impl fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("from_email", &self.from_email)
            .finish()
    }
}

/// SMTP email sender for production use
pub struct SmtpEmailSender {
    transport: SmtpTransport,
    from_email: Option<String>,
}

impl SmtpEmailSender {
    /// Create a new SMTP email sender
    pub fn new(config: SmtpConfig) -> Result<Self, String> {
        let creds = Credentials::new(config.username, config.password);

        let transport = SmtpTransport::relay(&config.host)
            .map_err(|e| format!("Failed to create SMTP transport: {}", e))?
            .port(config.port)
            .credentials(creds)
            .build();

        // Test the connection
        transport
            .test_connection()
            .map_err(|e| format!("SMTP connection test failed: {}", e))?;

        tracing::info!(host = %config.host, port = config.port, "SMTP connection established");

        Ok(Self {
            transport,
            from_email: config.from_email,
        })
    }
}

impl EmailSender for SmtpEmailSender {
    fn send(&self, email: &OutgoingEmail) -> Result<(), String> {
        let message = build_message(email, self.from_email.as_deref())?;

        self.transport
            .send(&message)
            .map_err(|e| format!("Failed to send email: {}", e))?;

        tracing::info!(to = %email.to, reply_to = %email.reply_to, "Notification sent over SMTP");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_requires_host_and_credentials() {
        assert!(SmtpConfig::from_lookup(lookup(&[("SMTP_HOST", "smtp.example.com")])).is_none());
    }

    #[test]
    fn test_defaults_port_to_465() {
        let config = SmtpConfig::from_lookup(lookup(&[
            ("SMTP_HOST", "smtp.example.com"),
            ("SMTP_USERNAME", "relay"),
            ("SMTP_PASSWORD", "hunter2"),
        ]))
        .unwrap();

        assert_eq!(config.port, 465);
        assert_eq!(config.from_email, None);
    }

    #[test]
    fn test_debug_hides_password() {
        let config = SmtpConfig::from_lookup(lookup(&[
            ("SMTP_HOST", "smtp.example.com"),
            ("SMTP_USERNAME", "relay"),
            ("SMTP_PASSWORD", "hunter2"),
            ("SMTP_PORT", "587"),
        ]))
        .unwrap();

        let debug = format!("{:?}", config);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("587"));
    }
}
