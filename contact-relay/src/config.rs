//! Relay configuration

use std::path::PathBuf;

use anyhow::{bail, Result};

use crate::email::{
    ConsoleEmailSender, EmailSender, SendmailEmailSender, SmtpConfig, SmtpEmailSender,
};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_DESTINATION: &str = "contact@localhost";
pub const DEFAULT_LOG_PATH: &str = "email_log.txt";
pub const DEFAULT_STATIC_DIR: &str = "public";
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

/// Which mail transport to hand notifications to
#[derive(Debug, Clone)]
pub enum MailTransport {
    /// Print to stdout (development)
    Console,
    /// Authenticated SMTP relay
    Smtp(SmtpConfig),
    /// Local sendmail binary
    Sendmail {
        command: Option<String>,
        from_email: Option<String>,
    },
}

impl MailTransport {
    pub fn name(&self) -> &'static str {
        match self {
            MailTransport::Console => "console",
            MailTransport::Smtp(_) => "smtp",
            MailTransport::Sendmail { .. } => "sendmail",
        }
    }

    /// Construct the configured sender
    pub fn build_sender(&self) -> Result<Box<dyn EmailSender>> {
        let sender: Box<dyn EmailSender> = match self {
            MailTransport::Console => Box::new(ConsoleEmailSender::new()),
            MailTransport::Smtp(config) => {
                Box::new(SmtpEmailSender::new(config.clone()).map_err(anyhow::Error::msg)?)
            }
            MailTransport::Sendmail {
                command,
                from_email,
            } => {
                let mut sender = match command {
                    Some(command) => SendmailEmailSender::with_command(command.clone()),
                    None => SendmailEmailSender::new(),
                };
                if let Some(from_email) = from_email {
                    sender = sender.with_from(from_email.clone());
                }
                Box::new(sender)
            }
        };
        Ok(sender)
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Port to listen on
    pub port: u16,

    /// Address that receives contact notifications
    pub destination: String,

    /// Audit log file
    pub log_path: PathBuf,

    /// Directory with the static site
    pub static_dir: PathBuf,

    /// Largest accepted request body
    pub max_body_bytes: usize,

    /// Outbound mail transport
    pub transport: MailTransport,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            destination: DEFAULT_DESTINATION.to_string(),
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
            transport: MailTransport::Console,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// - PORT (default: 3000)
    /// - CONTACT_DESTINATION (default: contact@localhost)
    /// - CONTACT_LOG_PATH (default: email_log.txt)
    /// - CONTACT_STATIC_DIR (default: public)
    /// - CONTACT_MAX_BODY_BYTES (default: 65536)
    /// - MAIL_TRANSPORT: console | smtp | sendmail (default: console)
    /// - SENDMAIL_COMMAND, SMTP_* (see [`SmtpConfig::from_env`])
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|s| !s.is_empty());
        let defaults = Self::default();

        let port = match get("PORT") {
            Some(port) => port.parse()?,
            None => defaults.port,
        };

        let max_body_bytes = match get("CONTACT_MAX_BODY_BYTES") {
            Some(bytes) => bytes.parse()?,
            None => defaults.max_body_bytes,
        };

        let transport = match get("MAIL_TRANSPORT").as_deref() {
            None | Some("console") => MailTransport::Console,
            Some("smtp") => match SmtpConfig::from_lookup(&lookup) {
                Some(smtp) => MailTransport::Smtp(smtp),
                None => bail!("MAIL_TRANSPORT=smtp requires SMTP_HOST, SMTP_USERNAME and SMTP_PASSWORD"),
            },
            Some("sendmail") => MailTransport::Sendmail {
                command: get("SENDMAIL_COMMAND"),
                from_email: get("SMTP_FROM_EMAIL"),
            },
            Some(other) => bail!("Unknown MAIL_TRANSPORT: {}", other),
        };

        Ok(Self {
            port,
            destination: get("CONTACT_DESTINATION").unwrap_or(defaults.destination),
            log_path: get("CONTACT_LOG_PATH").map(PathBuf::from).unwrap_or(defaults.log_path),
            static_dir: get("CONTACT_STATIC_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.static_dir),
            max_body_bytes,
            transport,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = load(&[]).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.destination, "contact@localhost");
        assert_eq!(config.log_path, PathBuf::from("email_log.txt"));
        assert_eq!(config.max_body_bytes, 64 * 1024);
        assert_eq!(config.transport.name(), "console");
    }

    #[test]
    fn test_overrides() {
        let config = load(&[
            ("PORT", "8080"),
            ("CONTACT_DESTINATION", "me@example.com"),
            ("CONTACT_LOG_PATH", "/var/log/contact.txt"),
            ("MAIL_TRANSPORT", "sendmail"),
            ("SENDMAIL_COMMAND", "/usr/sbin/sendmail"),
        ])
        .unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.destination, "me@example.com");
        assert_eq!(config.log_path, PathBuf::from("/var/log/contact.txt"));
        match config.transport {
            MailTransport::Sendmail { command, from_email } => {
                assert_eq!(command.as_deref(), Some("/usr/sbin/sendmail"));
                assert_eq!(from_email, None);
            }
            other => panic!("unexpected transport {:?}", other),
        }
    }

    #[test]
    fn test_empty_values_fall_back_to_defaults() {
        let config = load(&[("PORT", ""), ("CONTACT_DESTINATION", "")]).unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.destination, "contact@localhost");
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(load(&[("PORT", "not-a-port")]).is_err());
        assert!(load(&[("MAIL_TRANSPORT", "pigeon")]).is_err());
    }
}
