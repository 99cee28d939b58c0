//! Mail setup check
//!
//! Sends a plain test notification through the configured transport and
//! checks that the audit log can be written, then reports what it found.

use std::fs::OpenOptions;
use std::path::Path;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use contact_relay::{Config, EmailSender, OutgoingEmail};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "contact_relay=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    println!("Mail setup check");
    println!("  transport:   {}", config.transport.name());
    println!("  destination: {}", config.destination);
    println!("  audit log:   {}", config.log_path.display());

    match check_log_writable(&config.log_path) {
        Ok(()) => println!("[ok]   audit log is writable"),
        Err(e) => println!("[warn] audit log is not writable: {:#}", e),
    }

    let sender = config
        .transport
        .build_sender()
        .context("mail transport is not available")?;

    let email = OutgoingEmail {
        to: config.destination.clone(),
        from: config.destination.clone(),
        reply_to: config.destination.clone(),
        subject: "Test Email from Portfolio Website".to_string(),
        html_body: "<p>This is a test email to verify that mail delivery is working properly.</p>"
            .to_string(),
    };

    match sender.send(&email) {
        Ok(()) => {
            println!("[ok]   test email sent, check {}", config.destination);
            Ok(())
        }
        Err(reason) => {
            println!("[fail] test email was not sent: {}", reason);
            anyhow::bail!("mail delivery check failed")
        }
    }
}

// Opening in append mode without writing leaves existing contents alone.
fn check_log_writable(path: &Path) -> Result<()> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("cannot open {}", path.display()))?;
    Ok(())
}
