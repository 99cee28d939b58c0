//! Contact form submission

use contact_core::{is_valid_email, is_valid_name, ContactSubmission};

use crate::form::{ContactForm, FormFields, PendingState};
use crate::presenter::{Presenter, Tone};
use crate::transport::RelayTransport;

pub const FILL_ALL_FIELDS: &str = "Please fill in all fields";
pub const NAME_TOO_SHORT: &str = "Name must be at least 2 characters long";
pub const INVALID_EMAIL: &str = "Please enter a valid email address";
pub const SENDING_LABEL: &str = "Sending...";
pub const SENT_NOTICE: &str = "Message sent successfully!";
pub const RELAY_FAILED_FALLBACK: &str = "Failed to send email. Please try again.";
pub const NETWORK_ERROR: &str = "Network error. Please check your connection and try again.";

/// How a submit event ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Refused before anything was sent
    Rejected(String),
    /// The relay accepted the message
    Sent,
    /// The relay answered with a failure
    RelayFailed(String),
    /// No usable answer from the relay
    NetworkError,
}

/// Handles submit events from the contact form
pub struct SubmissionHandler<T> {
    transport: T,
    presenter: Presenter,
}

impl<T: RelayTransport> SubmissionHandler<T> {
    pub fn new(transport: T, presenter: Presenter) -> Self {
        Self {
            transport,
            presenter,
        }
    }

    /// Validate the form and send it to the relay at most once.
    ///
    /// The submit control is put back to its original label and enabled
    /// whenever a request was started, whatever the result.
    pub async fn on_submit<F>(&self, form: &F) -> SubmitOutcome
    where
        F: ContactForm + ?Sized,
    {
        let submission = match check_fields(&form.fields()) {
            Ok(submission) => submission,
            Err(message) => {
                self.presenter.notify(message, Tone::Error);
                return SubmitOutcome::Rejected(message.to_string());
            }
        };

        let _pending = PendingState::enter(form, SENDING_LABEL);

        match self.transport.submit(&submission).await {
            Ok(reply) if reply.success => {
                self.presenter.show_success_popup();
                form.reset();
                self.presenter.notify(SENT_NOTICE, Tone::Success);
                SubmitOutcome::Sent
            }
            Ok(reply) => {
                let message = if reply.message.is_empty() {
                    RELAY_FAILED_FALLBACK.to_string()
                } else {
                    reply.message
                };
                self.presenter.notify(&message, Tone::Error);
                SubmitOutcome::RelayFailed(message)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Contact relay request failed");
                self.presenter.notify(NETWORK_ERROR, Tone::Error);
                SubmitOutcome::NetworkError
            }
        }
    }
}

/// Run the form checks in order: all fields filled, name, email.
fn check_fields(fields: &FormFields) -> Result<ContactSubmission, &'static str> {
    let filled = |value: &Option<String>| {
        value
            .as_deref()
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    };

    let (Some(name), Some(email), Some(message)) =
        (filled(&fields.name), filled(&fields.email), filled(&fields.message))
    else {
        return Err(FILL_ALL_FIELDS);
    };

    if !is_valid_name(&name) {
        return Err(NAME_TOO_SHORT);
    }
    if !is_valid_email(&email) {
        return Err(INVALID_EMAIL);
    }

    // Same rules the relay applies; only the message text differs
    ContactSubmission::new(&name, &email, &message).map_err(|_| FILL_ALL_FIELDS)
}
