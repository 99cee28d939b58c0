//! Contact form relay endpoint

use std::net::SocketAddr;
use std::sync::Arc;

use axum::body::to_bytes;
use axum::extract::{ConnectInfo, Request, State};
use axum::http::Method;
use axum::Json;
use chrono::Local;
use lettre::Address;
use contact_core::{
    render_notification, subject_for, ContactSubmission, RawSubmission, RelayResponse,
    SubmissionContext, ValidationError,
};

use crate::audit::{AuditEntry, AuditLog, AuditOutcome};
use crate::email::{EmailSender, OutgoingEmail};
use crate::error::RelayError;
use crate::state::AppState;

/// POST /send_email
///
/// Validates a submission, hands the notification to the mail transport and
/// records the attempt in the audit log.
pub async fn send_email<E, A>(
    State(state): State<Arc<AppState<E, A>>>,
    request: Request,
) -> Result<Json<RelayResponse>, RelayError>
where
    E: EmailSender + 'static,
    A: AuditLog + 'static,
{
    if request.method() != Method::POST {
        return Err(RelayError::MethodNotAllowed);
    }

    // Only present when served with connect info
    let remote_addr = request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_string());

    // An unreadable or oversized body is treated like one without fields
    let body = to_bytes(request.into_body(), state.max_body_bytes)
        .await
        .map_err(|_| ValidationError::MissingFields)?;

    let submission = RawSubmission::from_json(&body)?.validate()?;

    // The submitter goes into From and Reply-To, so the transport must accept it
    if submission.email().parse::<Address>().is_err() {
        return Err(ValidationError::InvalidEmail.into());
    }

    // Mail transports and the log file block
    let task_state = Arc::clone(&state);
    let task_submission = submission.clone();
    match tokio::task::spawn_blocking(move || deliver(&task_state, &task_submission, remote_addr)).await {
        Ok(result) => result?,
        Err(e) => {
            tracing::error!(error = %e, email = %submission.email(), "Delivery task failed");
            record(&state, AuditOutcome::Failed, &submission);
            return Err(RelayError::DeliveryFailed(format!("Delivery task failed: {}", e)));
        }
    }

    Ok(Json(RelayResponse::sent()))
}

/// Send the notification once and record the attempt.
///
/// The audit write never changes the delivery result.
fn deliver<E, A>(
    state: &AppState<E, A>,
    submission: &ContactSubmission,
    remote_addr: Option<String>,
) -> Result<(), RelayError>
where
    E: EmailSender,
    A: AuditLog,
{
    let context = SubmissionContext {
        submitted_at: Local::now(),
        remote_addr,
    };

    let email = OutgoingEmail {
        to: state.destination.clone(),
        from: submission.email().to_string(),
        reply_to: submission.email().to_string(),
        subject: subject_for(submission.name()),
        html_body: render_notification(submission, &context),
    };

    let delivery = state.email_sender.send(&email);

    let outcome = match delivery {
        Ok(()) => AuditOutcome::Sent,
        Err(_) => AuditOutcome::Failed,
    };
    record(state, outcome, submission);

    match delivery {
        Ok(()) => {
            tracing::info!(email = %submission.email(), "Contact notification sent");
            Ok(())
        }
        Err(reason) => Err(RelayError::DeliveryFailed(reason)),
    }
}

/// Append one audit line; a failed write is only logged.
fn record<E, A>(state: &AppState<E, A>, outcome: AuditOutcome, submission: &ContactSubmission)
where
    A: AuditLog,
{
    let entry = AuditEntry::now(outcome, submission.email(), submission.name());
    if let Err(e) = state.audit_log.append(&entry) {
        tracing::error!(error = %e, email = %submission.email(), "Failed to write audit log");
    }
}
