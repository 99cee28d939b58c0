//! Error types for contact submissions

use thiserror::Error;

/// Why a submission was refused.
///
/// The display text is what the relay sends back in its `message` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Name must be at least 2 characters long")]
    NameTooShort,

    #[error("Message cannot be empty")]
    EmptyMessage,
}
