//! Contact Form Core Library
//!
//! Domain types shared by the contact relay and its clients:
//! - Field validators used by both sides of the form
//! - `ContactSubmission`, which can only exist once all fields are valid
//! - The JSON reply shape returned by the relay
//! - The HTML notification sent to the site owner

pub mod error;
pub mod response;
pub mod submission;
pub mod template;
pub mod validate;

pub use error::ValidationError;
pub use response::RelayResponse;
pub use submission::{ContactSubmission, RawSubmission};
pub use template::{escape_html, render_notification, subject_for, SubmissionContext};
pub use validate::{is_valid_email, is_valid_message, is_valid_name};

/// Result type for contact-core operations
pub type Result<T> = std::result::Result<T, ValidationError>;
