//! Contact form submissions

use serde::{Deserialize, Serialize};

use crate::validate::{is_valid_email, is_valid_message, is_valid_name};
use crate::{Result, ValidationError};

/// A submission as it arrives over the wire, before any checks.
///
/// Absent and `null` keys both deserialize to `None`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawSubmission {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl RawSubmission {
    /// Parse a JSON request body.
    ///
    /// A body that is not a JSON object with string-or-null fields is
    /// reported the same way as one with missing keys.
    pub fn from_json(body: &[u8]) -> Result<Self> {
        serde_json::from_slice(body).map_err(|_| ValidationError::MissingFields)
    }

    /// Check that every field is present, then validate the trimmed values.
    pub fn validate(self) -> Result<ContactSubmission> {
        match (self.name, self.email, self.message) {
            (Some(name), Some(email), Some(message)) => {
                ContactSubmission::new(&name, &email, &message)
            }
            _ => Err(ValidationError::MissingFields),
        }
    }
}

/// A contact form submission whose fields have all passed validation.
///
/// Fields are stored trimmed. There is no way to build one without going
/// through [`ContactSubmission::new`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactSubmission {
    name: String,
    email: String,
    message: String,
}

impl ContactSubmission {
    /// Trim and validate the three fields.
    ///
    /// Checks run in a fixed order (email, name, message) and the first
    /// failure wins.
    pub fn new(name: &str, email: &str, message: &str) -> Result<Self> {
        let name = name.trim();
        let email = email.trim();
        let message = message.trim();

        if !is_valid_email(email) {
            return Err(ValidationError::InvalidEmail);
        }
        if !is_valid_name(name) {
            return Err(ValidationError::NameTooShort);
        }
        if !is_valid_message(message) {
            return Err(ValidationError::EmptyMessage);
        }

        Ok(Self {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn raw(value: serde_json::Value) -> Result<RawSubmission> {
        RawSubmission::from_json(value.to_string().as_bytes())
    }

    #[test]
    fn test_valid_submission_is_trimmed() {
        let submission = ContactSubmission::new("  Alice ", " alice@example.com\n", " Hello ").unwrap();
        assert_eq!(submission.name(), "Alice");
        assert_eq!(submission.email(), "alice@example.com");
        assert_eq!(submission.message(), "Hello");
    }

    #[test]
    fn test_email_checked_before_name() {
        let err = ContactSubmission::new("A", "bad-email", "hi").unwrap_err();
        assert_eq!(err, ValidationError::InvalidEmail);
        assert_eq!(err.to_string(), "Invalid email format");
    }

    #[test]
    fn test_short_name_rejected() {
        let err = ContactSubmission::new("A", "a@b.com", "hi").unwrap_err();
        assert_eq!(err, ValidationError::NameTooShort);
    }

    #[test]
    fn test_blank_message_rejected() {
        let err = ContactSubmission::new("Alice", "a@b.com", "   ").unwrap_err();
        assert_eq!(err, ValidationError::EmptyMessage);
    }

    #[test]
    fn test_missing_key_rejected() {
        let submission = raw(json!({ "name": "Alice", "email": "a@b.com" })).unwrap();
        assert_eq!(submission.validate().unwrap_err(), ValidationError::MissingFields);
    }

    #[test]
    fn test_null_counts_as_missing() {
        let submission = raw(json!({ "name": null, "email": "a@b.com", "message": "hi" })).unwrap();
        assert_eq!(submission.validate().unwrap_err(), ValidationError::MissingFields);
    }

    #[test]
    fn test_empty_string_is_present_but_invalid() {
        let submission = raw(json!({ "name": "", "email": "a@b.com", "message": "hi" })).unwrap();
        assert_eq!(submission.validate().unwrap_err(), ValidationError::NameTooShort);
    }

    #[test]
    fn test_malformed_body_reported_as_missing_fields() {
        assert_eq!(
            RawSubmission::from_json(b"not json").unwrap_err(),
            ValidationError::MissingFields
        );
        assert_eq!(
            raw(json!({ "name": 42, "email": "a@b.com", "message": "hi" })).unwrap_err(),
            ValidationError::MissingFields
        );
    }

    #[test]
    fn test_serializes_as_wire_body() {
        let submission = ContactSubmission::new("Alice", "alice@example.com", "Hello").unwrap();
        assert_eq!(
            serde_json::to_value(&submission).unwrap(),
            json!({ "name": "Alice", "email": "alice@example.com", "message": "Hello" })
        );
    }
}
