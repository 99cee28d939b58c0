//! Relay reply body

use serde::{Deserialize, Serialize};

/// Message returned when the notification was handed to the mail transport
pub const SENT_MESSAGE: &str = "Email sent successfully!";

/// Message returned when the mail transport refused the notification
pub const SEND_FAILED_MESSAGE: &str = "Failed to send email. Please try again later.";

/// Message returned for any method other than POST
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed";

/// Body of every relay response, successful or not
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelayResponse {
    pub success: bool,
    #[serde(default)]
    pub message: String,
}

impl RelayResponse {
    pub fn sent() -> Self {
        Self {
            success: true,
            message: SENT_MESSAGE.to_string(),
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}
