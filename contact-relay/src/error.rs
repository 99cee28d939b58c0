//! Relay error types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use contact_core::response::{METHOD_NOT_ALLOWED_MESSAGE, SEND_FAILED_MESSAGE};
use contact_core::{RelayResponse, ValidationError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Method not allowed")]
    MethodNotAllowed,

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Delivery failed: {0}")]
    DeliveryFailed(String),
}

impl IntoResponse for RelayError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            RelayError::MethodNotAllowed => {
                (StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED_MESSAGE.to_string())
            }
            RelayError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            RelayError::DeliveryFailed(reason) => {
                // Transport details stay in the server log
                tracing::warn!("Delivery failed: {}", reason);
                (StatusCode::INTERNAL_SERVER_ERROR, SEND_FAILED_MESSAGE.to_string())
            }
        };

        (status, axum::Json(RelayResponse::failure(message))).into_response()
    }
}
