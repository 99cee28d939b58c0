//! Client error types

use thiserror::Error;

/// The relay could not be reached or did not answer with a relay reply
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Unexpected response body: {0}")]
    Body(#[from] serde_json::Error),
}
