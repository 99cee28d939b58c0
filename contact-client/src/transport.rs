//! Transport between the form and the relay

use async_trait::async_trait;
use contact_core::{ContactSubmission, RelayResponse};

use crate::error::TransportError;

/// Trait for delivering a submission to the relay
#[async_trait]
pub trait RelayTransport: Send + Sync {
    /// Send one submission and return the relay's reply.
    ///
    /// A reply with `success: false` is still `Ok`. Only a missing or
    /// unreadable reply is an error.
    async fn submit(&self, submission: &ContactSubmission) -> Result<RelayResponse, TransportError>;
}

/// Relay transport over HTTP
pub struct HttpRelayTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpRelayTransport {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    pub fn with_client(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl RelayTransport for HttpRelayTransport {
    async fn submit(&self, submission: &ContactSubmission) -> Result<RelayResponse, TransportError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(submission)
            .send()
            .await?;

        // Rejections arrive with 4xx/5xx but still carry a reply body
        let body = response.bytes().await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
