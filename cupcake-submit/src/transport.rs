//! The seam between the submission service and the network.
//!
//! One trait, one real adapter, one mock. The contract is deliberately
//! narrow: send the encoded order once, get back raw response bytes or a
//! transport failure. No streaming, no retry, no cancellation.

use crate::config::EndpointConfig;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use tracing::debug;

/// No usable data came back from the network call.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Failed to build HTTP client: {0}")]
    Client(String),

    #[error("Request failed: {0}")]
    Send(String),

    #[error("Server answered with status {0}")]
    Status(u16),
}

/// A single request/response exchange.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Post the encoded order, return the response body bytes.
    async fn exchange(&self, body: Vec<u8>) -> Result<Vec<u8>, TransportError>;
}

/// Real HTTP adapter posting JSON to a fixed endpoint.
pub struct HttpTransport {
    client: reqwest::Client,
    url: String,
}

impl HttpTransport {
    pub fn new(config: &EndpointConfig) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| TransportError::Client(e.to_string()))?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn exchange(&self, body: Vec<u8>) -> Result<Vec<u8>, TransportError> {
        debug!(url = %self.url, bytes = body.len(), "posting order");

        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| TransportError::Send(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| TransportError::Send(e.to_string()))?;

        Ok(bytes.to_vec())
    }
}

/// Scripted transport for tests and offline runs.
pub enum MockTransport {
    /// Reflect the request body back, like an echo server.
    Echo,
    /// Answer with canned bytes regardless of the request.
    Respond(Vec<u8>),
    /// Simulate connectivity loss.
    Fail(String),
}

#[async_trait]
impl Transport for MockTransport {
    async fn exchange(&self, body: Vec<u8>) -> Result<Vec<u8>, TransportError> {
        match self {
            MockTransport::Echo => Ok(body),
            MockTransport::Respond(bytes) => Ok(bytes.clone()),
            MockTransport::Fail(reason) => Err(TransportError::Send(reason.clone())),
        }
    }
}
