//! Transport port
//!
//! Defines the narrow contract the fetch use case needs from the network:
//! given a [`FetchRequest`], produce a status and an optional body, or fail.

use async_trait::async_trait;
use stackfeed_domain::FetchRequest;
use thiserror::Error;

/// Errors raised before a complete response was received
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Timeout")]
    Timeout,

    #[error("Request failed: {0}")]
    RequestFailed(String),
}

/// A completed HTTP exchange described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    pub status: u16,
    /// `None` when the server sent no body at all.
    pub body: Option<String>,
}

impl TransportResponse {
    pub fn new(status: u16, body: Option<String>) -> Self {
        Self { status, body }
    }

    /// 200 response carrying `body`.
    pub fn ok(body: impl Into<String>) -> Self {
        Self::new(200, Some(body.into()))
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Network access for question fetches
///
/// Implementations live in the infrastructure layer. The future returned by
/// `fetch` may be dropped at any await point when the owning scope is torn
/// down; implementations must release their connection when that happens.
#[async_trait]
pub trait QuestionsTransport: Send + Sync {
    async fn fetch(&self, request: &FetchRequest) -> Result<TransportResponse, TransportError>;
}
