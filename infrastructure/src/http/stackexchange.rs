//! StackExchange API transport
//!
//! Maps [`FetchRequest`]s onto the two StackExchange 2.x endpoints used by
//! the screens:
//!
//! - `GET {base}/questions?order=desc&sort=activity&pagesize=N&site=S`
//! - `GET {base}/questions/{id}?filter=withbody&site=S`
//!
//! The transport only moves bytes. Status codes are returned as data and the
//! body is handed back unparsed; classifying them is the use case's job.
//!
//! Dropping the future returned by `fetch` drops the underlying `reqwest`
//! request, which closes the connection it was using.

use async_trait::async_trait;
use stackfeed_application::ports::transport::{
    QuestionsTransport, TransportError, TransportResponse,
};
use stackfeed_domain::FetchRequest;
use std::time::Duration;
use tracing::debug;

/// Connection settings for the StackExchange API
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StackExchangeConfig {
    pub base_url: String,
    pub site: String,
    /// Application key; raises the daily request quota when present.
    pub key: Option<String>,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for StackExchangeConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.stackexchange.com/2.3".to_string(),
            site: "stackoverflow".to_string(),
            key: None,
            timeout: Duration::from_secs(30),
            user_agent: format!("stackfeed/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// [`QuestionsTransport`] backed by a shared `reqwest::Client`.
pub struct StackExchangeTransport {
    client: reqwest::Client,
    config: StackExchangeConfig,
}

impl StackExchangeTransport {
    pub fn new(config: StackExchangeConfig) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| TransportError::ConnectionError(e.to_string()))?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &StackExchangeConfig {
        &self.config
    }

    /// URL and query parameters for `request`.
    ///
    /// Path segments are percent-encoded, so an id can never add query
    /// parameters, a fragment or extra segments to the request.
    pub fn endpoint(
        &self,
        request: &FetchRequest,
    ) -> Result<(reqwest::Url, Vec<(&'static str, String)>), TransportError> {
        let mut url = reqwest::Url::parse(&self.config.base_url)
            .map_err(|e| TransportError::RequestFailed(format!("Invalid base URL: {}", e)))?;

        let mut query = {
            let mut path = url.path_segments_mut().map_err(|_| {
                TransportError::RequestFailed(format!(
                    "Base URL cannot take a path: {}",
                    self.config.base_url
                ))
            })?;
            path.pop_if_empty().push("questions");

            match request {
                FetchRequest::LatestQuestions { page_size } => vec![
                    ("order", "desc".to_string()),
                    ("sort", "activity".to_string()),
                    ("pagesize", page_size.to_string()),
                ],
                FetchRequest::QuestionDetail { id } => {
                    // Dot segments are dropped by the URL parser rather than encoded.
                    if matches!(id.as_str(), "." | "..") {
                        return Err(TransportError::RequestFailed(format!(
                            "Invalid question id: {}",
                            id
                        )));
                    }
                    path.push(id.as_str());
                    vec![("filter", "withbody".to_string())]
                }
            }
        };

        query.push(("site", self.config.site.clone()));
        if let Some(key) = &self.config.key {
            query.push(("key", key.clone()));
        }

        Ok((url, query))
    }
}

#[async_trait]
impl QuestionsTransport for StackExchangeTransport {
    async fn fetch(&self, request: &FetchRequest) -> Result<TransportResponse, TransportError> {
        let (url, query) = self.endpoint(request)?;
        debug!(url = %url, kind = request.kind(), "GET");

        let response = self
            .client
            .get(url.clone())
            .query(&query)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status().as_u16();
        let body = response.text().await.map_err(map_reqwest_error)?;
        debug!(url = %url, status, bytes = body.len(), "Response received");

        let body = if body.is_empty() { None } else { Some(body) };
        Ok(TransportResponse::new(status, body))
    }
}

fn map_reqwest_error(e: reqwest::Error) -> TransportError {
    if e.is_timeout() {
        TransportError::Timeout
    } else if e.is_connect() {
        TransportError::ConnectionError(e.to_string())
    } else {
        TransportError::RequestFailed(e.to_string())
    }
}
