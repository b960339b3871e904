//! Outbound adapters for the external REST providers.
//!
//! Both adapters share one `reqwest::Client` built with the configured
//! timeout. Failures are logged at the call site and never escape as 5xx.

pub mod itunes;
pub mod musixmatch;

pub use itunes::ItunesClient;
pub use musixmatch::MusixmatchClient;

use reqwest::{RequestBuilder, StatusCode};
use serde_json::Value;

/// Failure talking to a provider.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// Connection error, timeout, or body read failure.
    ///
    /// Holds the error without its URL: query strings carry API keys.
    #[error("provider request failed: {0}")]
    Request(reqwest::Error),

    /// Provider answered with a non-success HTTP status.
    #[error("provider returned HTTP {0}")]
    Status(StatusCode),

    /// Body was not the JSON we expected.
    #[error("provider response parse failed: {0}")]
    Decode(#[from] serde_json::Error),
}

impl From<reqwest::Error> for ProviderError {
    fn from(err: reqwest::Error) -> Self {
        ProviderError::Request(err.without_url())
    }
}

/// Builds the shared HTTP client for provider calls.
pub fn build_http_client(timeout: std::time::Duration) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder().timeout(timeout).build()
}

/// Joins a base URL and a path segment with exactly one slash.
pub(crate) fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path)
}

/// Sends the request and decodes a successful body as JSON.
pub(crate) async fn fetch_json(request: RequestBuilder) -> Result<Value, ProviderError> {
    let response = request.send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(ProviderError::Status(status));
    }

    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}
