//! One-shot fetch of the conversation log.
//!
//! The backend exposes the log as a JSON array at a single GET endpoint.
//! There is no retry, no polling and no caching here: callers issue one
//! fetch and replace their state wholesale with the result.

use std::time::Duration;

use crate::config::Config;
use crate::entry::LogEntry;

/// Fetch the conversation log from the configured endpoint.
///
/// Issues exactly one GET and decodes the JSON array body. The backend
/// answers non-2xx (a 500 with an error object when the log cannot be
/// loaded), which surfaces as [`FetchError::Status`].
pub async fn fetch_log(config: &Config) -> Result<Vec<LogEntry>, FetchError> {
    let url = config.log_url();
    let url = reqwest::Url::parse(&url).map_err(|_| FetchError::InvalidUrl(url))?;

    tracing::debug!(url = %url, "fetching conversation log");

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .build()
        .map_err(FetchError::Http)?;

    let response = client.get(url).send().await.map_err(FetchError::Http)?;
    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status.as_u16()));
    }

    let body = response.text().await.map_err(FetchError::Http)?;
    let entries = parse_log(&body)?;

    tracing::debug!(count = entries.len(), "conversation log fetched");
    Ok(entries)
}

/// Decode a conversation log body into entries, preserving order.
pub fn parse_log(body: &str) -> Result<Vec<LogEntry>, FetchError> {
    serde_json::from_str(body).map_err(FetchError::Parse)
}

/// Errors that can occur fetching the conversation log.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The configured endpoint is not a valid URL.
    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(String),

    /// Transport-level failure (connect, timeout, body read).
    #[error("request failed: {0}")]
    Http(#[source] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("backend returned HTTP {0}")]
    Status(u16),

    /// The body was not a JSON array of log entries.
    #[error("malformed log body: {0}")]
    Parse(#[source] serde_json::Error),
}
