//! Error types for the Firecrawl client.

use std::time::Duration;
use thiserror::Error;

/// Result type for Firecrawl client operations.
pub type Result<T> = std::result::Result<T, FirecrawlError>;

/// Firecrawl client errors.
#[derive(Debug, Error)]
pub enum FirecrawlError {
    /// Configuration error (unknown API version, bad base URL)
    #[error("configuration error: {0}")]
    Config(String),

    /// Network error (connection failed, body could not be decoded)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-2xx response from the API
    #[error("Firecrawl API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The API answered 2xx but reported `success: false`
    #[error("Firecrawl scrape failed: {0}")]
    ScrapeFailed(String),

    /// The request exceeded its timeout
    #[error("Firecrawl request timed out after {}s", .0.as_secs())]
    Timeout(Duration),
}

impl FirecrawlError {
    /// True when the provider itself reported the failure, as opposed to
    /// the request never completing.
    pub fn is_reported_by_provider(&self) -> bool {
        matches!(self, Self::Api { .. } | Self::ScrapeFailed(_))
    }
}
