//! Pure Firecrawl REST API client.
//!
//! A minimal client for the Firecrawl `/scrape` endpoint, covering the v1
//! (`extract` format) and v2 (`json` format) structured extraction dialects.
//!
//! # Example
//!
//! ```rust,ignore
//! use firecrawl_client::{FirecrawlClient, JsonExtraction, ScrapeRequestV2};
//! use std::time::Duration;
//!
//! let client = FirecrawlClient::new("fc-your-key");
//! let extraction = JsonExtraction { prompt: "Extract the title".into(), schema };
//! let request = ScrapeRequestV2::json("https://example.com", extraction);
//! let document = client.scrape_v2(&request, Duration::from_secs(30)).await?;
//! println!("{}", document["json"]);
//! ```

pub mod credentials;
pub mod error;
pub mod types;

pub use credentials::ApiKey;
pub use error::{FirecrawlError, Result};
pub use types::{
    ApiVersion, JsonExtraction, ScrapeFormat, ScrapeRequestV1, ScrapeRequestV2, ScrapeResponse,
};

use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use types::ErrorBody;

pub const DEFAULT_BASE_URL: &str = "https://api.firecrawl.dev";

pub struct FirecrawlClient {
    client: reqwest::Client,
    api_key: ApiKey,
    base_url: String,
}

impl FirecrawlClient {
    pub fn new(api_key: impl Into<ApiKey>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client at a self-hosted instance or a test server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Scrape with the v1 `extract` format. Returns the document under `data`.
    pub async fn scrape_v1(
        &self,
        request: &ScrapeRequestV1,
        timeout: Duration,
    ) -> Result<Value> {
        self.scrape(ApiVersion::V1, &request.url, request, timeout).await
    }

    /// Scrape with the v2 `json` format. Returns the document under `data`.
    pub async fn scrape_v2(
        &self,
        request: &ScrapeRequestV2,
        timeout: Duration,
    ) -> Result<Value> {
        self.scrape(ApiVersion::V2, &request.url, request, timeout).await
    }

    async fn scrape<T: Serialize>(
        &self,
        version: ApiVersion,
        target: &str,
        body: &T,
        timeout: Duration,
    ) -> Result<Value> {
        let endpoint = format!("{}/{}/scrape", self.base_url, version);
        tracing::debug!(%version, url = target, "Sending Firecrawl scrape");

        let resp = self
            .client
            .post(&endpoint)
            .bearer_auth(self.api_key.expose())
            .timeout(timeout)
            .json(body)
            .send()
            .await
            .map_err(|e| map_send_error(e, timeout))?;

        let status = resp.status();
        if !status.is_success() {
            let text = resp.text().await.unwrap_or_default();
            return Err(FirecrawlError::Api {
                status: status.as_u16(),
                message: error_message(&text),
            });
        }

        let response: ScrapeResponse = resp.json().await.map_err(|e| map_send_error(e, timeout))?;

        if let Some(warning) = &response.warning {
            tracing::warn!(url = target, warning = %warning, "Firecrawl returned a warning");
        }

        if !response.success {
            return Err(FirecrawlError::ScrapeFailed(
                response
                    .error
                    .unwrap_or_else(|| "no error message returned".to_string()),
            ));
        }

        Ok(response.data.unwrap_or(Value::Null))
    }
}

fn map_send_error(err: reqwest::Error, timeout: Duration) -> FirecrawlError {
    if err.is_timeout() {
        FirecrawlError::Timeout(timeout)
    } else {
        FirecrawlError::Http(err)
    }
}

/// Pull the human-readable message out of an error body, falling back to
/// the raw text.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody {
            error: Some(message),
            ..
        })
        | Ok(ErrorBody {
            message: Some(message),
            ..
        }) => message,
        _ if body.trim().is_empty() => "empty response body".to_string(),
        _ => body.trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_message_from_json() {
        assert_eq!(
            error_message(r#"{"success":false,"error":"Rate limit exceeded"}"#),
            "Rate limit exceeded"
        );
        assert_eq!(error_message(r#"{"message":"Unauthorized"}"#), "Unauthorized");
    }

    #[test]
    fn test_error_message_fallbacks() {
        assert_eq!(error_message("Bad Gateway\n"), "Bad Gateway");
        assert_eq!(error_message(""), "empty response body");
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let client = FirecrawlClient::new("fc-test").with_base_url("http://localhost:3002/");
        assert_eq!(client.base_url(), "http://localhost:3002");
    }
}
