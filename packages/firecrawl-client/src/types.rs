use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::FirecrawlError;

/// Scrape API dialect.
///
/// v1 takes an `extract` format plus a sibling `extract` options object and
/// answers with `data.extract`. v2 takes `{type: "json", ...}` format
/// objects and answers with `data.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApiVersion {
    V1,
    #[default]
    V2,
}

impl ApiVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::V1 => "v1",
            Self::V2 => "v2",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ApiVersion {
    type Err = FirecrawlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "v1" | "1" => Ok(Self::V1),
            "v2" | "2" => Ok(Self::V2),
            other => Err(FirecrawlError::Config(format!(
                "unknown Firecrawl API version: {other}"
            ))),
        }
    }
}

/// Prompt plus JSON Schema for a structured extraction.
#[derive(Debug, Clone, Serialize)]
pub struct JsonExtraction {
    pub prompt: String,
    pub schema: Value,
}

/// Body for `POST /v1/scrape`.
#[derive(Debug, Clone, Serialize)]
pub struct ScrapeRequestV1 {
    pub url: String,
    pub formats: Vec<String>,
    pub extract: JsonExtraction,
    /// Milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
}

impl ScrapeRequestV1 {
    pub fn extract(url: impl Into<String>, extraction: JsonExtraction) -> Self {
        Self {
            url: url.into(),
            formats: vec!["extract".to_string()],
            extract: extraction,
            timeout: None,
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout = Some(timeout_ms);
        self
    }
}

/// Output format entry for v2 scrapes.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ScrapeFormat {
    Json { prompt: String, schema: Value },
}

/// Body for `POST /v2/scrape`.
#[derive(Debug, Clone, Serialize)]
pub struct ScrapeRequestV2 {
    pub url: String,
    pub formats: Vec<ScrapeFormat>,
    /// Milliseconds
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
}

impl ScrapeRequestV2 {
    pub fn json(url: impl Into<String>, extraction: JsonExtraction) -> Self {
        Self {
            url: url.into(),
            formats: vec![ScrapeFormat::Json {
                prompt: extraction.prompt,
                schema: extraction.schema,
            }],
            timeout: None,
        }
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout = Some(timeout_ms);
        self
    }
}

/// Envelope returned by `/scrape` in both versions.
///
/// `data` is left untyped: its layout depends on the requested formats and
/// on the backend serving the request.
#[derive(Debug, Clone, Deserialize)]
pub struct ScrapeResponse {
    #[serde(default = "default_success")]
    pub success: bool,
    pub data: Option<Value>,
    pub error: Option<String>,
    pub warning: Option<String>,
}

fn default_success() -> bool {
    true
}

/// Error body for non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ErrorBody {
    pub error: Option<String>,
    pub message: Option<String>,
}
