//! Scraping provider abstraction.
//!
//! A provider adapter wraps one concrete scraping backend (or one version of
//! it) and advertises which extraction methods it exposes. The extractor
//! picks a method once, from [`ExtractionMethod::RANKED`], when it is
//! constructed.

use async_trait::async_trait;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

use crate::schema::ExtractionSchema;

/// A structured extraction entry point a provider may expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtractionMethod {
    /// Schema passed as a `json` output format (Firecrawl v2).
    JsonFormat,

    /// Schema passed as an `extract` output format (Firecrawl v1).
    ExtractFormat,
}

impl ExtractionMethod {
    /// Preference order used during negotiation.
    pub const RANKED: [ExtractionMethod; 2] = [Self::JsonFormat, Self::ExtractFormat];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::JsonFormat => "json_format",
            Self::ExtractFormat => "extract_format",
        }
    }
}

/// Pick the highest-ranked method the provider supports.
pub fn negotiate<P: ScrapeProvider + ?Sized>(provider: &P) -> Option<ExtractionMethod> {
    ExtractionMethod::RANKED
        .into_iter()
        .find(|method| provider.supports(*method))
}

/// A single scrape target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrapeRequest {
    pub target_url: String,
}

impl ScrapeRequest {
    pub fn new(target_url: impl Into<String>) -> Self {
        Self {
            target_url: target_url.into(),
        }
    }
}

/// Options forwarded with every provider call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrapeOptions {
    pub timeout: Duration,
}

/// Untyped provider response. Its layout is not guaranteed; see
/// [`crate::envelope::ResponseEnvelope`].
#[derive(Debug, Clone, PartialEq)]
pub struct RawProviderResult(Value);

impl RawProviderResult {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }

    pub fn into_value(self) -> Value {
        self.0
    }

    /// Top-level keys, for diagnostics. Values are never logged.
    pub fn top_level_keys(&self) -> Vec<&str> {
        match &self.0 {
            Value::Object(map) => map.keys().map(String::as_str).collect(),
            _ => Vec::new(),
        }
    }
}

impl From<Value> for RawProviderResult {
    fn from(value: Value) -> Self {
        Self::new(value)
    }
}

/// A failed provider call.
#[derive(Debug, Clone, Error)]
pub enum ProviderFailure {
    /// The provider answered with an error.
    #[error("{0}")]
    Reported(String),

    /// The call did not complete.
    #[error("{0}")]
    Transport(String),
}

/// Adapter over one scraping backend.
#[async_trait]
pub trait ScrapeProvider: Send + Sync {
    /// Provider name for logs.
    fn name(&self) -> &str;

    /// Whether this adapter exposes `method`.
    fn supports(&self, method: ExtractionMethod) -> bool;

    /// Run one structured scrape.
    ///
    /// Called only with a method for which [`supports`](Self::supports)
    /// returned true.
    async fn scrape(
        &self,
        method: ExtractionMethod,
        request: &ScrapeRequest,
        schema: &ExtractionSchema,
        options: &ScrapeOptions,
    ) -> Result<RawProviderResult, ProviderFailure>;
}
