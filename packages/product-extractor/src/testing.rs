//! Testing utilities.
//!
//! [`MockProvider`] answers scrapes from canned responses so applications
//! can exercise the extractor without network calls.

use async_trait::async_trait;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::provider::{
    ExtractionMethod, ProviderFailure, RawProviderResult, ScrapeOptions, ScrapeProvider,
    ScrapeRequest,
};
use crate::schema::ExtractionSchema;

#[derive(Debug, Clone)]
enum MockResponse {
    Result(Value),
    Reported(String),
    Transport(String),
}

/// Record of a call made to the mock provider.
#[derive(Debug, Clone, PartialEq)]
pub struct MockCall {
    pub url: String,
    pub method: ExtractionMethod,
    pub prompt: String,
    pub timeout: Duration,
}

/// Mock scrape provider.
///
/// # Example
///
/// ```rust
/// use product_extractor::testing::MockProvider;
/// use serde_json::json;
///
/// let mock = MockProvider::new().with_response(
///     "https://example.com/widget",
///     json!({ "json": { "productName": "Widget" } }),
/// );
/// assert_eq!(mock.call_count(), 0);
/// ```
#[derive(Clone)]
pub struct MockProvider {
    methods: Vec<ExtractionMethod>,
    responses: Arc<RwLock<HashMap<String, MockResponse>>>,
    calls: Arc<RwLock<Vec<MockCall>>>,
    delay: Option<Duration>,
}

impl Default for MockProvider {
    fn default() -> Self {
        Self {
            methods: ExtractionMethod::RANKED.to_vec(),
            responses: Arc::default(),
            calls: Arc::default(),
            delay: None,
        }
    }
}

impl MockProvider {
    /// A mock that supports every known method.
    pub fn new() -> Self {
        Self::default()
    }

    /// A mock that exposes no extraction method at all.
    pub fn without_capabilities() -> Self {
        Self::new().with_methods(Vec::new())
    }

    pub fn with_methods(mut self, methods: Vec<ExtractionMethod>) -> Self {
        self.methods = methods;
        self
    }

    /// Return `value` when `url` is scraped.
    pub fn with_response(self, url: impl Into<String>, value: Value) -> Self {
        self.insert(url, MockResponse::Result(value));
        self
    }

    /// Fail with a provider-reported error when `url` is scraped.
    pub fn with_provider_error(self, url: impl Into<String>, message: impl Into<String>) -> Self {
        self.insert(url, MockResponse::Reported(message.into()));
        self
    }

    /// Fail with a transport error when `url` is scraped.
    pub fn with_transport_error(self, url: impl Into<String>, message: impl Into<String>) -> Self {
        self.insert(url, MockResponse::Transport(message.into()));
        self
    }

    /// Sleep this long before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    fn insert(&self, url: impl Into<String>, response: MockResponse) {
        self.responses.write().unwrap().insert(url.into(), response);
    }

    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    pub fn calls(&self) -> Vec<MockCall> {
        self.calls.read().unwrap().clone()
    }
}

#[async_trait]
impl ScrapeProvider for MockProvider {
    fn name(&self) -> &str {
        "mock"
    }

    fn supports(&self, method: ExtractionMethod) -> bool {
        self.methods.contains(&method)
    }

    async fn scrape(
        &self,
        method: ExtractionMethod,
        request: &ScrapeRequest,
        schema: &ExtractionSchema,
        options: &ScrapeOptions,
    ) -> Result<RawProviderResult, ProviderFailure> {
        self.calls.write().unwrap().push(MockCall {
            url: request.target_url.clone(),
            method,
            prompt: schema.prompt.to_string(),
            timeout: options.timeout,
        });

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let response = self
            .responses
            .read()
            .unwrap()
            .get(&request.target_url)
            .cloned();

        match response {
            Some(MockResponse::Result(value)) => Ok(RawProviderResult::new(value)),
            Some(MockResponse::Reported(message)) => Err(ProviderFailure::Reported(message)),
            Some(MockResponse::Transport(message)) => Err(ProviderFailure::Transport(message)),
            None => Err(ProviderFailure::Reported(format!(
                "no canned response for {}",
                request.target_url
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::PRODUCT_SCHEMA;
    use serde_json::json;

    fn options() -> ScrapeOptions {
        ScrapeOptions {
            timeout: Duration::from_secs(30),
        }
    }

    #[tokio::test]
    async fn test_mock_records_calls() {
        let mock = MockProvider::new().with_response("https://a.test", json!({ "json": {} }));
        let request = ScrapeRequest::new("https://a.test");

        let raw = mock
            .scrape(ExtractionMethod::JsonFormat, &request, &PRODUCT_SCHEMA, &options())
            .await
            .unwrap();

        assert_eq!(raw.as_value(), &json!({ "json": {} }));
        assert_eq!(mock.call_count(), 1);
        assert_eq!(mock.calls()[0].url, "https://a.test");
        assert_eq!(mock.calls()[0].method, ExtractionMethod::JsonFormat);
    }

    #[tokio::test]
    async fn test_mock_unknown_url_is_provider_error() {
        let mock = MockProvider::new();
        let request = ScrapeRequest::new("https://missing.test");

        let err = mock
            .scrape(ExtractionMethod::JsonFormat, &request, &PRODUCT_SCHEMA, &options())
            .await
            .unwrap_err();

        assert!(matches!(err, ProviderFailure::Reported(_)));
    }

    #[test]
    fn test_clones_share_state() {
        let mock = MockProvider::new();
        let clone = mock.clone().with_response("https://a.test", json!({}));
        assert!(clone.responses.read().unwrap().contains_key("https://a.test"));
        assert!(mock.responses.read().unwrap().contains_key("https://a.test"));
        assert!(!MockProvider::without_capabilities().supports(ExtractionMethod::JsonFormat));
    }
}
