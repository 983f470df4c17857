//! Product extraction: one provider call, one normalized record.

use crate::config::ExtractorConfig;
use crate::envelope::ResponseEnvelope;
use crate::error::{ExtractionError, Result};
use crate::product::NormalizedProduct;
use crate::provider::{
    negotiate, ExtractionMethod, ProviderFailure, ScrapeOptions, ScrapeProvider, ScrapeRequest,
};
use crate::schema::PRODUCT_SCHEMA;

/// Scrapes a product page and reconciles the result into a
/// [`NormalizedProduct`].
///
/// The extraction method is negotiated once, at construction. The extractor
/// holds no mutable state, so one instance can serve concurrent calls.
///
/// # Example
///
/// ```rust,ignore
/// use product_extractor::{FirecrawlConfig, FirecrawlProvider, ProductExtractor};
///
/// let provider = FirecrawlProvider::new(FirecrawlConfig::from_env()?);
/// let extractor = ProductExtractor::new(provider);
/// let product = extractor.extract("https://example.com/widget").await?;
/// println!("{} costs {:?}", product.product_name, product.current_price);
/// ```
pub struct ProductExtractor<P> {
    provider: P,
    method: Option<ExtractionMethod>,
    config: ExtractorConfig,
}

impl<P: ScrapeProvider> ProductExtractor<P> {
    pub fn new(provider: P) -> Self {
        Self::with_config(provider, ExtractorConfig::default())
    }

    pub fn with_config(provider: P, config: ExtractorConfig) -> Self {
        let method = negotiate(&provider);
        match method {
            Some(method) => tracing::debug!(
                provider = provider.name(),
                method = method.as_str(),
                "Negotiated extraction method"
            ),
            None => tracing::warn!(
                provider = provider.name(),
                "Provider exposes no extraction method; every extract call will fail"
            ),
        }

        Self {
            provider,
            method,
            config,
        }
    }

    pub fn method(&self) -> Option<ExtractionMethod> {
        self.method
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Scrape `target_url` and return the normalized product.
    ///
    /// Makes at most one provider call and never retries.
    pub async fn extract(&self, target_url: &str) -> Result<NormalizedProduct> {
        let request = ScrapeRequest::new(target_url);

        let Some(method) = self.method else {
            return Err(self.fail(&request, ExtractionError::capability_unavailable(), None));
        };

        tracing::info!(
            url = %request.target_url,
            provider = self.provider.name(),
            method = method.as_str(),
            "Starting product scrape"
        );

        let options = ScrapeOptions {
            timeout: self.config.timeout,
        };
        let call = self.provider.scrape(method, &request, &PRODUCT_SCHEMA, &options);

        let raw = match tokio::time::timeout(self.config.timeout, call).await {
            Ok(Ok(raw)) => raw,
            Ok(Err(ProviderFailure::Reported(message))) => {
                return Err(self.fail(&request, ExtractionError::provider(message), None));
            }
            Ok(Err(ProviderFailure::Transport(message))) => {
                return Err(self.fail(&request, ExtractionError::transport(message), None));
            }
            Err(_) => {
                let err = ExtractionError::transport(format!(
                    "provider call timed out after {:?}",
                    self.config.timeout
                ));
                return Err(self.fail(&request, err, None));
            }
        };

        let envelope = ResponseEnvelope::classify(raw.as_value());
        tracing::debug!(
            url = %request.target_url,
            shape = envelope.shape(),
            "Located extraction payload"
        );

        let product = envelope.payload().and_then(|payload| {
            NormalizedProduct::from_payload(payload, &self.config.default_currency)
        });

        match product {
            Some(product) => {
                tracing::info!(
                    url = %request.target_url,
                    product_name = %product.product_name,
                    current_price = ?product.current_price,
                    currency = %product.currency_code,
                    "Product scrape completed"
                );
                Ok(product)
            }
            None => {
                let keys = raw.top_level_keys().join(",");
                let err = ExtractionError::empty("No data extracted from URL");
                Err(self.fail(&request, err, Some((envelope.shape(), keys))))
            }
        }
    }

    /// Log failure context and hand the error back.
    fn fail(
        &self,
        request: &ScrapeRequest,
        err: ExtractionError,
        shape: Option<(&str, String)>,
    ) -> ExtractionError {
        let (shape, keys) = shape.unwrap_or(("none", String::new()));
        tracing::error!(
            url = %request.target_url,
            provider = self.provider.name(),
            kind = %err.kind(),
            shape,
            keys = %keys,
            reason = %err.message(),
            "Product scrape failed"
        );
        err
    }
}
