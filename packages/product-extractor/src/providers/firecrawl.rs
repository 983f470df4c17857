//! Firecrawl adapter.
//!
//! One adapter instance speaks exactly one API version, chosen from
//! [`FirecrawlConfig`]: v2 exposes [`ExtractionMethod::JsonFormat`], v1
//! exposes [`ExtractionMethod::ExtractFormat`].

use async_trait::async_trait;
use firecrawl_client::{
    ApiVersion, FirecrawlClient, FirecrawlError, JsonExtraction, ScrapeRequestV1, ScrapeRequestV2,
};

use crate::config::FirecrawlConfig;
use crate::provider::{
    ExtractionMethod, ProviderFailure, RawProviderResult, ScrapeOptions, ScrapeProvider,
    ScrapeRequest,
};
use crate::schema::ExtractionSchema;

pub struct FirecrawlProvider {
    client: FirecrawlClient,
    api_version: ApiVersion,
}

impl FirecrawlProvider {
    pub fn new(config: FirecrawlConfig) -> Self {
        let client = FirecrawlClient::new(config.api_key).with_base_url(config.base_url);
        Self {
            client,
            api_version: config.api_version,
        }
    }

    pub fn api_version(&self) -> ApiVersion {
        self.api_version
    }

    fn method(&self) -> ExtractionMethod {
        match self.api_version {
            ApiVersion::V1 => ExtractionMethod::ExtractFormat,
            ApiVersion::V2 => ExtractionMethod::JsonFormat,
        }
    }
}

#[async_trait]
impl ScrapeProvider for FirecrawlProvider {
    fn name(&self) -> &str {
        "firecrawl"
    }

    fn supports(&self, method: ExtractionMethod) -> bool {
        method == self.method()
    }

    async fn scrape(
        &self,
        method: ExtractionMethod,
        request: &ScrapeRequest,
        schema: &ExtractionSchema,
        options: &ScrapeOptions,
    ) -> Result<RawProviderResult, ProviderFailure> {
        let extraction = JsonExtraction {
            prompt: schema.prompt.to_string(),
            schema: schema.json_schema(),
        };
        let timeout_ms = options.timeout.as_millis() as u64;

        let document = match method {
            ExtractionMethod::JsonFormat => {
                let body = ScrapeRequestV2::json(&request.target_url, extraction)
                    .with_timeout_ms(timeout_ms);
                self.client.scrape_v2(&body, options.timeout).await
            }
            ExtractionMethod::ExtractFormat => {
                let body = ScrapeRequestV1::extract(&request.target_url, extraction)
                    .with_timeout_ms(timeout_ms);
                self.client.scrape_v1(&body, options.timeout).await
            }
        };

        document.map(RawProviderResult::new).map_err(into_failure)
    }
}

fn into_failure(err: FirecrawlError) -> ProviderFailure {
    if err.is_reported_by_provider() {
        ProviderFailure::Reported(err.to_string())
    } else {
        ProviderFailure::Transport(err.to_string())
    }
}
