//! Configuration for the extractor and the Firecrawl provider.

use firecrawl_client::{ApiKey, ApiVersion, DEFAULT_BASE_URL};
use std::env;
use std::time::Duration;

use crate::error::ConfigError;
use crate::product::DEFAULT_CURRENCY;

/// Upper bound on a single provider call.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Extractor behavior.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractorConfig {
    /// Provider calls exceeding this fail as a transport timeout.
    ///
    /// Default: 30 seconds.
    pub timeout: Duration,

    /// Currency used when the payload has no currency under any synonym.
    ///
    /// Default: "USD". Sites priced in other currencies that omit the
    /// currency will be mislabeled.
    pub default_currency: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
            default_currency: DEFAULT_CURRENCY.to_string(),
        }
    }
}

impl ExtractorConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_default_currency(mut self, currency: impl Into<String>) -> Self {
        self.default_currency = currency.into();
        self
    }
}

/// Connection settings for Firecrawl.
#[derive(Debug, Clone)]
pub struct FirecrawlConfig {
    pub api_key: ApiKey,
    pub base_url: String,
    pub api_version: ApiVersion,
}

impl FirecrawlConfig {
    pub fn new(api_key: impl Into<ApiKey>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: ApiVersion::default(),
        }
    }

    /// Load from `FIRECRAWL_API_KEY`, `FIRECRAWL_API_URL` and
    /// `FIRECRAWL_API_VERSION`, reading `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();

        let api_key = env::var("FIRECRAWL_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingVar("FIRECRAWL_API_KEY"))?;

        let mut config = Self::new(api_key);

        if let Ok(base_url) = env::var("FIRECRAWL_API_URL") {
            config = config.with_base_url(base_url);
        }

        if let Ok(version) = env::var("FIRECRAWL_API_VERSION") {
            let version = version
                .parse::<ApiVersion>()
                .map_err(|e| ConfigError::InvalidVar {
                    name: "FIRECRAWL_API_VERSION",
                    reason: e.to_string(),
                })?;
            config = config.with_api_version(version);
        }

        Ok(config)
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_api_version(mut self, version: ApiVersion) -> Self {
        self.api_version = version;
        self
    }
}
