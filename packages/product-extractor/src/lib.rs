//! Product Price Extraction Library
//!
//! Asks a scraping provider for a schema-constrained extraction of a product
//! page and reconciles whatever shape comes back into one canonical record.
//!
//! # Usage
//!
//! ```rust,ignore
//! use product_extractor::{ProductExtractor, testing::MockProvider};
//! use serde_json::json;
//!
//! let provider = MockProvider::new().with_response(
//!     "https://example.com/widget",
//!     json!({ "json": { "productName": "Widget", "price": 19.99 } }),
//! );
//! let extractor = ProductExtractor::new(provider);
//! let product = extractor.extract("https://example.com/widget").await?;
//! assert_eq!(product.currency_code, "USD");
//! ```
//!
//! # Modules
//!
//! - [`provider`] - Provider adapter trait and capability negotiation
//! - [`providers`] - Firecrawl adapter
//! - [`envelope`] - Known response shapes, matched first-wins
//! - [`product`] - Canonical record and synonym reconciliation
//! - [`extractor`] - The extraction entry point
//! - [`testing`] - Mock provider

pub mod config;
pub mod envelope;
pub mod error;
pub mod extractor;
pub mod product;
pub mod provider;
pub mod providers;
pub mod schema;
pub mod testing;

pub use config::{ExtractorConfig, FirecrawlConfig, DEFAULT_TIMEOUT};
pub use envelope::ResponseEnvelope;
pub use error::{ConfigError, ExtractionError, FailureKind, Result};
pub use extractor::ProductExtractor;
pub use product::NormalizedProduct;
pub use provider::{
    ExtractionMethod, ProviderFailure, RawProviderResult, ScrapeOptions, ScrapeProvider,
    ScrapeRequest,
};
pub use providers::FirecrawlProvider;
pub use schema::{ExtractionSchema, PRODUCT_SCHEMA};

pub use firecrawl_client::ApiVersion;
