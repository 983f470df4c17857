//! Scrape provider implementations.
//!
//! - `FirecrawlProvider` - Firecrawl REST API (v1 or v2)
//! - `MockProvider` - canned responses for tests, see [`crate::testing`]

mod firecrawl;

pub use firecrawl::FirecrawlProvider;

pub use crate::provider::{ExtractionMethod, ScrapeProvider};
