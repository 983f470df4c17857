// Scrape one product page and print the normalized record as JSON

use anyhow::{Context, Result};
use clap::Parser;
use product_extractor::{
    ApiVersion, ExtractorConfig, FirecrawlConfig, FirecrawlProvider, ProductExtractor,
};
use std::time::Duration;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use url::Url;

#[derive(Parser, Debug)]
#[command(name = "scrape-product", about = "Extract a product's name and price from a page")]
struct Args {
    /// Product page to scrape
    url: Url,

    /// Give up on the provider after this many seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Firecrawl API version (v1 or v2); overrides FIRECRAWL_API_VERSION
    #[arg(long)]
    api_version: Option<ApiVersion>,

    /// Currency to report when the page has none
    #[arg(long, default_value = "USD")]
    default_currency: String,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,product_extractor=debug,firecrawl_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();

    let mut firecrawl =
        FirecrawlConfig::from_env().context("Failed to load Firecrawl configuration")?;
    if let Some(version) = args.api_version {
        firecrawl = firecrawl.with_api_version(version);
    }
    tracing::info!(
        base_url = %firecrawl.base_url,
        api_version = %firecrawl.api_version,
        "Configuration loaded"
    );

    let config = ExtractorConfig::new()
        .with_timeout(Duration::from_secs(args.timeout_secs))
        .with_default_currency(args.default_currency);
    let extractor = ProductExtractor::with_config(FirecrawlProvider::new(firecrawl), config);

    let product = extractor
        .extract(args.url.as_str())
        .await
        .with_context(|| format!("Scrape of {} failed", args.url))?;

    let output = if args.pretty {
        serde_json::to_string_pretty(&product)?
    } else {
        serde_json::to_string(&product)?
    };
    println!("{output}");

    Ok(())
}
