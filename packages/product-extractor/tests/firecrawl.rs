//! End-to-end tests through the Firecrawl adapter against a mock server.

use product_extractor::{
    ApiVersion, FailureKind, FirecrawlConfig, FirecrawlProvider, ProductExtractor,
};
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const URL: &str = "https://example.com/widget";

fn extractor_for(server: &MockServer, version: ApiVersion) -> ProductExtractor<FirecrawlProvider> {
    let config = FirecrawlConfig::new("fc-test-key")
        .with_base_url(server.uri())
        .with_api_version(version);
    ProductExtractor::new(FirecrawlProvider::new(config))
}

#[tokio::test]
async fn test_v2_json_format_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/scrape"))
        .and(header("authorization", "Bearer fc-test-key"))
        .and(body_partial_json(json!({
            "url": URL,
            "formats": [{
                "type": "json",
                "schema": { "required": ["productName", "currentPrice"] }
            }],
            "timeout": 30000
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "json": {
                    "productName": "Widget",
                    "currentPrice": 19.99,
                    "currencyCode": "EUR",
                    "productImageUrl": "https://img/widget.png"
                },
                "metadata": { "sourceURL": URL }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let product = extractor_for(&server, ApiVersion::V2)
        .extract(URL)
        .await
        .unwrap();

    assert_eq!(product.product_name, "Widget");
    assert_eq!(product.current_price, Some(19.99));
    assert_eq!(product.currency_code, "EUR");
    assert_eq!(product.product_image_url.as_deref(), Some("https://img/widget.png"));
}

#[tokio::test]
async fn test_v1_extract_format_round_trip() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/scrape"))
        .and(body_partial_json(json!({ "formats": ["extract"] })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "extract": { "name": "Gadget", "price": "$1,299.00" } }
        })))
        .mount(&server)
        .await;

    let product = extractor_for(&server, ApiVersion::V1)
        .extract(URL)
        .await
        .unwrap();

    assert_eq!(product.product_name, "Gadget");
    assert_eq!(product.current_price, Some(1299.0));
    assert_eq!(product.currency_code, "USD");
}

#[tokio::test]
async fn test_api_error_becomes_provider_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/scrape"))
        .respond_with(ResponseTemplate::new(402).set_body_json(json!({
            "success": false,
            "error": "Insufficient credits"
        })))
        .mount(&server)
        .await;

    let err = extractor_for(&server, ApiVersion::V2)
        .extract(URL)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), FailureKind::ProviderError);
    assert!(err.to_string().contains("Insufficient credits"));
    assert!(!err.to_string().contains("fc-test-key"));
}

#[tokio::test]
async fn test_success_without_product_is_empty_extraction() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v2/scrape"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "json": { "currentPrice": 19.99 } }
        })))
        .mount(&server)
        .await;

    let err = extractor_for(&server, ApiVersion::V2)
        .extract(URL)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), FailureKind::EmptyExtraction);
}
