//! The canonical product record and field-synonym reconciliation.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Keys accepted for each canonical field, highest priority first.
pub const NAME_KEYS: &[&str] = &["productName", "name", "title"];
pub const PRICE_KEYS: &[&str] = &["currentPrice", "productPrice", "price"];
pub const CURRENCY_KEYS: &[&str] = &["currencyCode", "currency", "productCurrency"];
pub const IMAGE_KEYS: &[&str] = &["productImageUrl", "image"];

pub const DEFAULT_CURRENCY: &str = "USD";

/// A product price record reconciled from a provider payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedProduct {
    pub product_name: String,
    pub current_price: Option<f64>,
    pub currency_code: String,
    pub product_image_url: Option<String>,
}

impl NormalizedProduct {
    /// Reconcile synonyms in an extracted payload.
    ///
    /// Returns `None` when no product name is present under any synonym;
    /// a record without a name is never produced.
    pub fn from_payload(payload: &Map<String, Value>, default_currency: &str) -> Option<Self> {
        let product_name = first_text(payload, NAME_KEYS)?;

        Some(Self {
            product_name,
            current_price: first_price(payload, PRICE_KEYS),
            currency_code: first_text(payload, CURRENCY_KEYS)
                .unwrap_or_else(|| default_currency.to_string()),
            product_image_url: first_text(payload, IMAGE_KEYS),
        })
    }
}

/// First non-blank string under any of `keys`.
fn first_text(payload: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| payload.get(*key))
        .filter_map(Value::as_str)
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

/// First value under any of `keys` that reads as a price.
fn first_price(payload: &Map<String, Value>, keys: &[&str]) -> Option<f64> {
    keys.iter()
        .filter_map(|key| payload.get(*key))
        .find_map(|value| match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => coerce_price(s),
            _ => None,
        })
        .filter(|price| price.is_finite())
}

/// Parse a price scraped as text, e.g. `"$1,299.99"` or `"19,99 €"`.
///
/// When both `.` and `,` appear, the last one is the decimal separator.
/// When only one kind appears, it groups thousands if it repeats, or if it
/// appears once with exactly three digits after it and a non-zero integer
/// part (`"1.299"`, `"1,299"`). Otherwise it is the decimal separator.
pub fn coerce_price(text: &str) -> Option<f64> {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | ',' | '-'))
        .collect();

    if !cleaned.chars().any(|c| c.is_ascii_digit()) {
        return None;
    }

    let decimal_at = match (cleaned.rfind(','), cleaned.rfind('.')) {
        (Some(comma), Some(dot)) => Some(comma.max(dot)),
        (Some(at), None) | (None, Some(at)) => lone_separator_decimal(&cleaned, at),
        (None, None) => None,
    };

    let normalized: String = cleaned
        .char_indices()
        .filter_map(|(i, c)| match c {
            _ if Some(i) == decimal_at => Some('.'),
            '.' | ',' => None,
            other => Some(other),
        })
        .collect();

    normalized.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Decimal position for a string using a single separator kind, or `None`
/// when that separator only groups thousands.
fn lone_separator_decimal(cleaned: &str, at: usize) -> Option<usize> {
    let separator = cleaned[at..].chars().next()?;
    if cleaned.matches(separator).count() > 1 {
        return None;
    }

    let integer = cleaned[..at].trim_start_matches('-');
    let fraction_digits = cleaned.len() - at - 1;
    let grouped = fraction_digits == 3 && !integer.is_empty() && !integer.starts_with('0');
    (!grouped).then_some(at)
}
