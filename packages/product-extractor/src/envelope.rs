//! Known response envelopes for structured scrape results.
//!
//! Providers place the extracted object under different keys depending on
//! API version and backend. Envelopes are matched in a fixed order and the
//! first one present wins; later envelopes are never consulted.
//!
//! `extract` counts as present whenever it is non-null. `json` and
//! `data.extract` must also be truthy: `false`, `0` and `""` fall through
//! to the next envelope.

use serde_json::{Map, Value};

/// Where the extracted object was found.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResponseEnvelope<'a> {
    /// `{ "extract": { .. } }`
    Extract(&'a Map<String, Value>),

    /// `{ "json": { .. } }` or `{ "json": [{ .. }] }`
    Json(&'a Map<String, Value>),

    /// `{ "data": { "extract": { .. } } }`
    NestedData(&'a Map<String, Value>),

    /// None of the above, or the matched payload was not an object.
    Unrecognized,
}

impl<'a> ResponseEnvelope<'a> {
    pub fn classify(raw: &'a Value) -> Self {
        if let Some(extract) = present(raw.get("extract")) {
            return Self::object_or_unrecognized(extract, Self::Extract);
        }

        if let Some(json) = truthy(raw.get("json")) {
            let inner = match json {
                Value::Array(items) => present(items.first()),
                other => Some(other),
            };
            // An empty `json` array falls through to the nested envelope
            if let Some(inner) = inner {
                return Self::object_or_unrecognized(inner, Self::Json);
            }
        }

        if let Some(extract) = truthy(raw.get("data").and_then(|d| d.get("extract"))) {
            return Self::object_or_unrecognized(extract, Self::NestedData);
        }

        Self::Unrecognized
    }

    fn object_or_unrecognized(value: &'a Value, wrap: fn(&'a Map<String, Value>) -> Self) -> Self {
        value.as_object().map_or(Self::Unrecognized, wrap)
    }

    pub fn payload(&self) -> Option<&'a Map<String, Value>> {
        match *self {
            Self::Extract(map) | Self::Json(map) | Self::NestedData(map) => Some(map),
            Self::Unrecognized => None,
        }
    }

    /// Short label for logs.
    pub fn shape(&self) -> &'static str {
        match self {
            Self::Extract(_) => "extract",
            Self::Json(_) => "json",
            Self::NestedData(_) => "data.extract",
            Self::Unrecognized => "unrecognized",
        }
    }
}

fn present(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| !v.is_null())
}

fn truthy(value: Option<&Value>) -> Option<&Value> {
    present(value).filter(|v| match v {
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        _ => true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_envelope() {
        let raw = json!({ "extract": { "productName": "A" } });
        let envelope = ResponseEnvelope::classify(&raw);
        assert_eq!(envelope.shape(), "extract");
        assert_eq!(envelope.payload().unwrap()["productName"], "A");
    }

    #[test]
    fn test_json_object_and_array() {
        let object = json!({ "json": { "productName": "A" } });
        let array = json!({ "json": [{ "productName": "A" }, { "productName": "B" }] });
        assert_eq!(ResponseEnvelope::classify(&object).shape(), "json");
        let envelope = ResponseEnvelope::classify(&array);
        assert_eq!(envelope.shape(), "json");
        assert_eq!(envelope.payload().unwrap()["productName"], "A");
    }

    #[test]
    fn test_nested_data_envelope() {
        let raw = json!({ "data": { "extract": { "productName": "A" } } });
        assert_eq!(ResponseEnvelope::classify(&raw).shape(), "data.extract");
    }

    #[test]
    fn test_first_match_wins() {
        // `extract` is present, so `json` is never looked at, even though
        // only `json` carries a product name.
        let raw = json!({
            "extract": { "price": 1.0 },
            "json": { "productName": "ignored" }
        });
        let envelope = ResponseEnvelope::classify(&raw);
        assert_eq!(envelope.shape(), "extract");
        assert!(envelope.payload().unwrap().get("productName").is_none());
    }

    #[test]
    fn test_null_keys_fall_through() {
        let raw = json!({
            "extract": null,
            "json": null,
            "data": { "extract": { "productName": "A" } }
        });
        assert_eq!(ResponseEnvelope::classify(&raw).shape(), "data.extract");
    }

    #[test]
    fn test_empty_json_array_falls_through() {
        let raw = json!({ "json": [], "data": { "extract": { "productName": "A" } } });
        assert_eq!(ResponseEnvelope::classify(&raw).shape(), "data.extract");

        let bare = json!({ "json": [] });
        assert_eq!(ResponseEnvelope::classify(&bare), ResponseEnvelope::Unrecognized);
    }

    #[test]
    fn test_falsy_json_and_nested_fall_through() {
        for falsy in [json!(""), json!(false), json!(0)] {
            let raw = json!({ "json": falsy, "data": { "extract": { "productName": "W" } } });
            let envelope = ResponseEnvelope::classify(&raw);
            assert_eq!(envelope.shape(), "data.extract", "{raw}");
            assert_eq!(envelope.payload().unwrap()["productName"], "W");

            let nested = json!({ "data": { "extract": falsy } });
            assert_eq!(ResponseEnvelope::classify(&nested), ResponseEnvelope::Unrecognized);
        }
    }

    #[test]
    fn test_falsy_extract_still_matches() {
        let raw = json!({ "extract": "", "json": { "productName": "W" } });
        assert_eq!(ResponseEnvelope::classify(&raw), ResponseEnvelope::Unrecognized);
    }

    #[test]
    fn test_non_object_payload_is_unrecognized() {
        let raw = json!({ "extract": "Widget, $19.99" });
        assert_eq!(ResponseEnvelope::classify(&raw), ResponseEnvelope::Unrecognized);
    }

    #[test]
    fn test_unknown_shapes() {
        for raw in [
            json!({}),
            json!(null),
            json!({ "markdown": "# Widget" }),
            json!({ "data": { "markdown": "# Widget" } }),
            json!([{ "productName": "A" }]),
        ] {
            let envelope = ResponseEnvelope::classify(&raw);
            assert_eq!(envelope.shape(), "unrecognized", "{raw}");
            assert!(envelope.payload().is_none());
        }
    }
}
