//! The extraction contract sent to the scraping provider.

use serde_json::{json, Map, Value};

/// JSON type of a schema field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    String,
    Number,
}

impl FieldType {
    fn json_type(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchemaField {
    pub name: &'static str,
    pub field_type: FieldType,
    pub required: bool,
}

/// Declarative output shape plus the natural-language instruction that
/// accompanies it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionSchema {
    pub prompt: &'static str,
    pub fields: &'static [SchemaField],
}

impl ExtractionSchema {
    /// Render as a JSON Schema object.
    pub fn json_schema(&self) -> Value {
        let properties: Map<String, Value> = self
            .fields
            .iter()
            .map(|f| (f.name.to_string(), json!({ "type": f.field_type.json_type() })))
            .collect();

        let required: Vec<&str> = self
            .fields
            .iter()
            .filter(|f| f.required)
            .map(|f| f.name)
            .collect();

        json!({
            "type": "object",
            "properties": properties,
            "required": required,
        })
    }
}

/// Product name, price, currency and image.
pub const PRODUCT_SCHEMA: ExtractionSchema = ExtractionSchema {
    prompt: "Extract the product name as 'productName', current price as a number as \
             'currentPrice', currency code (USD, EUR, etc) as 'currencyCode', and product \
             image URL as 'productImageUrl' if available",
    fields: &[
        SchemaField {
            name: "productName",
            field_type: FieldType::String,
            required: true,
        },
        SchemaField {
            name: "currentPrice",
            field_type: FieldType::Number,
            required: true,
        },
        SchemaField {
            name: "currencyCode",
            field_type: FieldType::String,
            required: false,
        },
        SchemaField {
            name: "productImageUrl",
            field_type: FieldType::String,
            required: false,
        },
    ],
};
