//! Shape validation for product-creation payloads.
//!
//! Pure functions over raw JSON: no I/O, no mutation. On success the
//! validated object is handed back so callers can persist it verbatim.

use serde_json::{Map, Value};

/// Validate a product-creation body.
///
/// Requires a JSON object with a string `name` and an `attributes` array
/// whose every element is a string. Arbitrary additional fields pass
/// through untouched.
pub fn validate_product_payload(
    body: Option<&Value>,
) -> Result<&Map<String, Value>, String> {
    let Some(body) = body else {
        return Err("Missing request body".to_string());
    };

    if body.is_null() {
        return Err("Missing request body".to_string());
    }

    let Some(fields) = body.as_object() else {
        return Err("Invalid request data format (expected a dictionary)".to_string());
    };

    if !matches!(fields.get("name"), Some(Value::String(_))) {
        return Err("Missing or invalid product name (expected a string)".to_string());
    }

    match fields.get("attributes") {
        Some(Value::Array(attributes)) if attributes.iter().all(Value::is_string) => {}
        _ => {
            return Err("Missing or invalid attributes (expected a list of strings)".to_string());
        }
    }

    Ok(fields)
}
