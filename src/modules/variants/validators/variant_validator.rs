//! Shape validation for variant-creation payloads.
//!
//! Two layers: the wrapper object submitted to the endpoint, and each
//! individual variant element inside its `variants` array. Both are pure
//! functions over raw JSON.

use serde_json::Value;

const NO_VARIANTS: &[Value] = &[];

/// Validate the wrapper payload of the variant-creation endpoint and hand
/// back its `variants` array. An absent `variants` field counts as empty.
pub fn validate_variant_wrapper(body: Option<&Value>) -> Result<&[Value], String> {
    let Some(body) = body else {
        return Err("Missing request body".to_string());
    };

    if body.is_null() {
        return Err("Missing request body".to_string());
    }

    let Some(fields) = body.as_object() else {
        return Err("Invalid request data format (expected a dictionary)".to_string());
    };

    match fields.get("variants") {
        None => Ok(NO_VARIANTS),
        Some(Value::Array(variants)) => Ok(variants),
        Some(_) => {
            Err("Missing or invalid variants (expected a list of variant objects)".to_string())
        }
    }
}

/// Validate a single variant element and hand back its `values` array.
///
/// `value` entries accept strings, integers, and booleans; floats are
/// rejected.
pub fn validate_variant_payload(variant: &Value) -> Result<&[Value], String> {
    let Some(fields) = variant.as_object() else {
        return Err("Invalid variant data format (expected a dictionary)".to_string());
    };

    if !matches!(fields.get("product_id"), Some(Value::String(_))) {
        return Err("Missing or invalid product ID (expected a string)".to_string());
    }

    let Some(Value::Array(values)) = fields.get("values") else {
        return Err("Missing or invalid values (expected a list of dictionaries)".to_string());
    };

    for value in values {
        let Some(pair) = value.as_object() else {
            return Err("Invalid value data format (expected a dictionary)".to_string());
        };

        if !matches!(pair.get("attribute"), Some(Value::String(_))) {
            return Err("Missing or invalid attribute (expected a string)".to_string());
        }

        match pair.get("value") {
            Some(Value::String(_)) | Some(Value::Bool(_)) => {}
            Some(Value::Number(n)) if n.is_i64() || n.is_u64() => {}
            _ => {
                return Err(
                    "Missing or invalid value for attribute (expected string, number, or boolean)"
                        .to_string(),
                );
            }
        }
    }

    Ok(values)
}
