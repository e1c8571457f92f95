// Unit tests for the variant wrapper and variant element validators

use serde_json::{json, Value};

use variant_control::variants::validators::{
    validate_variant_payload, validate_variant_wrapper,
};

// Wrapper payload

#[test]
fn test_wrapper_missing_body_is_rejected() {
    let err = validate_variant_wrapper(None).unwrap_err();
    assert_eq!(err, "Missing request body");
}

#[test]
fn test_wrapper_null_body_is_rejected() {
    let err = validate_variant_wrapper(Some(&Value::Null)).unwrap_err();
    assert_eq!(err, "Missing request body");
}

#[test]
fn test_wrapper_non_object_is_rejected() {
    let body = json!([{ "product_id": "x" }]);
    let err = validate_variant_wrapper(Some(&body)).unwrap_err();
    assert_eq!(err, "Invalid request data format (expected a dictionary)");
}

#[test]
fn test_wrapper_without_variants_means_empty() {
    let body = json!({});
    let variants = validate_variant_wrapper(Some(&body)).unwrap();
    assert!(variants.is_empty());
}

#[test]
fn test_wrapper_with_non_array_variants_is_rejected() {
    let body = json!({ "variants": "red" });
    let err = validate_variant_wrapper(Some(&body)).unwrap_err();
    assert_eq!(
        err,
        "Missing or invalid variants (expected a list of variant objects)"
    );
}

#[test]
fn test_wrapper_hands_back_the_variant_list() {
    let body = json!({ "variants": [{ "product_id": "a" }, { "product_id": "b" }] });
    let variants = validate_variant_wrapper(Some(&body)).unwrap();
    assert_eq!(variants.len(), 2);
}

// Individual variant elements

fn valid_variant() -> Value {
    json!({
        "product_id": "65f000000000000000000001",
        "values": [
            { "attribute": "color", "value": "red" },
            { "attribute": "size", "value": 42 },
            { "attribute": "in_stock", "value": true }
        ]
    })
}

#[test]
fn test_variant_with_all_value_types_passes() {
    let variant = valid_variant();
    let values = validate_variant_payload(&variant).unwrap();
    assert_eq!(values.len(), 3);
}

#[test]
fn test_variant_non_object_is_rejected() {
    let err = validate_variant_payload(&json!("red")).unwrap_err();
    assert_eq!(err, "Invalid variant data format (expected a dictionary)");
}

#[test]
fn test_variant_missing_product_id_is_rejected() {
    let variant = json!({ "values": [] });
    let err = validate_variant_payload(&variant).unwrap_err();
    assert_eq!(err, "Missing or invalid product ID (expected a string)");
}

#[test]
fn test_variant_missing_values_is_rejected() {
    let variant = json!({ "product_id": "abc" });
    let err = validate_variant_payload(&variant).unwrap_err();
    assert_eq!(
        err,
        "Missing or invalid values (expected a list of dictionaries)"
    );
}

#[test]
fn test_variant_empty_values_passes() {
    let variant = json!({ "product_id": "abc", "values": [] });
    assert!(validate_variant_payload(&variant).is_ok());
}

#[test]
fn test_value_element_non_object_is_rejected() {
    let variant = json!({ "product_id": "abc", "values": ["red"] });
    let err = validate_variant_payload(&variant).unwrap_err();
    assert_eq!(err, "Invalid value data format (expected a dictionary)");
}

#[test]
fn test_value_element_missing_attribute_is_rejected() {
    let variant = json!({ "product_id": "abc", "values": [{ "value": "red" }] });
    let err = validate_variant_payload(&variant).unwrap_err();
    assert_eq!(err, "Missing or invalid attribute (expected a string)");
}

#[test]
fn test_value_element_missing_value_is_rejected() {
    let variant = json!({ "product_id": "abc", "values": [{ "attribute": "color" }] });
    let err = validate_variant_payload(&variant).unwrap_err();
    assert_eq!(
        err,
        "Missing or invalid value for attribute (expected string, number, or boolean)"
    );
}

#[test]
fn test_float_values_are_rejected() {
    let variant = json!({
        "product_id": "abc",
        "values": [{ "attribute": "weight", "value": 1.5 }]
    });
    let err = validate_variant_payload(&variant).unwrap_err();
    assert_eq!(
        err,
        "Missing or invalid value for attribute (expected string, number, or boolean)"
    );
}

#[test]
fn test_null_value_is_rejected() {
    let variant = json!({
        "product_id": "abc",
        "values": [{ "attribute": "color", "value": null }]
    });
    assert!(validate_variant_payload(&variant).is_err());
}
