// Unit tests for the product payload validator
//
// The validator is a pure function over raw JSON; every rejection carries
// the exact reason string the API returns to clients.

use proptest::prelude::*;
use serde_json::{json, Value};

use variant_control::products::validators::validate_product_payload;

#[test]
fn test_missing_body_is_rejected() {
    let err = validate_product_payload(None).unwrap_err();
    assert_eq!(err, "Missing request body");
}

#[test]
fn test_null_body_is_rejected() {
    let err = validate_product_payload(Some(&Value::Null)).unwrap_err();
    assert_eq!(err, "Missing request body");
}

#[test]
fn test_non_object_body_is_rejected() {
    let body = json!(["not", "a", "dictionary"]);
    let err = validate_product_payload(Some(&body)).unwrap_err();
    assert_eq!(err, "Invalid request data format (expected a dictionary)");
}

#[test]
fn test_missing_name_is_rejected() {
    let body = json!({ "attributes": ["color"] });
    let err = validate_product_payload(Some(&body)).unwrap_err();
    assert_eq!(err, "Missing or invalid product name (expected a string)");
}

#[test]
fn test_non_string_name_is_rejected() {
    let body = json!({ "name": 42, "attributes": ["color"] });
    let err = validate_product_payload(Some(&body)).unwrap_err();
    assert_eq!(err, "Missing or invalid product name (expected a string)");
}

#[test]
fn test_missing_attributes_is_rejected() {
    let body = json!({ "name": "Shirt" });
    let err = validate_product_payload(Some(&body)).unwrap_err();
    assert_eq!(
        err,
        "Missing or invalid attributes (expected a list of strings)"
    );
}

#[test]
fn test_non_list_attributes_is_rejected() {
    let body = json!({ "name": "Shirt", "attributes": "color" });
    let err = validate_product_payload(Some(&body)).unwrap_err();
    assert_eq!(
        err,
        "Missing or invalid attributes (expected a list of strings)"
    );
}

#[test]
fn test_non_string_attribute_element_is_rejected() {
    let body = json!({ "name": "Shirt", "attributes": ["color", 7] });
    let err = validate_product_payload(Some(&body)).unwrap_err();
    assert_eq!(
        err,
        "Missing or invalid attributes (expected a list of strings)"
    );
}

#[test]
fn test_minimal_payload_passes() {
    let body = json!({ "name": "Shirt", "attributes": [] });
    assert!(validate_product_payload(Some(&body)).is_ok());
}

#[test]
fn test_extra_fields_pass_through() {
    let body = json!({
        "name": "Shirt",
        "attributes": ["color", "size"],
        "brand": "Acme",
        "stock": 12
    });
    let fields = validate_product_payload(Some(&body)).unwrap();
    assert_eq!(fields["brand"], "Acme");
    assert_eq!(fields["stock"], 12);
}

proptest! {
    #[test]
    fn test_well_formed_payloads_always_pass(
        name in ".*",
        attributes in prop::collection::vec("[a-z]{1,12}", 0..8)
    ) {
        let body = json!({ "name": name, "attributes": attributes });
        prop_assert!(validate_product_payload(Some(&body)).is_ok());
    }

    #[test]
    fn test_payloads_without_name_always_fail(
        attributes in prop::collection::vec("[a-z]{1,12}", 0..8)
    ) {
        let body = json!({ "attributes": attributes });
        prop_assert!(validate_product_payload(Some(&body)).is_err());
    }
}
