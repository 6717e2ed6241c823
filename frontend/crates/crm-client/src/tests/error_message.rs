use crate::{Payload, failure_message};

use proptest::prelude::*;
use serde_json::json;

// =========================================================================
// Unit Tests
// =========================================================================

#[test]
fn given_field_errors_when_normalized_then_joined_in_key_order() {
    let payload = Payload::Json(json!({
        "lastName": "Last name is required",
        "email": "Email format is invalid"
    }));

    let message = failure_message(400, &payload);

    assert_eq!(
        message,
        "lastName: Last name is required, email: Email format is invalid"
    );
}

#[test]
fn given_single_error_field_when_normalized_then_pair() {
    let payload = Payload::Json(json!({"error": "Invalid credentials"}));
    assert_eq!(failure_message(401, &payload), "error: Invalid credentials");
}

#[test]
fn given_non_string_field_value_when_normalized_then_rendered_as_json() {
    let payload = Payload::Json(json!({"code": 42, "details": {"a": 1}}));
    assert_eq!(failure_message(500, &payload), r#"code: 42, details: {"a":1}"#);
}

#[test]
fn given_array_body_when_normalized_then_keyed_by_index() {
    let payload = Payload::Json(json!(["first", "second"]));
    assert_eq!(failure_message(422, &payload), "0: first, 1: second");
}

#[test]
fn given_text_body_when_normalized_then_text_used() {
    let payload = Payload::Text("At least one valid search parameter is required".to_string());
    assert_eq!(
        failure_message(400, &payload),
        "At least one valid search parameter is required"
    );
}

#[test]
fn given_empty_text_when_normalized_then_http_status() {
    let payload = Payload::Text(String::new());
    assert_eq!(failure_message(503, &payload), "HTTP 503");
}

#[test]
fn given_empty_object_when_normalized_then_http_status() {
    let payload = Payload::Json(json!({}));
    assert_eq!(failure_message(404, &payload), "HTTP 404");
}

#[test]
fn given_json_null_when_normalized_then_http_status() {
    assert_eq!(failure_message(500, &Payload::Json(json!(null))), "HTTP 500");
}

#[test]
fn given_json_string_when_normalized_then_string_used() {
    let payload = Payload::Json(json!("Forbidden"));
    assert_eq!(failure_message(403, &payload), "Forbidden");
}

// =========================================================================
// Property-Based Tests
// =========================================================================

proptest! {
    #[test]
    fn given_any_status_with_empty_body_when_normalized_then_http_status(status in 400u16..600) {
        prop_assert_eq!(
            failure_message(status, &Payload::Text(String::new())),
            format!("HTTP {status}")
        );
    }

    #[test]
    fn given_two_fields_when_normalized_then_pairs_in_insertion_order(
        f1 in "[a-z]{1,8}",
        f2 in "[A-Z]{1,8}",
        e1 in "[a-z ]{1,20}",
        e2 in "[a-z ]{1,20}",
    ) {
        let mut fields = serde_json::Map::new();
        fields.insert(f1.clone(), json!(e1.clone()));
        fields.insert(f2.clone(), json!(e2.clone()));

        let message = failure_message(400, &Payload::Json(serde_json::Value::Object(fields)));

        prop_assert_eq!(message, format!("{f1}: {e1}, {f2}: {e2}"));
    }
}
