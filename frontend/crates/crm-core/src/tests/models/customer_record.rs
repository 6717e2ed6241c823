use crate::{CustomerDraft, CustomerRecord};

use serde_json::json;

fn sample_draft() -> CustomerDraft {
    CustomerDraft::new(
        "John",
        "Smith",
        "Main Street 1",
        "0612345678",
        "john@example.com",
    )
}

#[test]
fn given_camel_case_json_when_deserialize_then_fields_map() {
    let value = json!({
        "id": 7,
        "firstName": "John",
        "lastName": "Smith",
        "address": "Main Street 1",
        "phoneNumber": "0612345678",
        "email": "john@example.com"
    });

    let record: CustomerRecord = serde_json::from_value(value).unwrap();

    assert_eq!(record.id, 7);
    assert_eq!(record.first_name, "John");
    assert_eq!(record.phone_number, "0612345678");
}

#[test]
fn given_null_address_when_deserialize_then_empty_string() {
    let value = json!({
        "id": 1,
        "firstName": "Ann",
        "lastName": "Lee",
        "address": null,
        "phoneNumber": "0612345678",
        "email": "ann@example.com"
    });

    let record: CustomerRecord = serde_json::from_value(value).unwrap();

    assert!(record.address.is_empty());
}

#[test]
fn given_missing_address_when_deserialize_then_empty_string() {
    let value = json!({"id": 1, "firstName": "Ann", "lastName": "Lee"});

    let record: CustomerRecord = serde_json::from_value(value).unwrap();

    assert!(record.address.is_empty());
    assert!(record.email.is_empty());
}

#[test]
fn given_draft_when_serialize_then_no_id_and_camel_case() {
    let json = serde_json::to_value(sample_draft()).unwrap();

    assert!(json.get("id").is_none());
    assert_eq!(json["firstName"], "John");
    assert_eq!(json["phoneNumber"], "0612345678");
}

#[test]
fn given_draft_when_from_draft_then_record_carries_id_and_fields() {
    let record = CustomerRecord::from_draft(42, &sample_draft());

    assert_eq!(record.id, 42);
    assert_eq!(CustomerDraft::from(&record), sample_draft());
}

#[test]
fn given_record_when_field_values_then_id_comes_first() {
    let record = CustomerRecord::from_draft(3, &sample_draft());

    let values = record.field_values();

    assert_eq!(values[0], "3");
    assert_eq!(values[2], "Smith");
    assert_eq!(record.full_name(), "John Smith");
}
