//! Normalizes the list shapes the customer endpoints answer with.

use crate::Payload;

use crm_core::CustomerRecord;
use log::warn;
use serde_json::Value;

/// Records from a list response: a bare array or `{ "data": [...] }`.
/// Any other shape yields an empty list. Entries that don't decode are
/// skipped.
pub fn records_from_payload(payload: Payload) -> Vec<CustomerRecord> {
    match payload.into_json() {
        Value::Array(items) => decode_records(items),
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(items)) => decode_records(items),
            _ => Vec::new(),
        },
        _ => Vec::new(),
    }
}

/// Records from a search response, which may also be a single record.
pub fn search_results_from_payload(payload: Payload) -> Vec<CustomerRecord> {
    match payload {
        Payload::Json(Value::Object(map)) if !map.contains_key("data") => {
            decode_records(vec![Value::Object(map)])
        }
        other => records_from_payload(other),
    }
}

fn decode_records(items: Vec<Value>) -> Vec<CustomerRecord> {
    items
        .into_iter()
        .filter_map(|item| match serde_json::from_value::<CustomerRecord>(item) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Skipping customer entry that does not decode: {e}");
                None
            }
        })
        .collect()
}
