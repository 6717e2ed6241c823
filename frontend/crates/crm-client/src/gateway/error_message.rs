//! Turns a failed response body into one display-ready message.

use crate::Payload;

use serde_json::Value;

/// Message for a non-2xx response.
///
/// Object bodies become `"field: error"` pairs joined with `", "` in the
/// body's key order; arrays are treated as objects keyed by index. Text is
/// used as-is. Anything that would produce a blank message falls back to
/// `HTTP <status>`.
pub fn failure_message(status: u16, payload: &Payload) -> String {
    let message = match payload {
        Payload::Empty => String::new(),
        Payload::Text(text) => text.clone(),
        Payload::Json(Value::Object(fields)) => {
            join_pairs(fields.iter().map(|(name, error)| (name.clone(), error)))
        }
        Payload::Json(Value::Array(items)) => join_pairs(
            items
                .iter()
                .enumerate()
                .map(|(index, error)| (index.to_string(), error)),
        ),
        Payload::Json(scalar) => render_scalar(scalar),
    };

    if message.is_empty() {
        format!("HTTP {status}")
    } else {
        message
    }
}

fn join_pairs<'a>(pairs: impl Iterator<Item = (String, &'a Value)>) -> String {
    pairs
        .map(|(name, error)| format!("{name}: {}", render_value(error)))
        .collect::<Vec<_>>()
        .join(", ")
}

fn render_value(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

// Falsy scalars (null, false, 0, "") yield nothing so the status fallback applies.
fn render_scalar(value: &Value) -> String {
    match value {
        Value::Null | Value::Bool(false) => String::new(),
        Value::Number(n) if n.as_f64() == Some(0.0) => String::new(),
        other => render_value(other),
    }
}
