use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use thiserror::Error;

/// Message used when a transport failure has no description
pub const NETWORK_ERROR: &str = "Network error";

/// The one result shape of every gateway call.
pub type RequestOutcome = Result<Payload, RequestFailure>;

/// A successful response body.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// 204 No Content
    Empty,
    /// Body decoded as JSON
    Json(Value),
    /// Body that isn't JSON, kept verbatim
    Text(String),
}

impl Payload {
    /// JSON first, raw text as the fallback. Never fails.
    pub fn parse(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(value) => Payload::Json(value),
            Err(_) => Payload::Text(String::from_utf8_lossy(body).into_owned()),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Payload::Empty)
    }

    pub fn as_json(&self) -> Option<&Value> {
        match self {
            Payload::Json(value) => Some(value),
            _ => None,
        }
    }

    /// Field of a JSON object body
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.as_json().and_then(|value| value.get(field))
    }

    /// The body as a JSON object, if it is one
    pub fn into_object(self) -> Option<Map<String, Value>> {
        match self {
            Payload::Json(Value::Object(map)) => Some(map),
            _ => None,
        }
    }

    /// `Empty` becomes `null`, text becomes a JSON string.
    pub fn into_json(self) -> Value {
        match self {
            Payload::Empty => Value::Null,
            Payload::Json(value) => value,
            Payload::Text(text) => Value::String(text),
        }
    }
}

impl Serialize for Payload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Payload::Empty => serializer.serialize_none(),
            Payload::Json(value) => value.serialize(serializer),
            Payload::Text(text) => serializer.serialize_str(text),
        }
    }
}

/// A normalized failure. `status_code` 0 means the request never got a
/// response from a server.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(rename_all = "camelCase")]
#[error("{message}")]
pub struct RequestFailure {
    pub status_code: u16,
    pub message: String,
}

impl RequestFailure {
    pub fn new(status_code: u16, message: impl Into<String>) -> Self {
        Self {
            status_code,
            message: message.into(),
        }
    }

    /// Failure below HTTP: DNS, refused connection, timeout, broken body.
    pub fn transport(description: impl ToString) -> Self {
        let description = description.to_string();
        let message = if description.trim().is_empty() {
            String::from(NETWORK_ERROR)
        } else {
            description
        };
        Self::new(0, message)
    }

    pub fn is_transport(&self) -> bool {
        self.status_code == 0
    }
}
