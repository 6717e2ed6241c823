use crm_core::{CustomerRecord, Session};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Outcome of a successful login.
///
/// Serializes as the server's login payload with `permissions` and
/// `customers` merged in (the merged fields win over same-named payload
/// fields). The token and derived session are available as fields but are
/// not part of the serialized form beyond what the payload already holds.
#[derive(Debug, Clone)]
pub struct LoginResult {
    pub payload: Map<String, Value>,
    pub token: String,
    pub permissions: Vec<String>,
    pub customers: Vec<CustomerRecord>,
    pub session: Session,
}

impl LoginResult {
    pub fn merged(&self) -> Map<String, Value> {
        let mut merged = self.payload.clone();
        merged.insert(
            String::from("permissions"),
            Value::Array(
                self.permissions
                    .iter()
                    .cloned()
                    .map(Value::String)
                    .collect(),
            ),
        );
        merged.insert(
            String::from("customers"),
            Value::Array(
                self.customers
                    .iter()
                    .filter_map(|c| serde_json::to_value(c).ok())
                    .collect(),
            ),
        );
        merged
    }
}

impl Serialize for LoginResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.merged().serialize(serializer)
    }
}
