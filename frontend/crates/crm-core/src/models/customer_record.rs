//! Customer record as returned by the customer API.

use crate::CustomerDraft;

use serde::{Deserialize, Deserializer, Serialize};

/// A customer owned by the server.
///
/// `id` is assigned by the server on create and never changes. The client
/// only ever holds a replaceable cached copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRecord {
    pub id: i64,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub last_name: String,
    /// Optional on the server; `null` becomes an empty string
    #[serde(default, deserialize_with = "null_as_empty")]
    pub address: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub phone_number: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
}

impl CustomerRecord {
    /// Attach an id to a draft, e.g. to build the body of an update.
    pub fn from_draft(id: i64, draft: &CustomerDraft) -> Self {
        Self {
            id,
            first_name: draft.first_name.clone(),
            last_name: draft.last_name.clone(),
            address: draft.address.clone(),
            phone_number: draft.phone_number.clone(),
            email: draft.email.clone(),
        }
    }

    /// All field values in wire order, id first.
    pub fn field_values(&self) -> [String; 6] {
        [
            self.id.to_string(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.address.clone(),
            self.phone_number.clone(),
            self.email.clone(),
        ]
    }

    /// Display name: "First Last"
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

pub(crate) fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}
