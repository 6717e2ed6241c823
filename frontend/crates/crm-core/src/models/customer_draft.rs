use crate::CustomerRecord;
use crate::models::customer_record::null_as_empty;

use serde::{Deserialize, Serialize};

/// Customer fields without an id: the body of a create and the patch of an update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDraft {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub first_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub last_name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub address: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub phone_number: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub email: String,
}

impl CustomerDraft {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        address: impl Into<String>,
        phone_number: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            address: address.into(),
            phone_number: phone_number.into(),
            email: email.into(),
        }
    }
}

impl From<&CustomerRecord> for CustomerDraft {
    fn from(record: &CustomerRecord) -> Self {
        Self {
            first_name: record.first_name.clone(),
            last_name: record.last_name.clone(),
            address: record.address.clone(),
            phone_number: record.phone_number.clone(),
            email: record.email.clone(),
        }
    }
}
