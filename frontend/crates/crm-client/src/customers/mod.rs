pub(crate) mod collection_error;
pub(crate) mod confirm;
pub(crate) mod customer_collection;
pub(crate) mod payload_shape;
pub(crate) mod search_query;

pub use collection_error::{CollectionError, Result as CollectionResult};
pub use confirm::{Confirm, DELETE_PROMPT};
pub use customer_collection::{CustomerCollection, DeleteOutcome};
pub use payload_shape::{records_from_payload, search_results_from_payload};
pub use search_query::{SEARCH_PATH, SearchQuery};

pub const CUSTOMERS_PATH: &str = "/api/customers";

/// Path of one customer
pub fn customer_path(id: i64) -> String {
    format!("{CUSTOMERS_PATH}/{id}")
}
