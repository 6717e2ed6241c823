//! crm-client
//!
//! Session and request layer for the customer API: the credential store,
//! the request gateway that normalizes every response, the session manager,
//! and the customer collection controller.

pub mod app_state;
pub mod credential_store;
pub mod customers;
pub(crate) mod error;
pub mod gateway;
pub mod session;
pub mod storage;

#[cfg(test)]
mod tests;

pub use app_state::{AppState, View};
pub use credential_store::{CredentialStore, PERMISSIONS_KEY, TOKEN_KEY};
pub use customers::{
    CollectionError, Confirm, CustomerCollection, DeleteOutcome, SearchQuery,
};
pub use error::{ClientError, Result as ClientResult};
pub use gateway::{
    Gateway, NETWORK_ERROR, NO_BODY, Payload, RequestFailure, RequestOutcome, failure_message,
};
pub use session::{LoginResult, SessionManager, TokenClaims, decode_claims};
pub use storage::{FileStore, KeyValueStore, MemoryStore, StorageError, StorageOp};
