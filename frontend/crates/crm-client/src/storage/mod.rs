//! Persistent key-value backends for the credential store.
//!
//! The contract mirrors a browser's key-value storage: string keys, string
//! values, absent keys read as `None`, removing an absent key is a no-op.

pub(crate) mod error;
pub(crate) mod file_store;
pub(crate) mod memory_store;

pub use error::{Result as StorageResult, StorageError, StorageOp};
pub use file_store::FileStore;
pub use memory_store::MemoryStore;

/// String-keyed persistent storage shared across tasks.
pub trait KeyValueStore: Send + Sync {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>>;

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()>;

    fn remove_item(&self, key: &str) -> StorageResult<()>;
}
