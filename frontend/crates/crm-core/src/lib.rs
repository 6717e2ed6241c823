pub mod filter;
pub mod models;

pub use filter::{filter_records, matches_filter};
pub use models::credential::Credential;
pub use models::customer_draft::CustomerDraft;
pub use models::customer_record::CustomerRecord;
pub use models::role::Role;
pub use models::session::{DEFAULT_ROLE, Session, UNKNOWN_USER};

#[cfg(test)]
mod tests;
