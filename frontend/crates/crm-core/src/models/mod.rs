pub mod credential;
pub mod customer_draft;
pub mod customer_record;
pub mod role;
pub mod session;
