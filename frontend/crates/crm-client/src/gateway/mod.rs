pub(crate) mod error_message;
#[allow(clippy::module_inception)]
pub(crate) mod gateway;
pub(crate) mod outcome;

pub use error_message::failure_message;
pub use gateway::{Gateway, NO_BODY};
pub use outcome::{NETWORK_ERROR, Payload, RequestFailure, RequestOutcome};
