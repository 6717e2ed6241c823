use crate::RequestFailure;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors from the customer collection
#[derive(Error, Debug)]
pub enum CollectionError {
    #[error("{source}")]
    Request {
        #[source]
        source: RequestFailure,
        location: ErrorLocation,
    },

    #[error("Customer {id} is not being edited {location}")]
    NoEditTarget { id: i64, location: ErrorLocation },

    #[error("Unexpected response: {message} {location}")]
    UnexpectedPayload {
        message: String,
        location: ErrorLocation,
    },
}

impl CollectionError {
    #[track_caller]
    pub fn request(source: RequestFailure) -> Self {
        Self::Request {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn no_edit_target(id: i64) -> Self {
        Self::NoEditTarget {
            id,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unexpected_payload(message: impl Into<String>) -> Self {
        Self::UnexpectedPayload {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message fit to show a user, without source locations.
    pub fn display_message(&self) -> String {
        match self {
            Self::Request { source, .. } => source.message.clone(),
            Self::NoEditTarget { id, .. } => format!("Customer {id} is not being edited"),
            Self::UnexpectedPayload { message, .. } => format!("Unexpected response: {message}"),
        }
    }

    /// The gateway failure, when this came from the server or transport
    pub fn failure(&self) -> Option<&RequestFailure> {
        match self {
            Self::Request { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<RequestFailure> for CollectionError {
    #[track_caller]
    fn from(source: RequestFailure) -> Self {
        Self::request(source)
    }
}

pub type Result<T> = std::result::Result<T, CollectionError>;
