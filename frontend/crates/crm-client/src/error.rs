use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

/// Errors building the client. Request failures are not errors of this
/// type; they come back as [`crate::RequestFailure`] values.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP client error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Invalid base URL {url}: {message} {location}")]
    InvalidBaseUrl {
        url: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Configuration error: {source} {location}")]
    Config {
        location: ErrorLocation,
        #[source]
        source: crm_config::ConfigError,
    },
}

impl ClientError {
    /// Convert reqwest error with context
    #[track_caller]
    pub fn from_reqwest(err: reqwest::Error) -> Self {
        ClientError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }

    #[track_caller]
    pub fn invalid_base_url(url: impl Into<String>, message: impl Into<String>) -> Self {
        ClientError::InvalidBaseUrl {
            url: url.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::from_reqwest(err)
    }
}

impl From<crm_config::ConfigError> for ClientError {
    #[track_caller]
    fn from(source: crm_config::ConfigError) -> Self {
        ClientError::Config {
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
