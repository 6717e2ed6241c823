use crm_client::{ClientError, CollectionError, RequestFailure};
use crm_config::ConfigError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Client error: {0}")]
    Client(#[from] ClientError),

    #[error("{} (status {})", .0.message, .0.status_code)]
    Request(#[from] RequestFailure),

    #[error("{}", .0.display_message())]
    Collection(#[from] CollectionError),

    #[error("Not logged in; run `crm login` first")]
    NotLoggedIn,

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("Error serializing response: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CliError {
    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CliError>;
