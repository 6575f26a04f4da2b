use lb_client::ClientError;
use lb_config::ConfigError;
use lb_db::DbError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WidgetError {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Credential store error: {source} {location}")]
    Store {
        source: DbError,
        location: ErrorLocation,
    },

    #[error("Remote endpoint error: {source} {location}")]
    Remote {
        source: ClientError,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },
}

impl WidgetError {
    #[track_caller]
    pub fn logger<S: Into<String>>(message: S) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for WidgetError {
    #[track_caller]
    fn from(source: DbError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ClientError> for WidgetError {
    #[track_caller]
    fn from(source: ClientError) -> Self {
        Self::Remote {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, WidgetError>;
