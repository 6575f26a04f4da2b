use crate::ErrorLocation;

use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid device category: {value} {location}")]
    InvalidDeviceCategory {
        value: String,
        location: ErrorLocation,
    },

    #[error("Invalid identity field: {value} {location}")]
    InvalidIdentityField {
        value: String,
        location: ErrorLocation,
    },
}

pub type Result<T> = StdResult<T, CoreError>;
