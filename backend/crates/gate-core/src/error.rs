use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<&'static str>,
        location: ErrorLocation,
    },

    #[error("Missing credentials: {message} {location}")]
    MissingCredentials {
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Create a validation error for a specific field
    #[track_caller]
    pub fn validation<S: Into<String>>(field: &'static str, message: S) -> Self {
        CoreError::Validation {
            message: message.into(),
            field: Some(field),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Create a missing-credentials error
    #[track_caller]
    pub fn missing_credentials<S: Into<String>>(message: S) -> Self {
        CoreError::MissingCredentials {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message suitable for returning to the caller (no location suffix)
    pub fn user_message(&self) -> &str {
        match self {
            CoreError::Validation { message, .. } => message,
            CoreError::MissingCredentials { message, .. } => message,
        }
    }

    /// Offending field, if the error is tied to one
    pub fn field(&self) -> Option<&'static str> {
        match self {
            CoreError::Validation { field, .. } => *field,
            CoreError::MissingCredentials { .. } => None,
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
