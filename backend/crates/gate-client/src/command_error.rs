use crate::AuthFailure;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Failures reported by the `gate` commands
#[derive(Error, Debug)]
pub enum CommandError {
    #[error("{0}")]
    Auth(#[from] AuthFailure),

    #[error("Not logged in")]
    NotLoggedIn { location: ErrorLocation },

    #[error("Config error: {0}")]
    Config(#[from] gate_config::ConfigError),

    #[error("Failed to serialize output: {source} {location}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl CommandError {
    #[track_caller]
    pub fn not_logged_in() -> Self {
        Self::NotLoggedIn {
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for CommandError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, CommandError>;
