use std::panic::Location;
use std::path::PathBuf;

use error_location::ErrorLocation;
use thiserror::Error;

/// Faults from the record store or the hashing layer.
///
/// Every variant is an internal fault from a caller's point of view; expected
/// outcomes such as "no such user" are returned as values instead.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to access {path}: {source} {location}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Document at {path} is not valid: {source} {location}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Invalid document structure: {message} {location}")]
    InvalidStructure {
        message: String,
        location: ErrorLocation,
    },

    #[error("Failed to serialize document: {source} {location}")]
    Serialization {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Atomic rename failed from {from} to {to}: {source} {location}")]
    AtomicRename {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
        location: ErrorLocation,
    },

    #[error("Password hashing failed: {message} {location}")]
    Hashing {
        message: String,
        location: ErrorLocation,
    },

    #[error("Background task failed: {message} {location}")]
    Task {
        message: String,
        location: ErrorLocation,
    },
}

impl StoreError {
    /// Creates Io error at caller location.
    #[track_caller]
    pub fn io(path: PathBuf, source: std::io::Error) -> Self {
        Self::Io {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Parse error at caller location.
    #[track_caller]
    pub fn parse(path: PathBuf, source: serde_json::Error) -> Self {
        Self::Parse {
            path,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates InvalidStructure error at caller location.
    #[track_caller]
    pub fn invalid_structure(message: impl Into<String>) -> Self {
        Self::InvalidStructure {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates AtomicRename error at caller location.
    #[track_caller]
    pub fn atomic_rename(from: PathBuf, to: PathBuf, source: std::io::Error) -> Self {
        Self::AtomicRename {
            from,
            to,
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Hashing error at caller location.
    #[track_caller]
    pub fn hashing(message: impl Into<String>) -> Self {
        Self::Hashing {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Creates Task error at caller location.
    #[track_caller]
    pub fn task(message: impl Into<String>) -> Self {
        Self::Task {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for StoreError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Serialization {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Outcome of a failed registration
#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("User with email {email} already exists {location}")]
    DuplicateEmail {
        email: String,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl CredentialError {
    /// Creates DuplicateEmail error at caller location.
    #[track_caller]
    pub fn duplicate_email(email: impl Into<String>) -> Self {
        Self::DuplicateEmail {
            email: email.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_duplicate_email(&self) -> bool {
        matches!(self, Self::DuplicateEmail { .. })
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
