//! REST API error types
//!
//! Every failure leaves the server as `{success: false, error: {code,
//! message, field?}}` with a matching status code.

use gate_core::CoreError;
use gate_store::{CredentialError, StoreError};

use std::panic::Location;

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use log::{error, info};
use serde::Serialize;
use thiserror::Error;

pub const INVALID_REQUEST_MESSAGE: &str = "Invalid request format.";
pub const INVALID_CREDENTIALS_MESSAGE: &str = "Invalid email or password.";
pub const DUPLICATE_EMAIL_MESSAGE: &str = "User with this email already exists.";
pub const INTERNAL_ERROR_MESSAGE: &str = "An internal server error occurred.";

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub success: bool,
    pub error: ApiErrorBody,
}

/// Inner error body with code, message, and optional field
#[derive(Debug, Serialize)]
pub struct ApiErrorBody {
    /// Machine-readable error code (e.g., "CONFLICT", "VALIDATION_ERROR")
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

/// API errors with associated HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// Missing or malformed credential input (400)
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Body could not be read as JSON (400)
    #[error("Bad request: {message} {location}")]
    BadRequest {
        message: String,
        location: ErrorLocation,
    },

    /// Unknown email or wrong password (401)
    #[error("Unauthorized: {message} {location}")]
    Unauthorized {
        message: String,
        location: ErrorLocation,
    },

    /// Email already registered (409)
    #[error("Conflict: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    /// Internal server error (500). `message` is logged, never returned.
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

impl ApiError {
    #[track_caller]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unauthorized() -> Self {
        Self::Unauthorized {
            message: INVALID_CREDENTIALS_MESSAGE.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn conflict() -> Self {
        Self::Conflict {
            message: DUPLICATE_EMAIL_MESSAGE.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } | ApiError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Expected outcomes are routine; only faults are errors
        match self {
            ApiError::Internal { .. } => error!("{}", self),
            _ => info!("{}", self),
        }

        let status = self.status_code();
        let body = match self {
            ApiError::Validation { message, field, .. } => ApiErrorBody {
                code: "VALIDATION_ERROR".into(),
                message,
                field,
            },
            ApiError::BadRequest { message, .. } => ApiErrorBody {
                code: "BAD_REQUEST".into(),
                message,
                field: None,
            },
            ApiError::Unauthorized { message, .. } => ApiErrorBody {
                code: "UNAUTHORIZED".into(),
                message,
                field: None,
            },
            ApiError::Conflict { message, .. } => ApiErrorBody {
                code: "CONFLICT".into(),
                message,
                field: None,
            },
            ApiError::Internal { .. } => ApiErrorBody {
                code: "INTERNAL_ERROR".into(),
                message: INTERNAL_ERROR_MESSAGE.into(),
                field: None,
            },
        };

        (
            status,
            Json(ApiErrorResponse {
                success: false,
                error: body,
            }),
        )
            .into_response()
    }
}

/// Convert input validation failures to API errors
impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        ApiError::Validation {
            message: e.user_message().to_string(),
            field: e.field().map(String::from),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

/// Convert store faults to API errors
impl From<StoreError> for ApiError {
    #[track_caller]
    fn from(e: StoreError) -> Self {
        ApiError::internal(e.to_string())
    }
}

/// Convert registration failures to API errors
impl From<CredentialError> for ApiError {
    #[track_caller]
    fn from(e: CredentialError) -> Self {
        match e {
            CredentialError::DuplicateEmail { .. } => ApiError::conflict(),
            CredentialError::Store(source) => ApiError::internal(source.to_string()),
        }
    }
}

/// Malformed body, wrong content type, or wrong field types
impl From<JsonRejection> for ApiError {
    #[track_caller]
    fn from(rejection: JsonRejection) -> Self {
        info!("Rejected request body: {}", rejection.body_text());
        ApiError::bad_request(INVALID_REQUEST_MESSAGE)
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
