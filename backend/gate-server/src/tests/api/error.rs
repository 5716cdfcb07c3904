use crate::ApiError;
use crate::api::error::INTERNAL_ERROR_MESSAGE;

use gate_core::CoreError;
use gate_store::{CredentialError, StoreError};

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "Please enter a valid email address.".into(),
        field: Some("email".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["success"], false);
    assert_eq!(json["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"]["field"], "email");
}

#[tokio::test]
async fn test_bad_request_omits_field() {
    let (status, json) = body_json(ApiError::bad_request("Invalid request format.")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"]["code"], "BAD_REQUEST");
    assert!(json["error"].get("field").is_none());
}

#[tokio::test]
async fn test_unauthorized_returns_401() {
    let (status, json) = body_json(ApiError::unauthorized()).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["error"]["code"], "UNAUTHORIZED");
    assert_eq!(json["error"]["message"], "Invalid email or password.");
}

#[tokio::test]
async fn test_conflict_returns_409() {
    let (status, json) = body_json(ApiError::conflict()).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["error"]["code"], "CONFLICT");
    assert_eq!(json["error"]["message"], "User with this email already exists.");
}

#[tokio::test]
async fn test_internal_error_hides_details() {
    let error = ApiError::internal("Failed to access /srv/gate/users.json: permission denied");

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"]["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"]["message"], INTERNAL_ERROR_MESSAGE);
    assert!(!json.to_string().contains("/srv/gate"));
}

#[test]
fn test_core_validation_error_keeps_field_and_message() {
    let api_error: ApiError = CoreError::validation("password", "too short").into();

    match api_error {
        ApiError::Validation { message, field, .. } => {
            assert_eq!(message, "too short");
            assert_eq!(field.as_deref(), Some("password"));
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[test]
fn test_missing_credentials_maps_to_validation_without_field() {
    let api_error: ApiError =
        CoreError::missing_credentials("Email and password are required.").into();

    match api_error {
        ApiError::Validation { message, field, .. } => {
            assert_eq!(message, "Email and password are required.");
            assert!(field.is_none());
        }
        other => panic!("expected Validation, got {other:?}"),
    }
}

#[test]
fn test_duplicate_email_maps_to_conflict() {
    let api_error: ApiError = CredentialError::duplicate_email("a@b.com").into();

    assert_eq!(api_error.status_code(), StatusCode::CONFLICT);
}

#[test]
fn test_store_fault_maps_to_internal() {
    let store_error = StoreError::invalid_structure("\"users\" must be an array");

    let from_store: ApiError = store_error.into();
    let from_credentials: ApiError =
        CredentialError::from(StoreError::task("join error")).into();

    assert_eq!(from_store.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        from_credentials.status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}
