//! Auth REST API handlers

use crate::{ApiError, ApiResult, AppState, AuthResponse, CredentialsRequest, MessageResponse};

use gate_core::CredentialValidator;

use axum::{Json, body::Bytes, extract::State, http::StatusCode};
use log::info;

/// POST /auth/register
pub async fn register(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    let req = decode_credentials(&body)?;

    // 1. Presence, email shape, password length
    let (email, password) = CredentialValidator::validate_registration(
        req.email.as_deref(),
        req.password.as_deref(),
        state.min_password_length,
    )?;

    // 2. Uniqueness check and persist, under the writer lock
    let user = state.credentials.add(email, password).await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse::new(user, "Registration successful.")),
    ))
}

/// POST /auth/login
///
/// Only presence is checked here; shape and length rules apply at
/// registration.
pub async fn login(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<AuthResponse>> {
    let req = decode_credentials(&body)?;

    let (email, password) =
        CredentialValidator::require(req.email.as_deref(), req.password.as_deref())?;

    let user = state
        .credentials
        .validate(email, password)
        .await?
        .ok_or_else(ApiError::unauthorized)?;

    info!("User {} logged in", user.id);
    Ok(Json(AuthResponse::new(user, "Login successful.")))
}

/// Parse the body as JSON whatever the Content-Type header says.
fn decode_credentials(body: &Bytes) -> ApiResult<CredentialsRequest> {
    let Json(req) = Json::<CredentialsRequest>::from_bytes(body)?;
    Ok(req)
}

/// POST /auth/logout
///
/// There is no server-side session, so this only acknowledges.
pub async fn logout() -> Json<MessageResponse> {
    info!("Logout acknowledged");
    Json(MessageResponse::new("Logged out."))
}
