#![allow(dead_code)]

//! Test infrastructure for gate-server API tests

use gate_server::{AppState, build_router};
use gate_store::{CredentialHasher, CredentialService, HashingParams, RecordStore};

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::Value;
use tempfile::TempDir;
use tower::ServiceExt;

pub const TEST_MIN_PASSWORD_LENGTH: usize = 6;

/// AppState over a scratch user document with cheap hashing parameters
pub fn create_test_app_state() -> (TempDir, AppState) {
    let temp = TempDir::new().unwrap();
    let store = RecordStore::new(temp.path().join("users.json"));
    let hasher = CredentialHasher::new(HashingParams {
        memory_kib: 1024,
        iterations: 1,
        parallelism: 1,
    })
    .unwrap();

    let credentials = Arc::new(CredentialService::new(store, hasher));
    (temp, AppState::new(credentials, TEST_MIN_PASSWORD_LENGTH))
}

pub fn create_test_router() -> (TempDir, AppState, Router) {
    let (temp, state) = create_test_app_state();
    let app = build_router(state.clone());
    (temp, state, app)
}

/// POST a raw body with a JSON content type
pub async fn post_raw(app: &Router, uri: &str, body: impl Into<String>) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.into()))
        .unwrap();

    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    post_raw(app, uri, body.to_string()).await
}

pub async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).unwrap_or(Value::Null)
    };
    (status, json)
}
