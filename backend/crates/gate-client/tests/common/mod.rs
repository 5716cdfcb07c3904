#![allow(dead_code)]

//! Test infrastructure for gate-client tests

use gate_client::{Client, LocalStorage, SESSION_KEY, SessionContext};

use serde_json::{Value, json};
use tempfile::TempDir;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path},
};

/// Nothing listens here, so connections are refused
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:1";

pub fn user_json(id: &str, email: &str) -> Value {
    json!({
        "id": id,
        "email": email,
        "createdAt": "2026-01-02T03:04:05Z",
        "updatedAt": "2026-01-02T03:04:05Z"
    })
}

pub fn success_body(user: Value, message: &str) -> Value {
    json!({ "success": true, "data": user, "message": message })
}

pub fn error_body(code: &str, message: &str) -> Value {
    json!({ "success": false, "error": { "code": code, "message": message } })
}

pub async fn mount_post(server: &MockServer, route: &str, status: u16, body: Value) {
    Mock::given(method("POST"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

pub fn temp_storage() -> (TempDir, LocalStorage) {
    let temp = TempDir::new().unwrap();
    let storage = LocalStorage::new(temp.path().join("session"));
    (temp, storage)
}

/// Session against `base_url`, optionally pre-seeded with a stored value
pub fn create_session(base_url: &str, stored: Option<&str>) -> (TempDir, SessionContext) {
    let (temp, storage) = temp_storage();
    if let Some(stored) = stored {
        storage.set_item(SESSION_KEY, stored).unwrap();
    }
    let session = SessionContext::initialize(Client::new(base_url), storage);
    (temp, session)
}

pub fn stored_session(temp: &TempDir) -> Option<String> {
    LocalStorage::new(temp.path().join("session"))
        .get_item(SESSION_KEY)
        .unwrap()
}
