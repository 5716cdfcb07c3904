use crate::AppState;

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::warn;
use serde_json::json;

/// GET /health - component status; storage is probed by loading the document
pub async fn health(State(state): State<AppState>) -> Response {
    let (status, storage) = match state.credentials.store().load().await {
        Ok(_) => ("healthy", "operational"),
        Err(e) => {
            warn!("Health check: storage unavailable: {}", e);
            ("degraded", "degraded")
        }
    };

    let health = json!({
        "status": status,
        "version": env!("CARGO_PKG_VERSION"),
        "components": {
            "storage": storage,
        },
        "timestamp": chrono::Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(health)).into_response()
}

/// GET /live - liveness probe
pub async fn liveness() -> Response {
    (StatusCode::OK, "OK").into_response()
}
