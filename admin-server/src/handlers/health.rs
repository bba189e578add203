//! Health check handler

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    /// "ready" with a backend credential, "degraded" on the default-verdict path
    scoring: &'static str,
    model: String,
    timestamp: i64,
}

/// Liveness plus scoring mode; never calls the inference backend
pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    let scorer = state.scorer.config();
    let scoring = if scorer.has_credentials() { "ready" } else { "degraded" };

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        scoring,
        model: scorer.model.clone(),
        timestamp: chrono::Utc::now().timestamp(),
    })
}
