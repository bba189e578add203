//! Log analysis handlers

use axum::{extract::State, Json};
use serde::Serialize;

use sentinel_core::{LogEvent, Verdict};

use crate::{AppState, AppResult, AppError};

#[derive(Debug, Serialize)]
pub struct ScorerStatus {
    pub model: String,
    pub threshold: f64,
    pub credential_configured: bool,
}

/// Score one audit-log event
pub async fn analyze(
    State(state): State<AppState>,
    Json(event): Json<LogEvent>,
) -> AppResult<Json<Verdict>> {
    if event.action.trim().is_empty() {
        return Err(AppError::ValidationError("action is required".to_string()));
    }

    let verdict = state
        .scorer
        .score_with_timeout(&event, state.config.analyze_timeout)
        .await?;

    tracing::info!(
        action = %event.action,
        score = verdict.score,
        label = %verdict.label,
        "Log event analyzed"
    );

    Ok(Json(verdict))
}

/// Current scorer settings, without the credential
pub async fn scorer_status(State(state): State<AppState>) -> Json<ScorerStatus> {
    let config = state.scorer.config();
    Json(ScorerStatus {
        model: config.model.clone(),
        threshold: config.threshold,
        credential_configured: config.has_credentials(),
    })
}
