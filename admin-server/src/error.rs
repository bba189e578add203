//! Error handling

use axum::{
    response::{IntoResponse, Response},
    http::StatusCode,
    Json,
};
use sentinel_core::InferenceError;
use serde_json::json;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    // Validation errors
    #[error("Validation error: {0}")]
    ValidationError(String),

    // Scoring backend errors
    #[error(transparent)]
    Inference(#[from] InferenceError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message, upstream_status) = match &self {
            AppError::ValidationError(msg) => (StatusCode::BAD_REQUEST, msg.clone(), None),
            AppError::Inference(err) => {
                tracing::error!("Anomaly scoring failed: {}", err);
                match err {
                    InferenceError::Timeout(_) => (
                        StatusCode::GATEWAY_TIMEOUT,
                        "Anomaly scoring timed out".to_string(),
                        None,
                    ),
                    InferenceError::Client(_) => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Internal server error".to_string(),
                        None,
                    ),
                    InferenceError::Status { .. }
                    | InferenceError::Transport(_)
                    | InferenceError::Decode { .. } => (
                        StatusCode::BAD_GATEWAY,
                        "Anomaly scoring backend error".to_string(),
                        err.status(),
                    ),
                }
            }
        };

        let mut body = json!({
            "error": error_message,
            "status": status.as_u16()
        });
        if let Some(upstream) = upstream_status {
            body["upstream_status"] = json!(upstream);
        }

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_backend_status_maps_to_bad_gateway() {
        let err = AppError::from(InferenceError::Status { status: 500, body: "boom".to_string() });
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_timeout_maps_to_gateway_timeout() {
        let err = AppError::from(InferenceError::Timeout(Duration::from_secs(1)));
        assert_eq!(err.into_response().status(), StatusCode::GATEWAY_TIMEOUT);
    }

    #[test]
    fn test_validation_maps_to_bad_request() {
        let err = AppError::ValidationError("action is required".to_string());
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }
}
