//! Procurement Admin - Log Analysis API Server
//!
//! Route layer in front of the log anomaly scorer.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    LOG ANALYSIS API                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  ┌───────────┐  ┌──────────────────┐  ┌──────────────────┐ │
//! │  │  API      │  │  Anomaly Scorer  │  │  Inference       │ │
//! │  │  Gateway  │─►│  (sentinel-core) │─►│  Backend (HTTP)  │ │
//! │  │  (Axum)   │  │                  │  │                  │ │
//! │  └───────────┘  └──────────────────┘  └──────────────────┘ │
//! └─────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod handlers;
mod error;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::{
    Router,
    routing::{get, post},
};
use sentinel_core::{AnomalyScorer, HfInferenceClient, InferenceError};
use tower_http::{
    cors::{CorsLayer, Any},
    trace::TraceLayer,
    compression::CompressionLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    // Initialize logging
    init_tracing(config.is_production());

    tracing::info!("Log Analysis Server starting...");
    tracing::info!(
        "Scorer: model={} threshold={} credential={}",
        config.scorer.model,
        config.scorer.threshold,
        if config.scorer.has_credentials() { "set" } else { "missing" }
    );

    // Build application state
    let state = AppState::from_config(config.clone())
        .context("Failed to build anomaly scorer")?;

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "sentinel_admin=debug,sentinel_core=debug,tower_http=debug".into());
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub scorer: Arc<AnomalyScorer<HfInferenceClient>>,
    pub config: config::Config,
}

impl AppState {
    pub fn from_config(config: config::Config) -> Result<Self, InferenceError> {
        let scorer = AnomalyScorer::from_config(config.scorer.clone())?;
        Ok(Self {
            scorer: Arc::new(scorer),
            config,
        })
    }
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::check))
        .route("/api/logs/analyze", post(handlers::logs::analyze))
        .route("/api/logs/scorer", get(handlers::logs::scorer_status))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        )
        .with_state(state)
}
