//! Configuration module

use std::env;
use std::time::Duration;

use sentinel_core::ScorerConfig;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Environment (development, production)
    pub environment: String,

    /// Upper bound for one analyze request, including the backend call
    pub analyze_timeout: Duration,

    /// Anomaly scorer settings (HF_API_TOKEN, HF_MODEL, AI_THRESHOLD, ...)
    pub scorer: ScorerConfig,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),

            environment: env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),

            analyze_timeout: Duration::from_secs(
                env::var("ANALYZE_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(45),
            ),

            scorer: ScorerConfig::from_env(),
        }
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}
