//! Scorer Configuration
//!
//! Read once at startup, immutable afterwards. Passed into the scorer
//! explicitly so tests can inject fake credentials and thresholds.

use std::time::Duration;

use crate::constants;

/// Scorer configuration
#[derive(Clone)]
pub struct ScorerConfig {
    /// Bearer credential for the inference backend
    pub api_token: Option<String>,

    /// Backend model identifier
    pub model: String,

    /// Anomaly threshold (expected 0.0 - 1.0, not enforced)
    pub threshold: f64,

    /// Inference API base URL, model is appended
    pub api_base_url: String,

    /// Per-request timeout for the HTTP client
    pub request_timeout: Duration,

    /// Cap on generated tokens
    pub max_new_tokens: u32,
}

impl Default for ScorerConfig {
    fn default() -> Self {
        Self {
            api_token: None,
            model: constants::DEFAULT_MODEL.to_string(),
            threshold: constants::DEFAULT_THRESHOLD,
            api_base_url: constants::DEFAULT_API_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(constants::DEFAULT_TIMEOUT_SECS),
            max_new_tokens: constants::MAX_NEW_TOKENS,
        }
    }
}

impl ScorerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            api_token: constants::get_api_token(),
            model: constants::get_model(),
            threshold: constants::get_threshold(),
            api_base_url: constants::get_api_base_url(),
            request_timeout: Duration::from_secs(constants::get_timeout_secs()),
            max_new_tokens: constants::MAX_NEW_TOKENS,
        }
    }

    /// Config with a credential set, everything else default
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            api_token: Some(token.into()),
            ..Default::default()
        }
    }

    pub fn has_credentials(&self) -> bool {
        self.api_token.is_some()
    }

    /// Full endpoint URL for the configured model
    pub fn endpoint_url(&self) -> String {
        format!("{}/{}", self.api_base_url.trim_end_matches('/'), self.model)
    }
}

// Keeps the token out of logs.
impl std::fmt::Debug for ScorerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScorerConfig")
            .field("api_token", &self.api_token.as_ref().map(|_| "***"))
            .field("model", &self.model)
            .field("threshold", &self.threshold)
            .field("api_base_url", &self.api_base_url)
            .field("request_timeout", &self.request_timeout)
            .field("max_new_tokens", &self.max_new_tokens)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScorerConfig::default();
        assert!(!config.has_credentials());
        assert_eq!(config.model, "distilgpt2");
        assert_eq!(config.threshold, 0.7);
        assert_eq!(config.max_new_tokens, 120);
    }

    #[test]
    fn test_endpoint_url() {
        let config = ScorerConfig {
            api_base_url: "http://127.0.0.1:9000/models/".to_string(),
            model: "gpt2".to_string(),
            ..Default::default()
        };
        assert_eq!(config.endpoint_url(), "http://127.0.0.1:9000/models/gpt2");
    }

    #[test]
    fn test_debug_hides_token() {
        let config = ScorerConfig::with_token("hf_secret");
        let printed = format!("{:?}", config);
        assert!(!printed.contains("hf_secret"));
        assert!(printed.contains("***"));
    }
}
