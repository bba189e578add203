//! Central Configuration Constants
//!
//! Single source of truth for all scorer defaults.
//! To change the default model or backend, only edit this file.

/// Default inference API base URL
///
/// The model identifier is appended as the last path segment.
pub const DEFAULT_API_BASE_URL: &str = "https://api-inference.huggingface.co/models";

/// Default text-generation model
pub const DEFAULT_MODEL: &str = "distilgpt2";

/// Default anomaly threshold
pub const DEFAULT_THRESHOLD: f64 = 0.7;

/// Default request timeout (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Cap on generated tokens per request
pub const MAX_NEW_TOKENS: u32 = 120;

/// Score used when the model gives no usable number
pub const DEFAULT_SCORE: f64 = 0.5;

/// Reason used when the model gives none
pub const DEFAULT_REASON: &str = "No reason";

/// Reason reported on the no-credential fast path
pub const MISSING_TOKEN_REASON: &str = "HF_API_TOKEN missing";

/// Maximum reason length, in characters
pub const MAX_REASON_CHARS: usize = 200;

// ============================================
// Environment variable names
// ============================================

pub const ENV_API_TOKEN: &str = "HF_API_TOKEN";
pub const ENV_MODEL: &str = "HF_MODEL";
pub const ENV_THRESHOLD: &str = "AI_THRESHOLD";
pub const ENV_API_BASE_URL: &str = "HF_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "HF_TIMEOUT_SECS";

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get API token from environment. Empty values count as missing.
pub fn get_api_token() -> Option<String> {
    std::env::var(ENV_API_TOKEN)
        .ok()
        .filter(|t| !t.trim().is_empty())
}

/// Get model identifier from environment or use default
pub fn get_model() -> String {
    std::env::var(ENV_MODEL)
        .ok()
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_MODEL.to_string())
}

/// Get anomaly threshold from environment or use default
pub fn get_threshold() -> f64 {
    match std::env::var(ENV_THRESHOLD) {
        Ok(raw) => parse_threshold(&raw).unwrap_or_else(|| {
            log::warn!("Invalid {} value {:?}, using {}", ENV_THRESHOLD, raw, DEFAULT_THRESHOLD);
            DEFAULT_THRESHOLD
        }),
        Err(_) => DEFAULT_THRESHOLD,
    }
}

/// Get inference API base URL from environment or use default
pub fn get_api_base_url() -> String {
    std::env::var(ENV_API_BASE_URL)
        .map(|u| u.trim_end_matches('/').to_string())
        .unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string())
}

/// Get request timeout from environment or use default
pub fn get_timeout_secs() -> u64 {
    std::env::var(ENV_TIMEOUT_SECS)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(DEFAULT_TIMEOUT_SECS)
}

/// Range is not enforced here; only NaN is rejected.
fn parse_threshold(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|t| !t.is_nan())
}
