//! Anomaly Scorer
//!
//! Orchestrates prompt → inference → extraction → normalization.
//!
//! ```text
//! NoCredentials ──────────────────────────────► default Verdict
//! Requesting ──► Parsing ──► Done               (Verdict)
//! Requesting ──► Failed                         (InferenceError, propagated)
//! ```

use std::time::Duration;

use super::error::InferenceError;
use super::extractor::extract_candidate;
use super::inference::{GenerationParams, HfInferenceClient, InferenceBackend};
use super::prompt::build_prompt;
use super::types::{LogEvent, Verdict, VerdictLabel};
use super::verdict::normalize;
use crate::constants::MISSING_TOKEN_REASON;
use crate::logic::config::ScorerConfig;

/// Stateless scorer; safe to share across tasks.
pub struct AnomalyScorer<B> {
    config: ScorerConfig,
    backend: B,
}

impl AnomalyScorer<HfInferenceClient> {
    /// Scorer backed by the hosted inference API
    pub fn from_config(config: ScorerConfig) -> Result<Self, InferenceError> {
        let backend = HfInferenceClient::new(&config)?;

        if config.has_credentials() {
            log::info!("Anomaly scorer ready: model={} threshold={}", config.model, config.threshold);
        } else {
            log::warn!("{} not set, anomaly scoring runs in degraded mode", crate::constants::ENV_API_TOKEN);
        }

        Ok(Self::with_backend(config, backend))
    }
}

impl<B: InferenceBackend> AnomalyScorer<B> {
    pub fn with_backend(config: ScorerConfig, backend: B) -> Self {
        Self { config, backend }
    }

    pub fn config(&self) -> &ScorerConfig {
        &self.config
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Score one event.
    ///
    /// Without a credential this returns the safe default without touching
    /// the network. Backend failures propagate unchanged and are not retried.
    pub async fn score(&self, event: &LogEvent) -> Result<Verdict, InferenceError> {
        if !self.config.has_credentials() {
            return Ok(self.missing_credentials_verdict());
        }

        let prompt = build_prompt(event);
        let params = GenerationParams {
            max_new_tokens: self.config.max_new_tokens,
            return_full_text: false,
        };

        let generated = self.backend.generate(&prompt, &params).await?;

        let candidate = extract_candidate(&generated).unwrap_or_else(|| {
            log::debug!("No usable verdict in model output for action {}", event.action);
            Default::default()
        });
        let verdict = normalize(&candidate, self.config.threshold, &self.config.model);

        log::debug!(
            "Scored action={} score={:.3} label={}",
            event.action,
            verdict.score,
            verdict.label
        );

        Ok(verdict)
    }

    /// Score with a caller deadline. Expiry is an error, never a default verdict.
    pub async fn score_with_timeout(&self, event: &LogEvent, timeout: Duration) -> Result<Verdict, InferenceError> {
        match tokio::time::timeout(timeout, self.score(event)).await {
            Ok(result) => result,
            Err(_) => {
                log::warn!("Scoring action {} exceeded {:?}", event.action, timeout);
                Err(InferenceError::Timeout(timeout))
            }
        }
    }

    /// Safe default used when no credential is configured
    pub fn missing_credentials_verdict(&self) -> Verdict {
        Verdict {
            score: 0.0,
            label: VerdictLabel::Normal,
            reason: MISSING_TOKEN_REASON.to_string(),
            model: self.config.model.clone(),
        }
    }
}
