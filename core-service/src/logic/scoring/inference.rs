//! Inference Client
//!
//! HTTP client for the hosted text-generation backend. One POST per call,
//! no retries; retry policy belongs to the caller.

use std::future::Future;
use std::time::Duration;

use serde::Serialize;
use serde_json::Value;

use super::error::InferenceError;
use crate::logic::config::ScorerConfig;

/// Generation parameters sent with each prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GenerationParams {
    pub max_new_tokens: u32,
    pub return_full_text: bool,
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            max_new_tokens: crate::constants::MAX_NEW_TOKENS,
            return_full_text: false,
        }
    }
}

#[derive(Debug, Serialize)]
struct GenerationRequest<'a> {
    inputs: &'a str,
    parameters: GenerationParams,
}

/// Shape of a successful backend body
#[derive(Debug, Clone, PartialEq)]
pub enum GenerationOutput {
    /// `[{"generated_text": "..."}]`
    GeneratedText(String),
    /// Any other JSON document
    OpaqueJson(Value),
}

impl GenerationOutput {
    /// Resolve the body shape once; downstream only sees text.
    pub fn from_body(body: Value) -> Self {
        let text = body
            .as_array()
            .and_then(|items| items.first())
            .and_then(|first| first.get("generated_text"))
            .and_then(Value::as_str)
            .map(str::to_string);

        match text {
            Some(text) => Self::GeneratedText(text),
            None => Self::OpaqueJson(body),
        }
    }

    /// Opaque bodies are stringified whole and fed to the extractor as-is.
    /// This happens to work for backends that answer with score/label/reason
    /// keys directly, but nothing guarantees that for arbitrary backends.
    pub fn into_text(self) -> String {
        match self {
            Self::GeneratedText(text) => text,
            Self::OpaqueJson(value) => value.to_string(),
        }
    }
}

/// Text-generation backend seam
pub trait InferenceBackend: Send + Sync {
    /// Generate a continuation for `prompt`, returning raw text.
    fn generate(
        &self,
        prompt: &str,
        params: &GenerationParams,
    ) -> impl Future<Output = Result<String, InferenceError>> + Send;
}

/// Hosted inference API client (bearer-authenticated)
pub struct HfInferenceClient {
    endpoint: String,
    api_token: Option<String>,
    timeout: Duration,
    http_client: reqwest::Client,
}

impl HfInferenceClient {
    /// Create new client for the configured model
    pub fn new(config: &ScorerConfig) -> Result<Self, InferenceError> {
        let http_client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()
            .map_err(|e| InferenceError::Client(e.to_string()))?;

        Ok(Self {
            endpoint: config.endpoint_url(),
            api_token: config.api_token.clone(),
            timeout: config.request_timeout,
            http_client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn post(&self, prompt: &str, params: &GenerationParams) -> Result<GenerationOutput, InferenceError> {
        let request = GenerationRequest {
            inputs: prompt,
            parameters: *params,
        };

        let mut builder = self.http_client.post(&self.endpoint).json(&request);
        if let Some(token) = &self.api_token {
            builder = builder.bearer_auth(token);
        }

        let response = builder.send().await.map_err(|e| self.map_send_error(e))?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            log::error!("Inference backend returned {}: {}", status, body);
            return Err(InferenceError::Status { status, body });
        }

        let body: Value = response.json().await.map_err(|e| {
            if e.is_timeout() {
                InferenceError::Timeout(self.timeout)
            } else {
                InferenceError::Decode { status, message: e.to_string() }
            }
        })?;

        Ok(GenerationOutput::from_body(body))
    }

    fn map_send_error(&self, err: reqwest::Error) -> InferenceError {
        if err.is_timeout() {
            log::warn!("Inference request to {} timed out", self.endpoint);
            InferenceError::Timeout(self.timeout)
        } else {
            log::warn!("Inference request to {} failed: {}", self.endpoint, err);
            InferenceError::from(err)
        }
    }
}

impl InferenceBackend for HfInferenceClient {
    async fn generate(&self, prompt: &str, params: &GenerationParams) -> Result<String, InferenceError> {
        let output = self.post(prompt, params).await?;
        if let GenerationOutput::OpaqueJson(_) = &output {
            log::debug!("Backend body had no generated_text, passing raw JSON through");
        }
        Ok(output.into_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_body_shape() {
        let request = GenerationRequest {
            inputs: "prompt text",
            parameters: GenerationParams::default(),
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({
                "inputs": "prompt text",
                "parameters": {"max_new_tokens": 120, "return_full_text": false}
            })
        );
    }

    #[test]
    fn test_generated_text_shape() {
        let output = GenerationOutput::from_body(json!([{"generated_text": " {\"score\":0.2}"}]));
        assert_eq!(output, GenerationOutput::GeneratedText(" {\"score\":0.2}".to_string()));
    }

    #[test]
    fn test_opaque_shapes() {
        let object = GenerationOutput::from_body(json!({"score": 0.8, "label": "anomaly"}));
        assert!(matches!(object, GenerationOutput::OpaqueJson(_)));
        assert_eq!(object.into_text(), r#"{"score":0.8,"label":"anomaly"}"#);

        let empty = GenerationOutput::from_body(json!([]));
        assert_eq!(empty.into_text(), "[]");

        let missing_field = GenerationOutput::from_body(json!([{"summary_text": "x"}]));
        assert_eq!(missing_field.into_text(), r#"[{"summary_text":"x"}]"#);
    }

    #[test]
    fn test_client_endpoint() {
        let config = ScorerConfig {
            api_base_url: "http://localhost:8000/models".to_string(),
            model: "tiny-llm".to_string(),
            ..ScorerConfig::with_token("t")
        };
        let client = HfInferenceClient::new(&config).unwrap();
        assert_eq!(client.endpoint(), "http://localhost:8000/models/tiny-llm");
    }
}
