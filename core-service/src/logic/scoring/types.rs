//! Scoring Types

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Untyped object salvaged from model output
pub type RawCandidate = Map<String, Value>;

/// User identifier as stored by the admin tool. Any JSON value is kept
/// and rendered into the prompt as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub Value);

impl UserId {
    pub fn number(id: i64) -> Self {
        Self(Value::from(id))
    }

    pub fn text(id: impl Into<String>) -> Self {
        Self(Value::String(id.into()))
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.0 {
            Value::String(s) => f.write_str(s),
            other => write!(f, "{}", other),
        }
    }
}

/// Audit-log event submitted for scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEvent {
    /// ISO-8601 timestamp, passed through verbatim
    pub timestamp: String,
    #[serde(default)]
    pub user_id: Option<UserId>,
    pub action: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub metadata: Option<Map<String, Value>>,
}

impl LogEvent {
    pub fn new(timestamp: impl Into<String>, action: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            timestamp: timestamp.into(),
            user_id: None,
            action: action.into(),
            description: description.into(),
            metadata: None,
        }
    }

    pub fn with_user(mut self, user_id: UserId) -> Self {
        self.user_id = Some(user_id);
        self
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: Value) -> Self {
        self.metadata
            .get_or_insert_with(Map::new)
            .insert(key.into(), value);
        self
    }
}

/// Final binary label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerdictLabel {
    Normal,
    Anomaly,
}

impl VerdictLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Anomaly => "anomaly",
        }
    }
}

impl std::fmt::Display for VerdictLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scoring output, the stable contract rendered by the Logs page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub score: f64,              // 0.0 - 1.0
    pub label: VerdictLabel,
    pub reason: String,          // <= 200 chars
    pub model: String,
}

impl Verdict {
    pub fn is_anomaly(&self) -> bool {
        self.label == VerdictLabel::Anomaly
    }
}
