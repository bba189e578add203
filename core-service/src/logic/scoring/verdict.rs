//! Score Normalizer & Labeler
//!
//! Turns whatever the extractor salvaged into a well-formed Verdict.
//! Never fails: garbled model output is routine, not exceptional.

use serde_json::Value;

use super::types::{RawCandidate, Verdict, VerdictLabel};
use crate::constants::{DEFAULT_REASON, DEFAULT_SCORE, MAX_REASON_CHARS};

/// Normalize a candidate (possibly empty) into a Verdict
pub fn normalize(candidate: &RawCandidate, threshold: f64, model: &str) -> Verdict {
    let score = normalize_score(candidate.get("score"));
    let label = apply_label(score, threshold, candidate.get("label"));
    let reason = normalize_reason(candidate.get("reason"));

    Verdict {
        score,
        label,
        reason,
        model: model.to_string(),
    }
}

/// Coerce to a number (numeric strings allowed), default 0.5, clamp to [0, 1].
fn normalize_score(raw: Option<&Value>) -> f64 {
    let score = match raw {
        // Text form, so literals past f64 range (1e400) become +/-inf instead of None.
        Some(Value::Number(n)) => n.to_string().parse::<f64>().ok(),
        Some(Value::String(s)) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|s| !s.is_nan())
    .unwrap_or(DEFAULT_SCORE);

    // `+ 0.0` turns -0.0 into 0.0
    score.clamp(0.0, 1.0) + 0.0
}

/// Threshold OR explicit "anomaly" label. An explicit "normal" never
/// overrides a score at or above the threshold.
fn apply_label(score: f64, threshold: f64, raw_label: Option<&Value>) -> VerdictLabel {
    let explicit_anomaly = raw_label.and_then(Value::as_str) == Some("anomaly");

    if score >= threshold || explicit_anomaly {
        VerdictLabel::Anomaly
    } else {
        VerdictLabel::Normal
    }
}

fn normalize_reason(raw: Option<&Value>) -> String {
    let reason = match raw {
        None | Some(Value::Null) => DEFAULT_REASON.to_string(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    };

    truncate_chars(reason, MAX_REASON_CHARS)
}

fn truncate_chars(s: String, max: usize) -> String {
    match s.char_indices().nth(max) {
        Some((idx, _)) => s[..idx].to_string(),
        None => s,
    }
}
