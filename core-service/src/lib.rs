//! Procurement Admin - Log Anomaly Scorer
//!
//! Scores audit-log events by prompting a hosted text-generation model and
//! salvaging a structured verdict from whatever text comes back.
//!
//! ```text
//! LogEvent ─► build_prompt ─► InferenceBackend ─► extract_candidate ─► normalize ─► Verdict
//! ```
//!
//! Without `HF_API_TOKEN` the scorer degrades to a fixed safe verdict so the
//! admin tool keeps working without the optional AI dependency.

pub mod constants;
pub mod logic;

pub use logic::config::ScorerConfig;
pub use logic::scoring::{
    AnomalyScorer, GenerationParams, HfInferenceClient, InferenceBackend, InferenceError, LogEvent,
    UserId, Verdict, VerdictLabel,
};
