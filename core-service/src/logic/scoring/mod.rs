//! Scoring Module - LLM-backed Log Anomaly Scorer
//!
//! Pipeline for one audit-log event:
//! - `prompt` - render the event into the classification prompt
//! - `inference` - call the text-generation backend
//! - `extractor` - salvage a JSON object from the generated text
//! - `verdict` - clamp, default and label
//! - `scorer` - orchestration and the no-credential fast path

pub mod types;
pub mod error;
pub mod prompt;
pub mod inference;
pub mod extractor;
pub mod verdict;
pub mod scorer;


// Re-export common types
pub use types::{LogEvent, RawCandidate, UserId, Verdict, VerdictLabel};
pub use error::InferenceError;
pub use prompt::build_prompt;
pub use inference::{GenerationOutput, GenerationParams, HfInferenceClient, InferenceBackend};
pub use extractor::extract_candidate;
pub use verdict::normalize;
pub use scorer::AnomalyScorer;
