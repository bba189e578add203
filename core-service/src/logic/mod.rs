//! Logic Module - Scoring Engine & Configuration
//!
//! - `config` - immutable scorer configuration
//! - `scoring/` - LLM-backed log anomaly scoring pipeline

pub mod config;
pub mod scoring;
