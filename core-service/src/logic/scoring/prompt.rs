//! Prompt Builder
//!
//! Renders a log event into the classification prompt. The field order and
//! labels are fixed; small causal models are sensitive to exact phrasing.

use super::types::LogEvent;

const PROMPT_HEADER: &str = "You are a cybersecurity log anomaly detector.\n\
Return ONLY valid JSON:\n\
{\"score\":0..1,\"label\":\"normal\"|\"anomaly\",\"reason\":\"short\"}\n\
\n\
Score meaning:\n\
0.0 normal, 1.0 highly suspicious.\n\
\n\
Analyze:";

const PROMPT_FOOTER: &str = "JSON:";

/// Build the classification prompt for one event
pub fn build_prompt(event: &LogEvent) -> String {
    format!("{}\n{}\n{}", PROMPT_HEADER, render_fields(event), PROMPT_FOOTER)
}

fn render_fields(event: &LogEvent) -> String {
    let user_id = event
        .user_id
        .as_ref()
        .map(|u| u.to_string())
        .unwrap_or_else(|| "null".to_string());

    let metadata = match &event.metadata {
        Some(map) => serde_json::to_string(map).unwrap_or_else(|_| "{}".to_string()),
        None => "{}".to_string(),
    };

    [
        format!("timestamp: {}", event.timestamp),
        format!("user_id: {}", user_id),
        format!("action: {}", event.action),
        format!("description: {}", event.description),
        format!("metadata: {}", metadata),
    ]
    .join("\n")
}
