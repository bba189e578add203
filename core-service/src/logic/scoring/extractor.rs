//! Verdict Extractor
//!
//! Salvages a JSON object from free-form model output. Uses the outermost
//! span, first `{` to last `}`, so prose before and after the object and
//! braces inside string values don't break extraction.

use super::types::RawCandidate;

/// Find and parse the outermost `{...}` span. `None` on any failure.
pub fn extract_candidate(text: &str) -> Option<RawCandidate> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if end < start {
        return None;
    }

    // Both indices sit on one-byte ASCII braces, so the slice is on char boundaries.
    match serde_json::from_str::<RawCandidate>(&text[start..=end]) {
        Ok(candidate) => Some(candidate),
        Err(e) => {
            log::debug!("Discarding unparseable model output span: {}", e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_plain_object() {
        let candidate = extract_candidate(r#"{"score":0.91,"label":"anomaly","reason":"3am export"}"#).unwrap();
        assert_eq!(candidate["score"], json!(0.91));
        assert_eq!(candidate["label"], json!("anomaly"));
    }

    #[test]
    fn test_surrounding_prose() {
        let text = "Sure! Here is my analysis:\n{\"score\": 0.3, \"label\": \"normal\", \"reason\": \"routine\"}\nHope this helps.";
        let candidate = extract_candidate(text).unwrap();
        assert_eq!(candidate["reason"], json!("routine"));
    }

    #[test]
    fn test_recovers_embedded_object_exactly() {
        let original = json!({
            "score": 0.75,
            "label": "anomaly",
            "reason": "bulk delete",
            "extra": {"nested": [1, 2, 3]}
        });
        let prefixes = ["", "Answer: ", "JSON:\n\n", "The model says ->"];
        let suffixes = ["", " done.", "\n\nThanks", " (confidence high)"];

        for prefix in prefixes {
            for suffix in suffixes {
                let text = format!("{}{}{}", prefix, original, suffix);
                let candidate = extract_candidate(&text).unwrap();
                assert_eq!(serde_json::Value::Object(candidate), original, "text: {:?}", text);
            }
        }
    }

    #[test]
    fn test_braces_inside_strings() {
        let text = r#"result {"score":0.6,"reason":"template {user} expanded"} end"#;
        let candidate = extract_candidate(text).unwrap();
        assert_eq!(candidate["reason"], json!("template {user} expanded"));
    }

    #[test]
    fn test_number_beyond_f64_range_keeps_object() {
        let candidate = extract_candidate(r#"{"score":1e400,"label":"anomaly","reason":"mass export"}"#).unwrap();
        assert_eq!(candidate["label"], json!("anomaly"));
        assert_eq!(candidate["reason"], json!("mass export"));
        assert_eq!(candidate["score"].to_string(), "1e400");
    }

    #[test]
    fn test_no_braces() {
        assert_eq!(extract_candidate("Sure, here is the analysis without any JSON."), None);
        assert_eq!(extract_candidate(""), None);
    }

    #[test]
    fn test_only_one_brace_kind() {
        assert_eq!(extract_candidate("score: 0.4 }"), None);
        assert_eq!(extract_candidate("{ score: 0.4"), None);
    }

    #[test]
    fn test_inverted_braces() {
        assert_eq!(extract_candidate("} nothing here {"), None);
    }

    #[test]
    fn test_truncated_output() {
        assert_eq!(extract_candidate(r#"{"score":0.8,"label":"anom"#), None);
        assert_eq!(extract_candidate(r#"{"score":0.8,"label":"anom} more"#), None);
    }

    #[test]
    fn test_two_fragments_use_outer_span() {
        // Outer span covers both objects, which is not valid JSON.
        let text = r#"{"score":0.1} and also {"score":0.9}"#;
        assert_eq!(extract_candidate(text), None);
    }

    #[test]
    fn test_non_ascii_around_object() {
        let text = "Phân tích: {\"score\": 0.2, \"reason\": \"bình thường\"} ✓";
        let candidate = extract_candidate(text).unwrap();
        assert_eq!(candidate["reason"], json!("bình thường"));
    }
}
