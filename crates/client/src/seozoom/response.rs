//! Rendering of SEOZoom responses as tool text.
//!
//! Most endpoints wrap their payload in a usage envelope:
//!
//! ```json
//! {"UnitsUsed": 10, "UnitsRemaining": 990, "ResultRows": 3, "response": [...]}
//! ```
//!
//! The envelope is detected by the presence of `UnitsUsed`; anything else is
//! treated as a bare payload.

use serde_json::Value;

const PLACEHOLDER: &str = "?";

/// Render a response as text.
///
/// Enveloped responses get a one-line usage header followed by the pretty
/// JSON of the nested `response` (or of the whole value when there is none).
/// Other values are rendered as pretty JSON only.
pub fn format_envelope(value: &Value) -> String {
    match value.as_object() {
        Some(obj) if obj.contains_key("UnitsUsed") => {
            let header = format!(
                "[Cost: {} units | Remaining: {} | Results: {}]",
                usage_field(value, "UnitsUsed"),
                usage_field(value, "UnitsRemaining"),
                usage_field(value, "ResultRows"),
            );
            let payload = obj.get("response").unwrap_or(value);
            format!("{header}\n\n{}", pretty(payload))
        }
        _ => pretty(value),
    }
}

/// A usage field as display text, or `?` when absent.
pub fn usage_field(value: &Value, key: &str) -> String {
    match value.get(key) {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => PLACEHOLDER.to_string(),
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}
