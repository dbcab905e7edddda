//! Redaction of provider error bodies before they reach logs or reports.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

const MAX_BODY_CHARS: usize = 512;
const REDACTED: &str = "[REDACTED]";

static BEARER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bBearer\s+[A-Za-z0-9._\-+/=]{8,}").expect("valid bearer regex"));

static SECRET_PAIR_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)\b(api[_-]?key|token|secret|password|authorization)\b\s*[:=]\s*["']?[^"',\s}]+"#)
        .expect("valid secret pair regex")
});

static OPENAI_KEY_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bsk-[A-Za-z0-9_\-]{8,}").expect("valid key regex"));

/// Redact credentials from a provider error body and cap its length.
pub fn sanitize_error_body(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return "<empty response body>".to_string();
    }

    let cleaned = match serde_json::from_str::<Value>(trimmed) {
        Ok(mut json) => {
            redact_value(&mut json);
            // OpenAI-style bodies carry the useful part under error.message
            match json.pointer("/error/message").and_then(Value::as_str) {
                Some(message) => message.to_string(),
                None => json.to_string(),
            }
        }
        Err(_) => redact_text(trimmed),
    };

    truncate(cleaned)
}

fn redact_value(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (key, val) in map.iter_mut() {
                if is_secret_key(key) {
                    *val = Value::String(REDACTED.to_string());
                } else {
                    redact_value(val);
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(redact_value),
        Value::String(s) => *s = redact_text(s),
        _ => {}
    }
}

fn is_secret_key(key: &str) -> bool {
    let key = key.to_ascii_lowercase().replace('-', "_");
    ["api_key", "token", "secret", "password", "authorization"]
        .iter()
        .any(|needle| key.contains(needle))
}

fn redact_text(input: &str) -> String {
    let step = BEARER_RE.replace_all(input, "Bearer [REDACTED]");
    let step = SECRET_PAIR_RE.replace_all(&step, "$1=[REDACTED]");
    OPENAI_KEY_RE.replace_all(&step, REDACTED).into_owned()
}

fn truncate(input: String) -> String {
    let count = input.chars().count();
    if count <= MAX_BODY_CHARS {
        return input;
    }
    let head: String = input.chars().take(MAX_BODY_CHARS).collect();
    format!("{}... [{} more chars]", head, count - MAX_BODY_CHARS)
}
