//! Provider error sanitization and translation into [`AdapterError`].

use crate::llm::classifier::AdapterError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

const MAX_ERROR_TEXT_CHARS: usize = 1_024;
const REDACTED: &str = "[REDACTED]";

static BEARER_TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bBearer\s+[A-Za-z0-9._\-+/=]{8,}").expect("valid bearer token regex")
});

static KEY_VALUE_SECRET_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?i)\b(api[_-]?key|key|access[_-]?token|token|secret|password|authorization|x-goog-api-key)\b\s*[:=]\s*["']?[^"',&\s}]+"#,
    )
    .expect("valid key/value secret regex")
});

/// Groq keys are `gsk_` prefixed; Google keys start with `AIza`.
static VENDOR_KEY_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(gsk_[A-Za-z0-9]{8,}|AIza[A-Za-z0-9_\-]{20,})").expect("valid vendor key regex")
});

/// Sanitize provider error text by redacting secrets and truncating large payloads.
pub fn sanitize_provider_error_text(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return "<empty error response body>".to_string();
    }

    if let Ok(mut json) = serde_json::from_str::<Value>(trimmed) {
        redact_json_value(&mut json);
        let serialized =
            serde_json::to_string(&json).unwrap_or_else(|_| "<unserializable error>".to_string());
        return truncate_with_suffix(serialized);
    }

    truncate_with_suffix(redact_inline_secrets(trimmed))
}

fn redact_json_value(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for (key, val) in map.iter_mut() {
                if is_sensitive_key(key) {
                    *val = Value::String(REDACTED.to_string());
                } else {
                    redact_json_value(val);
                }
            }
        }
        Value::Array(items) => items.iter_mut().for_each(redact_json_value),
        Value::String(s) => *s = redact_inline_secrets(s),
        _ => {}
    }
}

fn is_sensitive_key(key: &str) -> bool {
    let normalized = key.to_ascii_lowercase().replace(['-', ' '], "_");
    ["api_key", "token", "secret", "password", "authorization", "cookie"]
        .iter()
        .any(|needle| normalized.contains(needle))
}

fn redact_inline_secrets(input: &str) -> String {
    let redacted = BEARER_TOKEN_RE.replace_all(input, "Bearer [REDACTED]");
    let redacted = KEY_VALUE_SECRET_RE.replace_all(&redacted, "$1=[REDACTED]");
    VENDOR_KEY_RE.replace_all(&redacted, REDACTED).into_owned()
}

fn truncate_with_suffix(input: String) -> String {
    let char_count = input.chars().count();
    if char_count <= MAX_ERROR_TEXT_CHARS {
        return input;
    }

    let truncated: String = input.chars().take(MAX_ERROR_TEXT_CHARS).collect();
    format!(
        "{}... [truncated {} chars]",
        truncated,
        char_count - MAX_ERROR_TEXT_CHARS
    )
}

/// Build an AdapterError from a non-success HTTP response.
pub async fn handle_http_error(response: reqwest::Response, provider: &str) -> AdapterError {
    let status = response.status();
    let error_text = response.text().await.unwrap_or_default();
    let sanitized = sanitize_provider_error_text(&error_text);
    AdapterError::with_status(
        format!("{} API error (status {}): {}", provider, status, sanitized),
        status.as_u16(),
    )
}

/// Build an AdapterError from a transport failure (connect, timeout, body read).
///
/// The request URL is dropped from the message: ports and model ids in it
/// must not reach the classifier.
pub fn handle_request_error(err: reqwest::Error, provider: &str) -> AdapterError {
    let err = err.without_url();
    let detail = if err.is_timeout() {
        "request timed out".to_string()
    } else {
        sanitize_provider_error_text(&err.to_string())
    };
    let message = format!("{} request failed: {}", provider, detail);
    match err.status() {
        Some(status) => AdapterError::with_status(message, status.as_u16()),
        None => AdapterError::new(message),
    }
}

/// Build an AdapterError from a JSON parse failure.
pub fn handle_parse_error(err: reqwest::Error, provider: &str) -> AdapterError {
    let err = err.without_url();
    AdapterError::new(format!(
        "Failed to parse {} response: {}",
        provider,
        sanitize_provider_error_text(&err.to_string())
    ))
}
