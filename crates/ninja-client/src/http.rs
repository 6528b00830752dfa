//! Shared HTTP response helpers.
//!
//! Centralizes status checks and body decoding so the request methods on
//! [`ApiClient`](crate::ApiClient) stay focused on building requests.

use serde_json::Value;

use crate::error::ApiError;

/// Longest raw body echoed back in an error message.
const MAX_MESSAGE_LEN: usize = 200;

/// Check an HTTP response for a non-success status.
///
/// Returns the response unchanged on success, otherwise
/// [`ApiError::Http`] carrying the backend's error detail.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
    if !resp.status().is_success() {
        let status = resp.status().as_u16();
        let body = resp.text().await.unwrap_or_default();
        return Err(ApiError::Http {
            status,
            message: error_message(status, &body),
        });
    }
    Ok(resp)
}

/// Decode a success body. An empty body (e.g. `204 No Content`) is `null`.
pub async fn decode_body(resp: reqwest::Response) -> Result<Value, ApiError> {
    let text = resp.text().await?;
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(&text).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Pick a human-readable message out of an error body.
///
/// Understands `{"detail": ...}`, `{"error": ...}`, `{"message": ...}` and
/// field-keyed validation maps like `{"phone": ["This field is required."]}`.
fn error_message(status: u16, body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return format!("request failed with status {status}");
    }

    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(trimmed) {
        for key in ["detail", "error", "message"] {
            if let Some(Value::String(text)) = map.get(key) {
                return text.clone();
            }
        }
        let fields: Vec<String> = map
            .iter()
            .map(|(field, value)| format!("{field}: {}", flatten(value)))
            .collect();
        if !fields.is_empty() {
            return fields.join("; ");
        }
    }

    truncate(trimmed, MAX_MESSAGE_LEN)
}

fn flatten(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Array(items) => items.iter().map(flatten).collect::<Vec<_>>().join(" "),
        other => other.to_string(),
    }
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max).collect();
    format!("{cut}...")
}
