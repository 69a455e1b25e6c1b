//! Translation of upstream failures into [`Error`].

use reqwest::StatusCode;
use serde_json::Value;
use seozoom_core::Error;

/// Build the transport error for a response with status >= 400.
///
/// Uses the body's JSON `message` field when there is one, otherwise
/// `HTTP {status}`.
pub fn translate_error(status: StatusCode, body: &[u8]) -> Error {
    let message = serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|json| match json.get("message") {
            Some(Value::String(msg)) => Some(msg.clone()),
            Some(Value::Null) | None => None,
            Some(other) => Some(other.to_string()),
        })
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));

    Error::http(status.as_u16(), message)
}

/// Map a reqwest failure (connect, timeout, body read) to a transport error.
///
/// The request URL is stripped first: its query carries the API key.
pub(crate) fn from_reqwest(err: reqwest::Error) -> Error {
    let err = err.without_url();
    let status = err.status().map(|s| s.as_u16());
    let message = if err.is_timeout() {
        format!("request timeout: {err}")
    } else if err.is_connect() {
        format!("connection failed: {err}")
    } else {
        format!("network error: {err}")
    };

    Error::Transport { status, message }
}
