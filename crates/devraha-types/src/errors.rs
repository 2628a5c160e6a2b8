use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Fallback returned by [`error_message`] when nothing usable is found.
pub const DEFAULT_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// Fallback returned by [`axios_error_message`] when nothing usable is found.
pub const DEFAULT_AXIOS_ERROR_MESSAGE: &str = "Unexpected error";

/// Standard API error shape.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error("{message}")]
pub struct ApiError {
    /// Human-readable message.
    pub message: String,
    /// Stable machine-readable code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    /// Extra context in any shape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

/// HTTP response part of an HTTP-client error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AxiosResponse<T> {
    /// Decoded response body.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// HTTP status code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// HTTP status text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_text: Option<String>,
}

/// Error raised by the frontends' HTTP client, as seen after serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxiosErrorShape<T = Value> {
    /// Response, when the server answered.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response: Option<AxiosResponse<T>>,
    /// Client-side message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Client-side error code (e.g. `ECONNABORTED`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Returns true if `value` has the [`ApiError`] shape (an object with a string `message`).
pub fn is_api_error(value: &Value) -> bool {
    value.get("message").is_some_and(Value::is_string)
}

/// Extracts a human-readable message from an error payload of unknown shape.
///
/// Never fails: anything that is not [`ApiError`]-shaped yields `fallback`.
pub fn error_message(value: &Value, fallback: &str) -> String {
    match value.get("message") {
        Some(Value::String(message)) => message.clone(),
        _ => fallback.to_string(),
    }
}

/// Message of a typed error, i.e. its display text.
pub fn error_message_of(error: &dyn std::error::Error) -> String {
    error.to_string()
}

/// Extracts the message from a serialized HTTP-client error.
///
/// Prefers the server's `response.data.message`, then the client-side
/// `message`; empty strings are skipped.
pub fn axios_error_message(value: &Value, fallback: &str) -> String {
    let from_response = value
        .pointer("/response/data/message")
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty());
    let from_client = value
        .get("message")
        .and_then(Value::as_str)
        .filter(|message| !message.is_empty());

    from_response
        .or(from_client)
        .unwrap_or(fallback)
        .to_string()
}

/// Display text of a typed error, or `fallback` when it is empty.
pub fn axios_error_message_of(error: &dyn std::error::Error, fallback: &str) -> String {
    let message = error.to_string();
    if message.is_empty() {
        fallback.to_string()
    } else {
        message
    }
}
