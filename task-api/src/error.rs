//! Request failures.

use serde_json::Value;

/// Body fields checked, in order, for a human-readable failure message.
const MESSAGE_FIELDS: [&str; 3] = ["error", "title", "detail"];

/// Error type for calls to the tasks API.
///
/// The `Display` output of every variant is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Failed to encode the request body.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The request never produced a response (connection, TLS, CORS).
    #[error("{0}")]
    Request(String),

    /// The server answered with a non-success status.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// A success response whose body did not decode.
    #[error("Deserialization error: {0}")]
    Deserialization(String),
}

impl ApiError {
    /// Build the error for a non-success response.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        ApiError::Status {
            status,
            message: failure_message(status, body),
        }
    }

    /// HTTP status, when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Best-effort message for a failed response.
///
/// Takes the first of `error`, `title`, `detail` present in a JSON object
/// body, or falls back to `Request failed with status N`.
pub fn failure_message(status: u16, body: &[u8]) -> String {
    serde_json::from_slice::<Value>(body)
        .ok()
        .and_then(|value| {
            let object = value.as_object()?;
            MESSAGE_FIELDS
                .iter()
                .find_map(|field| object.get(*field).and_then(message_text))
        })
        .unwrap_or_else(|| format!("Request failed with status {status}"))
}

fn message_text(value: &Value) -> Option<String> {
    match value {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(number) if number.as_f64() != Some(0.0) => Some(number.to_string()),
        Value::Bool(true) => Some(true.to_string()),
        _ => None,
    }
}
