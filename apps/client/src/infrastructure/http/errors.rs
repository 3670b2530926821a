//! Transport-level errors of the HTTP API client.
//!
//! `reqwest` failures are classified the same way the server side classifies
//! its outbound calls (timeout, connect, status) and then folded into
//! [`DomainError`] at the repository boundary.

use crate::domain::shared::errors::DomainError;
use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request timed out")]
    Timeout,

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("server responded with {status}{}", detail_suffix(.message))]
    Status { status: u16, message: Option<String> },

    #[error("invalid response body: {0}")]
    Decode(String),

    #[error("invalid request: {0}")]
    Request(String),

    #[error("http client error: {0}")]
    Transport(String),
}

fn detail_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {}", m))
        .unwrap_or_default()
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            tracing::warn!(reqwest_timeout = %err);
            ApiError::Timeout
        } else if err.is_connect() {
            tracing::warn!(reqwest_connect = %err);
            ApiError::Connect(err.to_string())
        } else if err.is_decode() {
            tracing::warn!(reqwest_decode = %err);
            ApiError::Decode(err.to_string())
        } else if err.is_builder() || err.is_request() {
            tracing::warn!(reqwest_request = %err);
            ApiError::Request(err.to_string())
        } else if let Some(status) = err.status() {
            tracing::info!(reqwest_status = %err);
            ApiError::Status {
                status: status.as_u16(),
                message: None,
            }
        } else {
            tracing::error!(reqwest_error = %err);
            ApiError::Transport(err.to_string())
        }
    }
}

impl From<ApiError> for DomainError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Status { status: 401, .. } => DomainError::Unauthenticated,
            ApiError::Status {
                status: 404,
                message,
            } => DomainError::NotFound(message.unwrap_or_else(|| "resource".into())),
            ApiError::Status {
                status: 400,
                message: Some(message),
            } => DomainError::ValidationError(message),
            other => DomainError::RequestFailed(other.to_string()),
        }
    }
}

/// Extracts the first human-readable message from an API error body.
///
/// Handles the shapes the backend produces: a bare string, `{"detail": ..}`,
/// `{"non_field_errors": [..]}` and per-field lists such as
/// `{"email": ["already registered"]}` (reported as `email: already registered`).
pub fn first_error_message(body: &Value) -> Option<String> {
    match body {
        Value::String(text) => Some(text.clone()),
        Value::Array(items) => items.iter().find_map(first_error_message),
        Value::Object(fields) => {
            for key in ["detail", "non_field_errors"] {
                if let Some(message) = fields.get(key).and_then(first_error_message) {
                    return Some(message);
                }
            }
            fields.iter().find_map(|(field, value)| {
                first_error_message(value).map(|message| format!("{}: {}", field, message))
            })
        }
        _ => None,
    }
}
