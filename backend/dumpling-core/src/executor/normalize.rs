//! Reduces any item failure to a message and, when known, an HTTP status.

use crate::error::{ApiErrorBody, DumplingClientError, ItemError};

use common::HttpStatusCode;

use serde_json::Value;

pub const UNKNOWN_API_ERROR: &str = "Unknown API error";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedError {
    pub message: String,
    pub http_code: Option<HttpStatusCode>,
}

impl NormalizedError {
    fn without_status(message: &str) -> Self {
        let message = if message.trim().is_empty() {
            UNKNOWN_API_ERROR.to_string()
        } else {
            message.to_string()
        };
        Self {
            message,
            http_code: None,
        }
    }
}

/// A response means the API spoke: its status is kept and the message is
/// taken from the body only. Without a response the error's own message is
/// used.
pub fn normalize(error: &ItemError) -> NormalizedError {
    match error {
        ItemError::Client(DumplingClientError::Api { status, body, .. }) => NormalizedError {
            message: message_from_body(body),
            http_code: Some(*status),
        },
        ItemError::Client(DumplingClientError::Http { message, .. })
        | ItemError::Client(DumplingClientError::UrlParse { message, .. }) => {
            NormalizedError::without_status(message)
        }
        ItemError::Client(DumplingClientError::Credential(e)) => {
            NormalizedError::without_status(&e.to_string())
        }
        ItemError::UnsupportedOperation { operation, .. } => NormalizedError::without_status(
            &format!("The operation \"{operation}\" is not supported"),
        ),
        ItemError::UnsupportedResource { resource, .. } => NormalizedError::without_status(
            &format!("The resource \"{resource}\" is not supported"),
        ),
        ItemError::Parameter(e) => NormalizedError::without_status(&e.message()),
    }
}

/// The string `error` member of an object body, or the body itself when it
/// is a plain string.
pub fn message_from_body(body: &ApiErrorBody) -> String {
    let message = match body {
        ApiErrorBody::Json(Value::Object(members)) => members.get("error").and_then(Value::as_str),
        ApiErrorBody::Json(Value::String(text)) => Some(text.as_str()),
        ApiErrorBody::Text(text) => Some(text.as_str()),
        _ => None,
    };

    message
        .filter(|message| !message.trim().is_empty())
        .unwrap_or(UNKNOWN_API_ERROR)
        .to_string()
}
