use crate::error::credential::CredentialError;

use common::{ErrorLocation, HttpStatusCode};

use serde_json::Value;
use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum DumplingClientError {
    /// The API answered with a non-success status.
    #[error("API Error: HTTP {status} - {body} {location}")]
    Api {
        status: HttpStatusCode,
        body: ApiErrorBody,
        location: ErrorLocation,
    },

    /// The request never produced a response.
    #[error("HTTP Error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Credential(#[from] CredentialError),

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },
}

/// Body of a failed response, as far as it could be decoded.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiErrorBody {
    Json(Value),
    Text(String),
    Empty,
}

impl ApiErrorBody {
    pub fn from_text(text: String) -> Self {
        if text.trim().is_empty() {
            return ApiErrorBody::Empty;
        }
        match serde_json::from_str::<Value>(&text) {
            Ok(value) => ApiErrorBody::Json(value),
            Err(_) => ApiErrorBody::Text(text),
        }
    }
}

impl std::fmt::Display for ApiErrorBody {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiErrorBody::Json(value) => write!(f, "{}", value),
            ApiErrorBody::Text(text) => write!(f, "{}", text),
            ApiErrorBody::Empty => write!(f, "<empty body>"),
        }
    }
}

impl DumplingClientError {
    #[track_caller]
    pub fn api(status: impl Into<HttpStatusCode>, body: ApiErrorBody) -> Self {
        DumplingClientError::Api {
            status: status.into(),
            body,
            location: ErrorLocation::caller(),
        }
    }

    /// Status code, when the API produced a response.
    pub fn status(&self) -> Option<HttpStatusCode> {
        match self {
            DumplingClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}

impl From<url::ParseError> for DumplingClientError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        DumplingClientError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::caller(),
        }
    }
}

impl From<reqwest::Error> for DumplingClientError {
    #[track_caller]
    fn from(error: reqwest::Error) -> Self {
        DumplingClientError::Http {
            message: error.to_string(),
            location: ErrorLocation::caller(),
        }
    }
}
