//! Per-item failures and the fatal error that aborts a run.

use crate::error::client::DumplingClientError;
use crate::error::parameter::ParameterError;

use common::{ErrorLocation, HttpStatusCode};

use thiserror::Error as ThisError;

/// Everything that can go wrong while processing a single input item.
#[derive(Debug, ThisError)]
pub enum ItemError {
    #[error("Unsupported Operation Error: The operation \"{operation}\" is not supported {location}")]
    UnsupportedOperation {
        resource: String,
        operation: String,
        location: ErrorLocation,
    },

    #[error("Unsupported Resource Error: The resource \"{resource}\" is not supported {location}")]
    UnsupportedResource {
        resource: String,
        location: ErrorLocation,
    },

    #[error(transparent)]
    Parameter(#[from] ParameterError),

    #[error(transparent)]
    Client(#[from] DumplingClientError),
}

impl ItemError {
    #[track_caller]
    pub fn unsupported_operation(resource: impl Into<String>, operation: impl Into<String>) -> Self {
        ItemError::UnsupportedOperation {
            resource: resource.into(),
            operation: operation.into(),
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn unsupported_resource(resource: impl Into<String>) -> Self {
        ItemError::UnsupportedResource {
            resource: resource.into(),
            location: ErrorLocation::caller(),
        }
    }
}

/// Fatal error for a whole run, raised when continue-on-failure is off.
#[derive(Debug, ThisError)]
pub enum ExecutionError {
    #[error(
        "Dumpling AI API Error: {message}{} [operation: {operation}, item: {item_index}] {location}",
        status_suffix(.http_code)
    )]
    Api {
        message: String,
        operation: String,
        item_index: usize,
        http_code: Option<HttpStatusCode>,
        #[source]
        source: ItemError,
        location: ErrorLocation,
    },
}

impl ExecutionError {
    #[track_caller]
    pub fn api(
        message: impl Into<String>,
        operation: impl Into<String>,
        item_index: usize,
        http_code: Option<HttpStatusCode>,
        source: ItemError,
    ) -> Self {
        ExecutionError::Api {
            message: message.into(),
            operation: operation.into(),
            item_index,
            http_code,
            source,
            location: ErrorLocation::caller(),
        }
    }

    pub fn http_code(&self) -> Option<HttpStatusCode> {
        match self {
            ExecutionError::Api { http_code, .. } => *http_code,
        }
    }

    pub fn item_index(&self) -> usize {
        match self {
            ExecutionError::Api { item_index, .. } => *item_index,
        }
    }

    /// The normalized message, without decoration.
    pub fn message(&self) -> &str {
        match self {
            ExecutionError::Api { message, .. } => message,
        }
    }
}

fn status_suffix(http_code: &Option<HttpStatusCode>) -> String {
    match http_code {
        Some(code) => format!(" (HTTP {code})"),
        None => String::new(),
    }
}
