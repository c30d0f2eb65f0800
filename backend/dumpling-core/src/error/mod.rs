pub mod client;
pub mod config;
pub mod credential;
pub mod execution;
pub mod parameter;

pub use client::{ApiErrorBody, DumplingClientError};
pub use credential::{CredentialError, KeyValidationFailure};
pub use execution::{ExecutionError, ItemError};
pub use parameter::ParameterError;

use common::HttpStatusCode;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CoreError {
    #[error(transparent)]
    Credential(#[from] credential::CredentialError),

    #[error(transparent)]
    Client(#[from] client::DumplingClientError),

    #[error(transparent)]
    Execution(#[from] execution::ExecutionError),

    #[error(transparent)]
    Config(#[from] config::ConfigError),
}

impl CoreError {
    /// Status the API answered with, when the failure came from a response.
    pub fn http_status(&self) -> Option<HttpStatusCode> {
        match self {
            CoreError::Client(e) => e.status(),
            CoreError::Execution(e) => e.http_code(),
            CoreError::Credential(_) | CoreError::Config(_) => None,
        }
    }
}
