//! Errors raised while loading or preparing the Dumpling AI credential.

use common::ErrorLocation;

use thiserror::Error as ThisError;

#[derive(Debug, ThisError)]
pub enum CredentialError {
    #[error("Missing Credential Error: environment variable {var} is not set {location}")]
    MissingEnv {
        var: &'static str,
        location: ErrorLocation,
    },

    #[error("Environment Load Error: {message} {location}")]
    EnvLoad {
        message: String,
        location: ErrorLocation,
    },

    #[error("Key Validation Error: {reason} {location}")]
    KeyValidation {
        reason: KeyValidationFailure,
        location: ErrorLocation,
    },

    #[error("Authorization Header Error: {message} {location}")]
    Header {
        message: String,
        location: ErrorLocation,
    },
}

/// Why an API key was rejected before any request was made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyValidationFailure {
    Empty,
    TooLong { max: usize, actual: usize },
    PlaceholderDetected { pattern: &'static str },
    InvalidCharacters,
}

impl std::fmt::Display for KeyValidationFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "key is empty"),
            Self::TooLong { max, actual } => {
                write!(f, "key too long ({} chars, maximum {})", actual, max)
            }
            Self::PlaceholderDetected { pattern } => {
                write!(f, "detected placeholder pattern '{}'", pattern)
            }
            Self::InvalidCharacters => write!(f, "contains invalid characters"),
        }
    }
}

impl CredentialError {
    #[track_caller]
    pub fn missing_env(var: &'static str) -> Self {
        CredentialError::MissingEnv {
            var,
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn env_load(message: impl Into<String>) -> Self {
        CredentialError::EnvLoad {
            message: message.into(),
            location: ErrorLocation::caller(),
        }
    }

    #[track_caller]
    pub fn key_validation(reason: KeyValidationFailure) -> Self {
        CredentialError::KeyValidation {
            reason,
            location: ErrorLocation::caller(),
        }
    }
}
