use dumpling_core::error::CoreError;

use common::ErrorLocation;

use thiserror::Error;

/// Errors surfaced by the `dumpling` command line.
///
/// Core errors are flattened to their message here; the core crate keeps the
/// structured variants.
#[derive(Debug, Error)]
pub enum DumplingError {
    /// Error from this binary
    #[error("Dumpling Error: {message} {location}")]
    Dumpling {
        message: String,
        location: ErrorLocation,
    },

    /// Error from dumpling-core (config, credential, execution)
    #[error("Core Error: {message} {location}")]
    Core {
        message: String,
        location: ErrorLocation,
    },

    /// Input items could not be read or parsed
    #[error("Input Error: {message} {location}")]
    Input {
        message: String,
        location: ErrorLocation,
    },

    /// The credential is missing or was rejected
    #[error("Credential Error: {message} {location}")]
    Credential {
        message: String,
        location: ErrorLocation,
    },

    /// The API answered 429
    #[error("Rate Limit Error: {message} {location}")]
    RateLimited {
        message: String,
        location: ErrorLocation,
    },
}

/// Process exit codes.
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_INPUT: u8 = 3;
pub const EXIT_CREDENTIAL: u8 = 4;
pub const EXIT_RATE_LIMITED: u8 = 5;

impl DumplingError {
    pub fn exit_code(&self) -> u8 {
        match self {
            DumplingError::Input { .. } => EXIT_INPUT,
            DumplingError::Credential { .. } => EXIT_CREDENTIAL,
            DumplingError::RateLimited { .. } => EXIT_RATE_LIMITED,
            DumplingError::Dumpling { .. } | DumplingError::Core { .. } => EXIT_ERROR,
        }
    }
}

impl From<CoreError> for DumplingError {
    #[track_caller]
    fn from(error: CoreError) -> Self {
        let location = ErrorLocation::caller();
        let message = error.to_string();
        let status = error.http_status();

        if matches!(error, CoreError::Credential(_)) || status.is_some_and(|s| s.is_auth_error()) {
            DumplingError::Credential { message, location }
        } else if status.is_some_and(|s| s.is_rate_limited()) {
            DumplingError::RateLimited { message, location }
        } else {
            DumplingError::Core { message, location }
        }
    }
}
