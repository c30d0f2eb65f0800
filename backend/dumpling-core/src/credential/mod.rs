//! The `dumplingAiApi` credential: one API key, sent as a bearer token.

pub mod validation;

use crate::error::CredentialError;

use common::{ErrorLocation, RedactedApiKey};

use std::env;
use std::path::PathBuf;

use log::{debug, info, warn};
use reqwest::header::{AUTHORIZATION, HeaderName, HeaderValue};

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "DUMPLING_AI_API_KEY";

/// Endpoint and body of the request used to check that a key is accepted.
pub const CREDENTIAL_TEST_PATH: &str = "/get-youtube-transcript";
pub const CREDENTIAL_TEST_VIDEO_URL: &str = "https://www.youtube.com/watch?v=dQw4w9WgXcQ";

#[derive(Debug, Clone)]
pub struct DumplingAiCredential {
    api_key: RedactedApiKey,
}

impl DumplingAiCredential {
    /// Wrap an API key after checking its format.
    #[track_caller]
    pub fn new(api_key: impl Into<String>) -> Result<Self, CredentialError> {
        let api_key = validation::validate_and_wrap(api_key.into())?;
        Ok(Self { api_key })
    }

    /// Load the key from `DUMPLING_AI_API_KEY`, reading a `.env` file first
    /// when one is found. Variables already set in the process win.
    pub fn from_env() -> Result<Self, CredentialError> {
        match try_load_dotenv() {
            Some(path) => info!("Loaded .env from: {:?}", path),
            None => debug!("No .env file found - checking process environment"),
        }

        match env::var(API_KEY_ENV) {
            Ok(value) => {
                let credential = Self::new(value)?;
                info!(
                    "Found Dumpling AI API key in {} ({} chars)",
                    API_KEY_ENV,
                    credential.api_key.len()
                );
                Ok(credential)
            }
            Err(env::VarError::NotPresent) => Err(CredentialError::missing_env(API_KEY_ENV)),
            Err(env::VarError::NotUnicode(_)) => Err(CredentialError::env_load(format!(
                "{API_KEY_ENV} contains invalid unicode"
            ))),
        }
    }

    pub fn api_key(&self) -> &RedactedApiKey {
        &self.api_key
    }

    /// `Authorization: Bearer <key>`, flagged sensitive so reqwest keeps it
    /// out of its own debug output.
    pub fn authorization_header(&self) -> Result<(HeaderName, HeaderValue), CredentialError> {
        let mut value =
            HeaderValue::from_str(&self.api_key.bearer()).map_err(|e| CredentialError::Header {
                message: e.to_string(),
                location: ErrorLocation::caller(),
            })?;
        value.set_sensitive(true);
        Ok((AUTHORIZATION, value))
    }
}

/// Tries the current directory, then the executable's directory.
fn try_load_dotenv() -> Option<PathBuf> {
    if let Ok(path) = dotenvy::dotenv() {
        return Some(path);
    }

    let exe_dir = env::current_exe().ok()?.parent()?.to_path_buf();
    let env_path = exe_dir.join(".env");
    if !env_path.exists() {
        return None;
    }

    match dotenvy::from_path(&env_path) {
        Ok(()) => Some(env_path),
        Err(e) => {
            warn!("Failed to parse .env at {:?}: {}", env_path, e);
            None
        }
    }
}
