pub mod credential;
pub mod describe;
pub mod run;

use crate::error::DumplingError;

use dumpling_core::DumplingConfig;
use dumpling_core::credential::DumplingAiCredential;
use dumpling_core::error::CoreError;

use std::path::Path;

use log::error;

/// Explicit `--config` path, or `dumpling.toml` discovery.
pub fn load_config(path: Option<&Path>) -> Result<DumplingConfig, DumplingError> {
    let result = match path {
        Some(path) => DumplingConfig::load(path),
        None => DumplingConfig::discover(),
    };

    let config = result.map_err(|e| {
        error!("Failed to load config: {}", e);
        CoreError::from(e)
    })?;
    Ok(config)
}

pub fn load_credential() -> Result<DumplingAiCredential, DumplingError> {
    let credential = DumplingAiCredential::from_env().map_err(|e| {
        error!("Failed to load credential: {}", e);
        CoreError::from(e)
    })?;
    Ok(credential)
}
