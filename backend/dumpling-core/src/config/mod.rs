use crate::DUMPLING_API_BASE_URL;
use crate::error::config::ConfigError;

use common::ErrorLocation;

use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{info, warn};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = "dumpling.toml";
const CONFIG_DIR_NAME: &str = "dumpling";

// ============================================
// CONFIG STRUCTS
// ============================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DumplingConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout. Unset means requests may wait indefinitely.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    #[serde(default)]
    pub continue_on_fail: bool,
}

impl Default for DumplingConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: None,
            continue_on_fail: false,
        }
    }
}

fn default_base_url() -> String {
    DUMPLING_API_BASE_URL.to_string()
}

// ============================================
// IMPLEMENTATION
// ============================================

impl DumplingConfig {
    /// Load config from an explicit path. The file must exist: a mistyped
    /// path would otherwise point requests at the production API.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            warn!("Failed to read config file {}: {}", path.display(), e);
            ConfigError::ReadError {
                location: ErrorLocation::caller(),
                path: path.to_path_buf(),
                source: e,
            }
        })?;

        let config = Self::parse(&contents, path)?;
        info!("Config loaded from {}", path.display());
        Ok(config)
    }

    /// Look for `dumpling.toml` in the working directory, then in the user
    /// config directory (`~/.config/dumpling/` on Linux). Defaults when
    /// neither exists.
    pub fn discover() -> Result<Self, ConfigError> {
        for path in Self::candidate_paths() {
            if path.exists() {
                return Self::load(&path);
            }
        }

        info!("No {CONFIG_FILE_NAME} found, using defaults");
        Ok(Self::default())
    }

    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(CONFIG_FILE_NAME)];
        if let Some(config_dir) = dirs::config_dir() {
            paths.push(config_dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME));
        }
        paths
    }

    /// Parse and validate TOML contents. `path` is only used for error context.
    pub fn parse(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: DumplingConfig =
            toml::from_str(contents).map_err(|e| ConfigError::ParseError {
                location: ErrorLocation::caller(),
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::caller(),
                reason: format!("Invalid base_url format: {}", self.base_url),
            });
        }

        if self.timeout_secs == Some(0) {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::caller(),
                reason: "timeout_secs must be greater than 0 (omit it to disable)".to_string(),
            });
        }

        Ok(())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
