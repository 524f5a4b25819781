//! Application configuration: defaults, JSON file, then environment.
//!
//! The file lives at `~/.config/moviesearch/config.json` on most platforms
//! and may be relocated with `MOVIESEARCH_CONFIG_PATH`. A missing file means
//! defaults; a malformed one is an error so typos do not go unnoticed.
//! Command-line flags are layered on top by the binary.

use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use dirs_next::{config_dir, data_dir};
use moviesearch_types::AutocompleteConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::expand_tilde;

/// Overrides the configuration file location.
pub const CONFIG_PATH_ENV: &str = "MOVIESEARCH_CONFIG_PATH";
/// Bearer token for the movie search API.
pub const API_TOKEN_ENV: &str = "TMDB_API_TOKEN";
/// Overrides the movie search API root.
pub const API_BASE_ENV: &str = "MOVIESEARCH_API_BASE";

pub const CONFIG_FILE_NAME: &str = "config.json";
pub const LOG_FILE_NAME: &str = "moviesearch.log";
const DEFAULT_API_BASE: &str = "https://api.themoviedb.org/3";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    #[serde(flatten)]
    pub autocomplete: AutocompleteConfig,
    pub api_base_url: String,
    pub api_token: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            autocomplete: AutocompleteConfig::default(),
            api_base_url: DEFAULT_API_BASE.to_string(),
            api_token: None,
        }
    }
}

impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("autocomplete", &self.autocomplete)
            .field("api_base_url", &self.api_base_url)
            .field("api_token", &self.api_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl AppConfig {
    /// Load from the default path, then apply environment overrides and
    /// validate.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::load_from_path(&default_config_path())?;
        config.apply_env();
        config.validate()?;
        Ok(config)
    }

    /// Read a config file; a missing file yields defaults.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        match fs::read_to_string(path) {
            Ok(content) => {
                debug!(path = %path.display(), "loading config file");
                serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
                    path: path.to_path_buf(),
                    source,
                })
            }
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }

    /// Layer `TMDB_API_TOKEN` and `MOVIESEARCH_API_BASE` over file values.
    pub fn apply_env(&mut self) {
        if let Ok(token) = env::var(API_TOKEN_ENV)
            && !token.trim().is_empty()
        {
            self.api_token = Some(token.trim().to_string());
        }
        if let Ok(base) = env::var(API_BASE_ENV)
            && !base.trim().is_empty()
        {
            self.api_base_url = base.trim().to_string();
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.autocomplete.suggestions_limit == 0 {
            return Err(ConfigError::Invalid("suggestions_limit must be greater than zero".into()));
        }
        if self.autocomplete.request_timeout_ms == 0 {
            return Err(ConfigError::Invalid("request_timeout_ms must be greater than zero".into()));
        }
        if self.api_base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("api_base_url must not be empty".into()));
        }
        Ok(())
    }

    /// Pretty JSON with the token masked, for display.
    pub fn to_redacted_json(&self) -> Result<String, serde_json::Error> {
        let mut shown = self.clone();
        if shown.api_token.is_some() {
            shown.api_token = Some("<redacted>".into());
        }
        serde_json::to_string_pretty(&shown)
    }
}

/// Get the default path for the configuration file.
pub fn default_config_path() -> PathBuf {
    if let Ok(path) = env::var(CONFIG_PATH_ENV)
        && !path.trim().is_empty()
    {
        return expand_tilde(&path);
    }

    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("moviesearch")
        .join(CONFIG_FILE_NAME)
}

/// Default location of the TUI log file.
pub fn default_log_path() -> PathBuf {
    data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("moviesearch")
        .join(LOG_FILE_NAME)
}
