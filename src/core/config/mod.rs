//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Config file
//! 3. CLI flags (`--endpoint`)
//!
//! # Config Locations
//!
//! An explicit `--config <PATH>` must exist. Otherwise searched in order:
//! 1. `$COUNTRY_DIRECTORY_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/country-directory/config.toml`
//! 3. `~/.country-directory/config.toml`
//!
//! A missing file is not an error; defaults are used.
//!
//! # Example
//!
//! ```no_run
//! use country_directory::core::config::Config;
//!
//! let result = Config::load(None).unwrap();
//! println!("Endpoint: {}", result.config.endpoint());
//! ```

pub mod schema;

pub use schema::FileConfig;

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

use crate::source::restcountries::{DEFAULT_ENDPOINT, DEFAULT_USER_AGENT};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "COUNTRY_DIRECTORY_CONFIG";

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("config file not found: {0}")]
    NotFound(PathBuf),

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Result of loading configuration.
#[derive(Debug)]
pub struct ConfigLoadResult {
    /// The loaded configuration.
    pub config: Config,
    /// The file it came from, if any.
    pub path: Option<PathBuf>,
}

/// Effective configuration.
///
/// Accessor methods apply defaults and the CLI override.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Values from the config file
    pub file: FileConfig,
    /// Endpoint given on the command line
    endpoint_override: Option<String>,
}

impl Config {
    /// Load configuration.
    ///
    /// If `explicit` is provided, that file must exist. Otherwise the
    /// standard locations are searched.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read, parsed,
    /// or validated.
    pub fn load(explicit: Option<&Path>) -> Result<ConfigLoadResult, ConfigError> {
        let path = match explicit {
            Some(path) if path.exists() => Some(path.to_path_buf()),
            Some(path) => return Err(ConfigError::NotFound(path.to_path_buf())),
            None => Self::find_config(),
        };

        let file = match &path {
            Some(path) => Self::read_config(path)?,
            None => FileConfig::default(),
        };
        file.validate()?;

        Ok(ConfigLoadResult {
            config: Config {
                file,
                endpoint_override: None,
            },
            path,
        })
    }

    /// Search the standard locations for a config file.
    fn find_config() -> Option<PathBuf> {
        // 1. Check $COUNTRY_DIRECTORY_CONFIG
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        // 2. Check $XDG_CONFIG_HOME/country-directory/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("country-directory/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        // 3. Check ~/.country-directory/config.toml
        dirs::home_dir()
            .map(|home| home.join(".country-directory/config.toml"))
            .filter(|path| path.exists())
    }

    /// Read and parse a config file.
    fn read_config(path: &Path) -> Result<FileConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Apply an endpoint given on the command line.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if the endpoint is not an http(s) URL.
    pub fn with_endpoint_override(mut self, endpoint: Option<String>) -> Result<Self, ConfigError> {
        if let Some(endpoint) = &endpoint {
            schema::validate_endpoint(endpoint)?;
        }
        self.endpoint_override = endpoint;
        Ok(self)
    }

    // =========================================================================
    // Accessor methods with precedence
    // =========================================================================

    /// Get the catalog endpoint.
    ///
    /// Defaults to the public REST Countries API.
    pub fn endpoint(&self) -> &str {
        self.endpoint_override
            .as_deref()
            .or(self.file.endpoint.as_deref())
            .unwrap_or(DEFAULT_ENDPOINT)
    }

    /// Get the request timeout.
    ///
    /// `None` means the transport default.
    pub fn timeout(&self) -> Option<Duration> {
        self.file.timeout_secs.map(Duration::from_secs)
    }

    /// Get the User-Agent header value.
    pub fn user_agent(&self) -> &str {
        self.file.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }
}
