//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Validation
//!
//! Config values are validated after parsing: the endpoint must be an
//! absolute `http` or `https` URL, and a timeout must be non-zero.

use serde::{Deserialize, Serialize};
use url::Url;

use super::ConfigError;

/// Configuration file contents.
///
/// # Example
///
/// ```toml
/// endpoint = "https://restcountries.com/v3.1/all"
/// timeout_secs = 30
/// user_agent = "country-directory"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    /// Catalog endpoint, without the field-selection query
    pub endpoint: Option<String>,

    /// Request timeout in seconds; transport default when unset
    pub timeout_secs: Option<u64>,

    /// User-Agent header value
    pub user_agent: Option<String>,
}

impl FileConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(endpoint) = &self.endpoint {
            validate_endpoint(endpoint)?;
        }

        if self.timeout_secs == Some(0) {
            return Err(ConfigError::InvalidValue(
                "timeout_secs must be greater than zero".to_string(),
            ));
        }

        if let Some(agent) = &self.user_agent {
            if agent.trim().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "user_agent cannot be empty".to_string(),
                ));
            }
        }

        Ok(())
    }
}

/// Check that an endpoint is an absolute http(s) URL.
pub fn validate_endpoint(endpoint: &str) -> Result<(), ConfigError> {
    let url = Url::parse(endpoint)
        .map_err(|e| ConfigError::InvalidValue(format!("invalid endpoint '{}': {}", endpoint, e)))?;

    match url.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::InvalidValue(format!(
            "invalid endpoint '{}': unsupported scheme '{}'",
            endpoint, other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = FileConfig::default();
        assert!(config.endpoint.is_none());
        assert!(config.timeout_secs.is_none());
        assert!(config.user_agent.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn valid_endpoint() {
        let config = FileConfig {
            endpoint: Some("http://localhost:8080/v3.1/all".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn relative_endpoint_rejected() {
        let config = FileConfig {
            endpoint: Some("v3.1/all".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn non_http_endpoint_rejected() {
        let err = validate_endpoint("ftp://example.com/all").unwrap_err();
        assert!(err.to_string().contains("unsupported scheme 'ftp'"));
    }

    #[test]
    fn zero_timeout_rejected() {
        let config = FileConfig {
            timeout_secs: Some(0),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn blank_user_agent_rejected() {
        let config = FileConfig {
            user_agent: Some("  ".to_string()),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn roundtrip() {
        let config = FileConfig {
            endpoint: Some("https://restcountries.com/v3.1/all".to_string()),
            timeout_secs: Some(30),
            user_agent: Some("countries-test".to_string()),
        };

        let toml = toml::to_string_pretty(&config).unwrap();
        let parsed: FileConfig = toml::from_str(&toml).unwrap();
        assert_eq!(config, parsed);
    }
}
