//! Configuration resolution
//!
//! The tool is configured through the `HA_URL` and `HA_TOKEN` environment
//! variables, with matching command-line flags taking precedence. Resolution
//! happens once at startup; the resulting [`Config`] is passed into the
//! client rather than read from ambient state by deeper code.

use std::env;
use std::time::Duration;

use thiserror::Error;
use url::Url;

/// Environment variable holding the instance base URL.
pub const URL_VAR: &str = "HA_URL";

/// Environment variable holding the long-lived access token.
pub const TOKEN_VAR: &str = "HA_TOKEN";

/// Base URL used when neither `--url` nor `HA_URL` is set.
pub const DEFAULT_BASE_URL: &str = "http://homeassistant.local:8123";

/// Request timeout applied unless `--timeout` overrides it.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Resolved connection settings for one run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the Home Assistant instance.
    pub base_url: Url,

    /// Long-lived access token sent as a bearer credential.
    pub token: String,

    /// Timeout applied to the single states request.
    pub timeout: Duration,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{} environment variable not set", TOKEN_VAR)]
    MissingToken,

    #[error("invalid base URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
}

impl Config {
    /// Resolve configuration from CLI overrides and the process environment.
    ///
    /// Precedence per setting: flag, then environment variable, then default.
    /// Empty or whitespace-only values count as unset.
    pub fn resolve(
        url: Option<&str>,
        token: Option<&str>,
        timeout_secs: u64,
    ) -> Result<Self, ConfigError> {
        let url = match url {
            Some(u) => u.to_string(),
            None => env_nonempty(URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        };

        let token = match token {
            Some(t) => t.to_string(),
            None => env_nonempty(TOKEN_VAR).ok_or(ConfigError::MissingToken)?,
        };
        if token.trim().is_empty() {
            return Err(ConfigError::MissingToken);
        }

        let base_url = Url::parse(&url).map_err(|source| ConfigError::InvalidUrl { url, source })?;

        Ok(Self {
            base_url,
            token,
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn env_nonempty(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
