//! Service configuration loader.
//!
//! Responsibilities:
//! - Provide a builder-pattern `ConfigLoader` that merges defaults, `.env`,
//!   environment variables and explicit overrides (CLI flags).
//! - Validate the result into a `ServiceConfig`.
//!
//! Does NOT handle:
//! - User settings persistence (see `settings.rs`).
//!
//! Invariants / Assumptions:
//! - Builder methods take precedence over environment variables.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - `load_dotenv()` must be called explicitly to enable `.env` file loading.
//! - The `DOTENV_DISABLED` variable is checked before `dotenvy::dotenv()` is called.

use secrecy::SecretString;
use std::time::Duration;
use url::Url;

use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS, MAX_MAX_RETRIES, MAX_TIMEOUT_SECS,
};
use crate::error::ConfigError;

/// Environment variable holding the account service base URL.
pub const ENV_BASE_URL: &str = "TYPIST_BASE_URL";
/// Environment variable holding the account service bearer token.
pub const ENV_API_TOKEN: &str = "TYPIST_API_TOKEN";
/// Environment variable holding the request timeout in seconds.
pub const ENV_TIMEOUT_SECS: &str = "TYPIST_TIMEOUT_SECS";
/// Environment variable holding the maximum retry count.
pub const ENV_MAX_RETRIES: &str = "TYPIST_MAX_RETRIES";

/// Validated connection settings for the remote account service.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Base URL without a trailing slash.
    pub base_url: String,
    /// Bearer token for the signed-in user, if any.
    pub api_token: Option<SecretString>,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Retries for rate-limited requests.
    pub max_retries: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

/// Read an environment variable, returning None if unset, empty, or whitespace-only.
/// Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Configuration loader that builds a `ServiceConfig` from environment and overrides.
#[derive(Default)]
pub struct ConfigLoader {
    base_url: Option<String>,
    api_token: Option<SecretString>,
    timeout: Option<Duration>,
    max_retries: Option<usize>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self::default()
    }

    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from .env file if present.
    ///
    /// Missing `.env` files are silently ignored. Setting `DOTENV_DISABLED`
    /// to "true" or "1" skips loading entirely.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DotenvParse` for invalid syntax and
    /// `ConfigError::DotenvIo` when the file exists but cannot be read.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(dotenvy::Error::Io(io_err)) if io_err.kind() == std::io::ErrorKind::NotFound => {
                Ok(self)
            }
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Apply `TYPIST_*` environment variables.
    ///
    /// Values already set through builder methods are kept.
    pub fn from_env(mut self) -> Result<Self, ConfigError> {
        if self.base_url.is_none() {
            self.base_url = env_var_or_none(ENV_BASE_URL);
        }
        if self.api_token.is_none() {
            self.api_token = env_var_or_none(ENV_API_TOKEN).map(|t| SecretString::new(t.into()));
        }
        if self.timeout.is_none()
            && let Some(raw) = env_var_or_none(ENV_TIMEOUT_SECS)
        {
            let secs: u64 = raw.parse().map_err(|_| ConfigError::InvalidValue {
                var: ENV_TIMEOUT_SECS.to_string(),
                message: format!("'{raw}' is not a whole number of seconds"),
            })?;
            self.timeout = Some(Duration::from_secs(secs));
        }
        if self.max_retries.is_none()
            && let Some(raw) = env_var_or_none(ENV_MAX_RETRIES)
        {
            let retries: usize = raw.parse().map_err(|_| ConfigError::InvalidValue {
                var: ENV_MAX_RETRIES.to_string(),
                message: format!("'{raw}' is not a valid retry count"),
            })?;
            self.max_retries = Some(retries);
        }
        Ok(self)
    }

    /// Override the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Override the API token.
    pub fn with_api_token(mut self, token: SecretString) -> Self {
        self.api_token = Some(token);
        self
    }

    /// Override the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Override the retry count.
    pub fn with_max_retries(mut self, retries: usize) -> Self {
        self.max_retries = Some(retries);
        self
    }

    /// Validate and build the final configuration.
    pub fn build(self) -> Result<ServiceConfig, ConfigError> {
        let raw_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let parsed = Url::parse(&raw_url).map_err(|e| ConfigError::InvalidBaseUrl {
            url: raw_url.clone(),
            message: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl {
                url: raw_url,
                message: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        let timeout = self
            .timeout
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        if timeout.is_zero() || timeout.as_secs() > MAX_TIMEOUT_SECS {
            return Err(ConfigError::InvalidTimeout {
                message: format!(
                    "must be between 1 and {MAX_TIMEOUT_SECS} seconds, got {}",
                    timeout.as_secs()
                ),
            });
        }

        let max_retries = self.max_retries.unwrap_or(DEFAULT_MAX_RETRIES);
        if max_retries > MAX_MAX_RETRIES {
            return Err(ConfigError::InvalidMaxRetries {
                message: format!("must be at most {MAX_MAX_RETRIES}, got {max_retries}"),
            });
        }

        Ok(ServiceConfig {
            base_url: raw_url.trim_end_matches('/').to_string(),
            api_token: self.api_token,
            timeout,
            max_retries,
        })
    }
}
