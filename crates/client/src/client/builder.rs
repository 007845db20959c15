//! Client builder for constructing [`AccountClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeouts)
//!
//! # Invariants
//! - `base_url` is required and must be provided before calling `build()`
//! - The base URL is always normalized to have no trailing slashes

use secrecy::SecretString;
use std::time::Duration;

use crate::client::AccountClient;
use crate::error::{ClientError, Result};
use typist_config::ServiceConfig;
use typist_config::constants::{DEFAULT_MAX_RETRIES, DEFAULT_TIMEOUT_SECS};

/// Builder for creating a new [`AccountClient`].
pub struct AccountClientBuilder {
    base_url: Option<String>,
    api_token: Option<SecretString>,
    timeout: Duration,
    max_retries: usize,
}

impl Default for AccountClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            api_token: None,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_retries: DEFAULT_MAX_RETRIES,
        }
    }
}

impl AccountClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the account service.
    ///
    /// Trailing slashes will be automatically removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the bearer token of the signed-in user.
    pub fn api_token(mut self, token: SecretString) -> Self {
        self.api_token = Some(token);
        self
    }

    /// Set the request timeout.
    ///
    /// Default is 30 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the maximum number of retries for rate-limited requests.
    ///
    /// Default is 3 retries with exponential backoff (1s, 2s, 4s delays).
    pub fn max_retries(mut self, retries: usize) -> Self {
        self.max_retries = retries;
        self
    }

    /// Create a client builder from loaded service configuration.
    pub fn from_config(mut self, config: &ServiceConfig) -> Self {
        self.base_url = Some(config.base_url.clone());
        self.api_token = config.api_token.clone();
        self.timeout = config.timeout;
        self.max_retries = config.max_retries;
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] when no base URL was provided, or
    /// [`ClientError::HttpError`] when the HTTP client cannot be created.
    pub fn build(self) -> Result<AccountClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = normalize_base_url(base_url);

        let http = reqwest::Client::builder().timeout(self.timeout).build()?;

        tracing::debug!(base_url = %base_url, signed_in = self.api_token.is_some(), "Account client built");

        Ok(AccountClient {
            http,
            base_url,
            api_token: self.api_token,
            max_retries: self.max_retries,
        })
    }
}

fn normalize_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
