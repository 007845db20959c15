//! Main account service client.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `account`: Profile, results and tag methods
//! - `auth`: Identity provider methods
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Signing in; the bearer token is supplied by configuration
//!
//! # Invariants
//! - Every method requires a bearer token and fails with
//!   [`ClientError::NotSignedIn`] before any network traffic when none is set
//! - The client is immutable after construction and safe to share behind an `Arc`

pub mod builder;

mod account;
mod auth;

use secrecy::{ExposeSecret, SecretString};

use crate::error::{ClientError, Result};

/// Account service API client.
///
/// Use [`AccountClient::builder()`] to create one:
///
/// ```rust,ignore
/// use typist_client::AccountClient;
///
/// let client = AccountClient::builder()
///     .base_url("http://localhost:5005".to_string())
///     .build()?;
/// ```
#[derive(Debug)]
pub struct AccountClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) api_token: Option<SecretString>,
    pub(crate) max_retries: usize,
}

impl AccountClient {
    /// Create a new client builder.
    pub fn builder() -> builder::AccountClientBuilder {
        builder::AccountClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether a bearer token is configured.
    pub fn is_signed_in(&self) -> bool {
        self.api_token.is_some()
    }

    pub(crate) fn auth_token(&self) -> Result<&str> {
        self.api_token
            .as_ref()
            .map(|token| token.expose_secret())
            .ok_or(ClientError::NotSignedIn)
    }
}
