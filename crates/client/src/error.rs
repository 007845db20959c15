//! Error types for the account service client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Auth error code returned when a reauthentication password is wrong.
pub const WRONG_PASSWORD_CODE: &str = "auth/wrong-password";

/// Errors that can occur while talking to the account service.
///
/// Non-2xx responses from account endpoints are NOT errors: they are returned
/// as [`crate::ApiResponse`] values so callers can inspect `status`. Only
/// transport failures, undecodable bodies and rejected auth calls end up here.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// The response body did not match the expected shape.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// The identity provider rejected the request.
    #[error("Authentication failed ({code}): {message}")]
    Auth {
        status: u16,
        code: String,
        message: String,
    },

    /// No bearer token is configured.
    #[error("Not signed in")]
    NotSignedIn,

    /// Maximum retries exceeded.
    #[error("Maximum retries exceeded ({0} attempts)")]
    MaxRetriesExceeded(usize),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::HttpError(_) | Self::MaxRetriesExceeded(_))
    }

    /// Check if this error indicates authentication failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::Auth { .. } | Self::NotSignedIn)
    }

    /// Check if the identity provider reported a wrong password.
    pub fn is_wrong_password(&self) -> bool {
        matches!(self, Self::Auth { code, .. } if code == WRONG_PASSWORD_CODE)
    }
}
