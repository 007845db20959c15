//! Retry helper for HTTP requests with exponential backoff.
//!
//! Requests that fail with HTTP 429 (Too Many Requests) are retried with
//! exponential backoff. Every other response, successful or not, is handed
//! back to the caller untouched so it can surface the status.

use reqwest::{RequestBuilder, Response};
use tracing::debug;

use crate::error::{ClientError, Result};

/// Maximum number of retry attempts for rate-limited requests.
const DEFAULT_MAX_RETRIES: usize = 3;

/// Sends an HTTP request with automatic retry logic for HTTP 429 responses.
///
/// - Implements exponential backoff (1s, 2s, 4s = 2^attempt)
/// - Respects the `max_retries` parameter (defaults to 3 if 0)
/// - Returns `MaxRetriesExceeded` when retries are exhausted
pub async fn send_request_with_retry(
    builder: RequestBuilder,
    max_retries: usize,
) -> Result<Response> {
    let max_retries = if max_retries == 0 {
        DEFAULT_MAX_RETRIES
    } else {
        max_retries
    };

    for attempt in 0..=max_retries {
        let attempt_builder = match builder.try_clone() {
            Some(cloned) => cloned,
            None => {
                if attempt == 0 {
                    debug!("Request builder cannot be cloned, single attempt only");
                    return builder.send().await.map_err(ClientError::from);
                }
                debug!("Cannot clone request builder for retry");
                return Err(ClientError::MaxRetriesExceeded(attempt));
            }
        };

        let response = attempt_builder.send().await?;
        if response.status().as_u16() != 429 {
            if attempt > 0 {
                debug!(attempt = attempt + 1, "Request succeeded after retry");
            }
            return Ok(response);
        }

        if attempt < max_retries {
            let backoff_secs = 2u64.pow(attempt as u32);
            debug!(
                attempt = attempt + 1,
                max_retries = max_retries + 1,
                backoff_secs = backoff_secs,
                "Rate limited (HTTP 429), retrying with exponential backoff"
            );
            tokio::time::sleep(tokio::time::Duration::from_secs(backoff_secs)).await;
        }
    }

    debug!(
        attempts = max_retries + 1,
        "Max retries exhausted for rate-limited request"
    );
    Err(ClientError::MaxRetriesExceeded(max_retries + 1))
}
