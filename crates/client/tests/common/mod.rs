//! Common test utilities for integration tests.
//!
//! # What this does NOT handle
//! - Mock server setup (use wiremock directly in tests)

#[allow(unused_imports)]
pub use secrecy::SecretString;
#[allow(unused_imports)]
pub use typist_client::{AccountClient, ClientError};
#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Build a signed-in client pointed at the mock server.
#[allow(dead_code)]
pub fn signed_in_client(server: &MockServer) -> AccountClient {
    AccountClient::builder()
        .base_url(server.uri())
        .api_token(SecretString::new("test-token".to_string().into()))
        .max_retries(3)
        .build()
        .expect("client builds")
}
