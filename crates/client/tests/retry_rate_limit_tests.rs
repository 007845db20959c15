//! Rate limit (429) retry behavior tests.
//!
//! # Invariants
//! - 429 responses trigger retry with exponential backoff
//! - Exhausted retries surface `MaxRetriesExceeded`

mod common;

use common::*;
use serde_json::json;
use wiremock::matchers::{method, path};

#[tokio::test]
async fn test_retry_on_429_success() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/users/personalBests"))
        .respond_with(ResponseTemplate::new(429))
        .up_to_n_times(2)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/users/personalBests"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"message": "ok"})))
        .mount(&server)
        .await;

    let client = signed_in_client(&server);
    let response = client.delete_personal_bests().await.unwrap();

    assert_eq!(response.status, 200);
}

#[tokio::test]
async fn test_retry_on_429_exhaustion() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let client = AccountClient::builder()
        .base_url(server.uri())
        .api_token(SecretString::new("test-token".to_string().into()))
        .max_retries(1)
        .build()
        .unwrap();
    let err = client.delete_user().await.unwrap_err();

    assert!(matches!(err, ClientError::MaxRetriesExceeded(2)));
}
