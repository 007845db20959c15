//! Authentication provider endpoints.
//!
//! Unlike the account endpoints, a rejected call is an error
//! ([`ClientError::Auth`]) carrying the provider's error code.

use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde_json::json;

use crate::endpoints::encode_path_segment;
use crate::endpoints::response::check_auth_response;
use crate::endpoints::send_request_with_retry;
use crate::error::{ClientError, Result};
use crate::models::{AuthProviderId, AuthUser};

/// Fetch the authenticated identity.
pub async fn current_user(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    max_retries: usize,
) -> Result<AuthUser> {
    let url = format!("{}/auth/user", base_url);
    let builder = client
        .get(&url)
        .header("Authorization", format!("Bearer {}", auth_token));
    let response = send_request_with_retry(builder, max_retries).await?;
    let response = check_auth_response(response).await?;
    response
        .json()
        .await
        .map_err(|e| ClientError::InvalidResponse(format!("Failed to parse auth user: {}", e)))
}

/// Confirm the user's identity with their current password.
pub async fn reauthenticate_with_password(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    email: &str,
    password: &SecretString,
    max_retries: usize,
) -> Result<()> {
    let url = format!("{}/auth/reauthenticate", base_url);
    let builder = client
        .post(&url)
        .header("Authorization", format!("Bearer {}", auth_token))
        .json(&json!({ "email": email, "password": password.expose_secret() }));
    let response = send_request_with_retry(builder, max_retries).await?;
    check_auth_response(response).await?;
    Ok(())
}

/// Confirm the user's identity through an external provider.
pub async fn reauthenticate_with_provider(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    provider: AuthProviderId,
    max_retries: usize,
) -> Result<()> {
    let url = format!(
        "{}/auth/reauthenticate/{}",
        base_url,
        encode_path_segment(provider.as_str())
    );
    let builder = client
        .post(&url)
        .header("Authorization", format!("Bearer {}", auth_token));
    let response = send_request_with_retry(builder, max_retries).await?;
    check_auth_response(response).await?;
    Ok(())
}

/// Set a new password. Requires a recent reauthentication.
pub async fn update_password(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    new_password: &SecretString,
    max_retries: usize,
) -> Result<()> {
    let url = format!("{}/auth/password", base_url);
    let builder = client
        .post(&url)
        .header("Authorization", format!("Bearer {}", auth_token))
        .json(&json!({ "password": new_password.expose_secret() }));
    let response = send_request_with_retry(builder, max_retries).await?;
    check_auth_response(response).await?;
    Ok(())
}

/// Link email/password sign-in to an account created with another provider.
pub async fn add_password_auth(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    email: &str,
    password: &SecretString,
    max_retries: usize,
) -> Result<()> {
    let url = format!("{}/auth/providers/password", base_url);
    let builder = client
        .post(&url)
        .header("Authorization", format!("Bearer {}", auth_token))
        .json(&json!({ "email": email, "password": password.expose_secret() }));
    let response = send_request_with_retry(builder, max_retries).await?;
    check_auth_response(response).await?;
    Ok(())
}

/// Delete the login itself. Final step of account deletion.
pub async fn delete_login(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    max_retries: usize,
) -> Result<()> {
    let url = format!("{}/auth/user", base_url);
    let builder = client
        .delete(&url)
        .header("Authorization", format!("Bearer {}", auth_token));
    let response = send_request_with_retry(builder, max_retries).await?;
    check_auth_response(response).await?;
    Ok(())
}
