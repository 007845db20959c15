//! Account and results endpoints.
//!
//! Every function returns the service's status and message as an
//! [`ApiResponse`]; only transport and decoding failures are errors.

use reqwest::Client;
use serde_json::json;

use crate::endpoints::encode_path_segment;
use crate::endpoints::response::{into_api_response, into_empty_response};
use crate::endpoints::send_request_with_retry;
use crate::error::Result;
use crate::models::{ApiResponse, TagPbResult, UserSnapshot};

fn bearer(auth_token: &str) -> String {
    format!("Bearer {}", auth_token)
}

/// Fetch the signed-in user's profile snapshot.
pub async fn get_user(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    max_retries: usize,
) -> Result<ApiResponse<UserSnapshot>> {
    let url = format!("{}/users", base_url);
    let builder = client.get(&url).header("Authorization", bearer(auth_token));
    let response = send_request_with_retry(builder, max_retries).await?;
    into_api_response(response).await
}

/// Change the account email.
pub async fn update_email(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    new_email: &str,
    previous_email: &str,
    max_retries: usize,
) -> Result<ApiResponse<()>> {
    let url = format!("{}/users/email", base_url);
    let builder = client
        .patch(&url)
        .header("Authorization", bearer(auth_token))
        .json(&json!({ "newEmail": new_email, "previousEmail": previous_email }));
    let response = send_request_with_retry(builder, max_retries).await?;
    into_empty_response(response).await
}

/// Check whether a display name is free. 200 means available.
pub async fn get_name_availability(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    name: &str,
    max_retries: usize,
) -> Result<ApiResponse<()>> {
    let url = format!("{}/users/checkName/{}", base_url, encode_path_segment(name));
    let builder = client.get(&url).header("Authorization", bearer(auth_token));
    let response = send_request_with_retry(builder, max_retries).await?;
    into_empty_response(response).await
}

/// Change the display name.
pub async fn update_name(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    name: &str,
    max_retries: usize,
) -> Result<ApiResponse<()>> {
    let url = format!("{}/users/name", base_url);
    let builder = client
        .patch(&url)
        .header("Authorization", bearer(auth_token))
        .json(&json!({ "name": name }));
    let response = send_request_with_retry(builder, max_retries).await?;
    into_empty_response(response).await
}

/// Delete the user's stats and profile.
pub async fn delete_user(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    max_retries: usize,
) -> Result<ApiResponse<()>> {
    let url = format!("{}/users", base_url);
    let builder = client
        .delete(&url)
        .header("Authorization", bearer(auth_token));
    let response = send_request_with_retry(builder, max_retries).await?;
    into_empty_response(response).await
}

/// Delete every stored test result.
pub async fn delete_all_results(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    max_retries: usize,
) -> Result<ApiResponse<()>> {
    let url = format!("{}/results", base_url);
    let builder = client
        .delete(&url)
        .header("Authorization", bearer(auth_token));
    let response = send_request_with_retry(builder, max_retries).await?;
    into_empty_response(response).await
}

/// Reset all personal bests.
pub async fn delete_personal_bests(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    max_retries: usize,
) -> Result<ApiResponse<()>> {
    let url = format!("{}/users/personalBests", base_url);
    let builder = client
        .delete(&url)
        .header("Authorization", bearer(auth_token));
    let response = send_request_with_retry(builder, max_retries).await?;
    into_empty_response(response).await
}

/// Clear the personal bests recorded under one tag.
pub async fn delete_tag_personal_best(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    tag_id: &str,
    max_retries: usize,
) -> Result<ApiResponse<TagPbResult>> {
    let url = format!(
        "{}/users/tags/{}/personalBest",
        base_url,
        encode_path_segment(tag_id)
    );
    let builder = client
        .delete(&url)
        .header("Authorization", bearer(auth_token));
    let response = send_request_with_retry(builder, max_retries).await?;
    into_api_response(response).await
}

/// Unlink the Discord account.
pub async fn unlink_discord(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    max_retries: usize,
) -> Result<ApiResponse<()>> {
    let url = format!("{}/users/discord/unlink", base_url);
    let builder = client
        .post(&url)
        .header("Authorization", bearer(auth_token));
    let response = send_request_with_retry(builder, max_retries).await?;
    into_empty_response(response).await
}
