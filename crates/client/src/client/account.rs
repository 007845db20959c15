//! Account and results API methods for [`AccountClient`].

use crate::client::AccountClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{ApiResponse, TagPbResult, UserSnapshot};

impl AccountClient {
    /// Fetch the signed-in user's profile snapshot.
    pub async fn get_user(&self) -> Result<ApiResponse<UserSnapshot>> {
        endpoints::get_user(&self.http, &self.base_url, self.auth_token()?, self.max_retries).await
    }

    /// Change the account email.
    pub async fn update_email(
        &self,
        new_email: &str,
        previous_email: &str,
    ) -> Result<ApiResponse<()>> {
        endpoints::update_email(
            &self.http,
            &self.base_url,
            self.auth_token()?,
            new_email,
            previous_email,
            self.max_retries,
        )
        .await
    }

    /// Check whether a display name is free.
    pub async fn get_name_availability(&self, name: &str) -> Result<ApiResponse<()>> {
        endpoints::get_name_availability(
            &self.http,
            &self.base_url,
            self.auth_token()?,
            name,
            self.max_retries,
        )
        .await
    }

    /// Change the display name.
    pub async fn update_name(&self, name: &str) -> Result<ApiResponse<()>> {
        endpoints::update_name(
            &self.http,
            &self.base_url,
            self.auth_token()?,
            name,
            self.max_retries,
        )
        .await
    }

    /// Delete the user's stats and profile.
    pub async fn delete_user(&self) -> Result<ApiResponse<()>> {
        endpoints::delete_user(&self.http, &self.base_url, self.auth_token()?, self.max_retries)
            .await
    }

    /// Delete every stored test result.
    pub async fn delete_all_results(&self) -> Result<ApiResponse<()>> {
        endpoints::delete_all_results(
            &self.http,
            &self.base_url,
            self.auth_token()?,
            self.max_retries,
        )
        .await
    }

    /// Reset all personal bests.
    pub async fn delete_personal_bests(&self) -> Result<ApiResponse<()>> {
        endpoints::delete_personal_bests(
            &self.http,
            &self.base_url,
            self.auth_token()?,
            self.max_retries,
        )
        .await
    }

    /// Clear the personal bests recorded under one tag.
    pub async fn delete_tag_personal_best(&self, tag_id: &str) -> Result<ApiResponse<TagPbResult>> {
        endpoints::delete_tag_personal_best(
            &self.http,
            &self.base_url,
            self.auth_token()?,
            tag_id,
            self.max_retries,
        )
        .await
    }

    /// Unlink the Discord account.
    pub async fn unlink_discord(&self) -> Result<ApiResponse<()>> {
        endpoints::unlink_discord(&self.http, &self.base_url, self.auth_token()?, self.max_retries)
            .await
    }
}
