//! Identity provider API methods for [`AccountClient`].

use secrecy::SecretString;

use crate::client::AccountClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{AuthProviderId, AuthUser};

impl AccountClient {
    /// Fetch the authenticated identity.
    pub async fn current_user(&self) -> Result<AuthUser> {
        endpoints::current_user(&self.http, &self.base_url, self.auth_token()?, self.max_retries)
            .await
    }

    /// Confirm the user's identity with their current password.
    pub async fn reauthenticate_with_password(
        &self,
        email: &str,
        password: &SecretString,
    ) -> Result<()> {
        endpoints::reauthenticate_with_password(
            &self.http,
            &self.base_url,
            self.auth_token()?,
            email,
            password,
            self.max_retries,
        )
        .await
    }

    /// Confirm the user's identity through an external provider.
    pub async fn reauthenticate_with_provider(&self, provider: AuthProviderId) -> Result<()> {
        endpoints::reauthenticate_with_provider(
            &self.http,
            &self.base_url,
            self.auth_token()?,
            provider,
            self.max_retries,
        )
        .await
    }

    /// Set a new password.
    pub async fn update_password(&self, new_password: &SecretString) -> Result<()> {
        endpoints::update_password(
            &self.http,
            &self.base_url,
            self.auth_token()?,
            new_password,
            self.max_retries,
        )
        .await
    }

    /// Link email/password sign-in.
    pub async fn add_password_auth(&self, email: &str, password: &SecretString) -> Result<()> {
        endpoints::add_password_auth(
            &self.http,
            &self.base_url,
            self.auth_token()?,
            email,
            password,
            self.max_retries,
        )
        .await
    }

    /// Delete the login itself.
    pub async fn delete_login(&self) -> Result<()> {
        endpoints::delete_login(&self.http, &self.base_url, self.auth_token()?, self.max_retries)
            .await
    }
}
