//! Collaborators captured by popup confirm handlers.
//!
//! Responsibilities:
//! - Hold the account client, the shared account snapshot and the action
//!   sender used for loader, toast, settings and reload requests.
//! - Provide the shared reauthentication step and failure reporting.
//!
//! Does NOT handle:
//! - Rendering toasts or the loader (the app does, on receiving actions).
//!
//! Invariants:
//! - The snapshot lock is never held across an `.await`.
//! - A poisoned lock is recovered rather than propagated; the snapshot is
//!   plain data and stays usable.

use secrecy::SecretString;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;
use tokio::sync::mpsc::Sender;
use tracing::{debug, warn};
use typist_client::{AccountClient, AuthProviderId, AuthUser, ClientError, UserSnapshot};

use crate::action::Action;
use crate::ui::ToastLevel;

/// Signed-in identity plus the local profile snapshot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccountState {
    pub auth: Option<AuthUser>,
    pub profile: Option<UserSnapshot>,
}

impl AccountState {
    pub fn is_signed_in(&self) -> bool {
        self.auth.is_some()
    }

    /// Provider the account was created with.
    pub fn primary_provider(&self) -> Option<AuthProviderId> {
        self.auth.as_ref().and_then(AuthUser::primary_provider)
    }

    pub fn has_password(&self) -> bool {
        self.auth.as_ref().is_some_and(AuthUser::has_password)
    }
}

/// Account state shared between the app and handlers.
pub type SharedAccount = Arc<RwLock<AccountState>>;

/// Read the shared account, recovering from poisoning.
pub fn read_account(account: &SharedAccount) -> AccountState {
    account
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .clone()
}

/// Mutate the shared account, recovering from poisoning.
pub fn write_account<R>(account: &SharedAccount, f: impl FnOnce(&mut AccountState) -> R) -> R {
    let mut guard = account.write().unwrap_or_else(PoisonError::into_inner);
    f(&mut guard)
}

/// Injected capabilities for popup handlers.
#[derive(Debug, Clone)]
pub struct PopupServices {
    pub client: Arc<AccountClient>,
    pub account: SharedAccount,
    pub tx: Sender<Action>,
}

impl PopupServices {
    pub fn new(client: Arc<AccountClient>, account: SharedAccount, tx: Sender<Action>) -> Self {
        Self {
            client,
            account,
            tx,
        }
    }

    pub async fn send(&self, action: Action) {
        if self.tx.send(action).await.is_err() {
            debug!("Action channel closed, dropping handler action");
        }
    }

    pub async fn notify(&self, level: ToastLevel, message: impl Into<String>) {
        self.send(Action::Notify(level, message.into(), None)).await;
    }

    /// Toast with an explicit duration.
    pub async fn notify_for(&self, level: ToastLevel, message: impl Into<String>, ttl: Duration) {
        self.send(Action::Notify(level, message.into(), Some(ttl)))
            .await;
    }

    pub async fn loading(&self, on: bool) {
        self.send(Action::Loading(on)).await;
    }

    /// Request an account reload after `delay`, without blocking the caller.
    pub fn reload_after(&self, delay: Duration) {
        let tx = self.tx.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let _ = tx.send(Action::ReloadAccount).await;
        });
    }

    pub fn account(&self) -> AccountState {
        read_account(&self.account)
    }

    pub fn auth_user(&self) -> Option<AuthUser> {
        self.account().auth
    }

    /// Apply `f` to the profile snapshot if one is loaded.
    pub fn update_profile(&self, f: impl FnOnce(&mut UserSnapshot)) {
        write_account(&self.account, |state| {
            if let Some(profile) = state.profile.as_mut() {
                f(profile);
            }
        });
    }

    /// Reauthenticate the signed-in user before a sensitive change.
    ///
    /// Accounts created with a password reauthenticate with `password`;
    /// accounts created through an external provider go through that provider.
    ///
    /// # Errors
    ///
    /// `ClientError::NotSignedIn` without an identity, otherwise whatever the
    /// auth endpoint reports.
    pub async fn reauthenticate(&self, password: &str) -> Result<(), ClientError> {
        let user = self.auth_user().ok_or(ClientError::NotSignedIn)?;
        match user.primary_provider() {
            Some(AuthProviderId::Password) | None => {
                let secret = SecretString::new(password.into());
                self.client
                    .reauthenticate_with_password(&user.email, &secret)
                    .await
            }
            Some(provider) => self.client.reauthenticate_with_provider(provider).await,
        }
    }

    /// Reauthenticate with the password provider regardless of the primary one.
    pub async fn reauthenticate_with_password(&self, password: &str) -> Result<(), ClientError> {
        let user = self.auth_user().ok_or(ClientError::NotSignedIn)?;
        let secret = SecretString::new(password.into());
        self.client
            .reauthenticate_with_password(&user.email, &secret)
            .await
    }

    /// Report a collaborator failure as an error toast.
    pub async fn report_failure(&self, error: &ClientError) {
        let message = if error.is_wrong_password() {
            "Incorrect password".to_string()
        } else {
            format!("Something went wrong: {error}")
        };
        warn!(error = %error, "Popup handler failed");
        self.notify(ToastLevel::Error, message).await;
    }
}
