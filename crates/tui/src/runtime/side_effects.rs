//! Async side effect handlers for TUI actions.
//!
//! Responsibilities:
//! - Reload the signed-in identity and profile snapshot.
//! - Persist settings after they change.
//!
//! Does NOT handle:
//! - Direct application state modification (sends actions to do that).
//! - Popup confirm handlers (spawned by the popup engine).
//!
//! Invariants / Assumptions:
//! - Work is spawned on the shared `TaskTracker`.
//! - Results are always sent back via the action channel.
//! - Loading state is set before API calls and cleared after.

use std::sync::Arc;
use tokio::sync::mpsc::Sender;
use tokio_util::task::TaskTracker;
use typist_client::{AccountClient, ClientError};
use typist_config::{Settings, SettingsManager};

use crate::action::Action;
use crate::services::AccountState;
use crate::ui::ToastLevel;

/// Handle side effects (async API calls) for actions.
///
/// Actions without side effects are ignored.
pub async fn handle_side_effects(
    action: Action,
    client: Arc<AccountClient>,
    tx: Sender<Action>,
    task_tracker: TaskTracker,
) {
    if let Action::ReloadAccount = action {
        if !client.is_signed_in() {
            tracing::debug!("Skipping account reload, no token configured");
            let _ = tx.send(Action::AccountLoaded(Ok(AccountState::default()))).await;
            return;
        }
        let _ = tx.send(Action::Loading(true)).await;
        task_tracker.spawn(async move {
            let result = load_account(&client, &tx).await;
            match &result {
                Ok(state) => tracing::info!(
                    signed_in = state.is_signed_in(),
                    has_profile = state.profile.is_some(),
                    "Account reloaded"
                ),
                Err(e) => tracing::error!(error = %e, "Account reload failed"),
            }
            let _ = tx.send(Action::AccountLoaded(result.map_err(Arc::new))).await;
            let _ = tx.send(Action::Loading(false)).await;
        });
    }
}

/// Fetch the identity, then the profile snapshot.
///
/// A non-200 profile response keeps the identity and is reported as a
/// toast; the page then shows the account without profile details.
async fn load_account(
    client: &AccountClient,
    tx: &Sender<Action>,
) -> Result<AccountState, ClientError> {
    let auth = client.current_user().await?;
    let response = client.get_user().await?;
    let profile = if response.is_ok() {
        response.data
    } else {
        tracing::warn!(status = response.status, message = %response.message, "Profile fetch failed");
        let _ = tx
            .send(Action::Notify(
                ToastLevel::Error,
                format!("Failed to load profile: {}", response.message),
                None,
            ))
            .await;
        None
    };
    Ok(AccountState {
        auth: Some(auth),
        profile,
    })
}

/// Save settings in the background.
pub fn persist_settings(
    manager: &SettingsManager,
    settings: Settings,
    task_tracker: &TaskTracker,
    tx: Sender<Action>,
) {
    let manager = manager.clone();
    task_tracker.spawn(async move {
        let saved = tokio::task::spawn_blocking(move || manager.save(&settings)).await;
        let error = match saved {
            Ok(Ok(())) => return,
            Ok(Err(e)) => e.to_string(),
            Err(e) => e.to_string(),
        };
        tracing::error!(error = %error, "Failed to persist settings");
        let _ = tx
            .send(Action::Notify(
                ToastLevel::Error,
                format!("Failed to save settings: {error}"),
                None,
            ))
            .await;
    });
}
