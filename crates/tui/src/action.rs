//! Action protocol for async TUI event handling.
//!
//! Actions represent user input, popup requests raised by the settings page,
//! and the collaborator effects popup handlers ask for (loader, toasts,
//! settings mutation, account reload). They flow through one bounded channel
//! into `App::update`, so handlers never touch UI state directly.

use crossterm::event::{KeyEvent, MouseEvent};
use std::sync::Arc;
use std::time::Duration;
use typist_client::ClientError;

use crate::services::AccountState;
use crate::ui::ToastLevel;

/// Unified action type for async TUI event handling.
#[derive(Debug, Clone)]
pub enum Action {
    // System
    /// Quit the application
    Quit,
    /// UI tick; drives popup fades and toast expiry
    Tick,
    /// Terminal resized
    Resize(u16, u16),

    // Input
    /// Raw keyboard input event
    Input(KeyEvent),
    /// Raw mouse input event
    Mouse(MouseEvent),

    // Popups
    /// Bind a registered popup to the surface
    ShowPopup { id: String, parameters: Vec<String> },
    /// Start hiding the popup surface
    HidePopup,

    // Collaborators
    /// Raise a toast, optionally overriding the level's default TTL
    Notify(ToastLevel, String, Option<Duration>),
    /// Toggle the loader
    Loading(bool),
    /// Restore default settings
    ResetSettings,
    /// Set the typing font family
    SetFontFamily(String),
    /// Refetch the signed-in identity and profile snapshot
    ReloadAccount,
    /// Result of `ReloadAccount`
    AccountLoaded(Result<AccountState, Arc<ClientError>>),
}

impl Action {
    /// Shorthand for `ShowPopup` without parameters.
    pub fn show_popup(id: impl Into<String>) -> Self {
        Self::ShowPopup {
            id: id.into(),
            parameters: Vec::new(),
        }
    }

    /// Whether the action changes persisted settings.
    pub fn persists_settings(&self) -> bool {
        matches!(self, Self::ResetSettings | Self::SetFontFamily(_))
    }
}
