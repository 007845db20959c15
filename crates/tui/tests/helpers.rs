//! Test helpers for TUI testing.
//!
//! Key and mouse event constructors, plus fixtures for building popup
//! services against a mock account service.

#![allow(dead_code)]

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use secrecy::SecretString;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tokio::sync::mpsc::{Receiver, channel};
use typist_client::{AccountClient, AuthProviderId, AuthUser, UserSnapshot};
use typist_tui::action::Action;
use typist_tui::services::{AccountState, PopupServices};

/// Create a character key event.
pub fn key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE)
}

/// Create an Enter key event.
pub fn enter_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)
}

/// Create an Escape key event.
pub fn esc_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)
}

/// Create a Tab key event.
pub fn tab_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)
}

/// Create a Shift+Tab key event.
pub fn backtab_key() -> KeyEvent {
    KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT)
}

/// Create a Down arrow key event.
pub fn down_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Down, KeyModifiers::NONE)
}

/// Create an Up arrow key event.
pub fn up_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Up, KeyModifiers::NONE)
}

/// Create a Backspace key event.
pub fn backspace_key() -> KeyEvent {
    KeyEvent::new(KeyCode::Backspace, KeyModifiers::NONE)
}

/// Create a Ctrl+char key event.
pub fn ctrl_key(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Type every character of `text`.
pub fn type_text(text: &str) -> Vec<KeyEvent> {
    text.chars().map(key).collect()
}

/// Left mouse-down at the given cell.
pub fn left_click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

/// A signed-in account whose primary provider is `provider`.
pub fn account_with(provider: AuthProviderId) -> AccountState {
    let mut providers = vec![provider];
    if provider != AuthProviderId::Password {
        providers.push(AuthProviderId::Unknown);
    }
    AccountState {
        auth: Some(AuthUser {
            uid: "uid-1".to_string(),
            email: "alice@example.com".to_string(),
            providers,
        }),
        profile: Some(UserSnapshot {
            name: "alice".to_string(),
            email: "alice@example.com".to_string(),
            ..UserSnapshot::default()
        }),
    }
}

/// Services backed by a client pointed at `base_url`, plus the receiving
/// end of their action channel.
pub fn services_for(base_url: &str, state: AccountState) -> (PopupServices, Receiver<Action>) {
    let client = AccountClient::builder()
        .base_url(base_url.to_string())
        .api_token(SecretString::new("test-token".into()))
        .timeout(Duration::from_secs(5))
        .max_retries(0)
        .build()
        .expect("client builds");
    let (tx, rx) = channel(64);
    let services = PopupServices::new(Arc::new(client), Arc::new(RwLock::new(state)), tx);
    (services, rx)
}

/// Drain every action currently queued.
pub fn drain(rx: &mut Receiver<Action>) -> Vec<Action> {
    let mut actions = Vec::new();
    while let Ok(action) = rx.try_recv() {
        actions.push(action);
    }
    actions
}

/// Messages of all `Notify` actions, in order.
pub fn toasts(actions: &[Action]) -> Vec<String> {
    actions
        .iter()
        .filter_map(|a| match a {
            Action::Notify(_, message, _) => Some(message.clone()),
            _ => None,
        })
        .collect()
}
