//! Action handling for the TUI app.
//!
//! Responsibilities:
//! - Process Actions and mutate App state accordingly
//! - Bind popups on `ShowPopup` and advance fades on `Tick`
//! - Apply collaborator requests (loader, toasts, settings, account)
//!
//! Non-responsibilities:
//! - Does NOT perform async operations (see `runtime::side_effects`)
//! - Does NOT persist settings (the runtime saves after these actions)

use std::time::Duration;
use typist_config::{Settings, Theme};

use crate::action::Action;
use crate::app::App;
use crate::services::{AccountState, write_account};
use crate::ui::{Toast, ToastLevel};

impl App {
    /// Pure state mutation based on Action.
    pub fn update(&mut self, action: Action) {
        match action {
            Action::ShowPopup { id, parameters } => {
                if let Err(e) = self.engine.show(&mut self.registry, &id, parameters) {
                    self.toasts.push(Toast::error(e.to_string()));
                }
            }
            Action::HidePopup => self.engine.hide(),
            Action::Tick => {
                self.engine.tick();
                self.toasts.retain(|t| !t.is_expired());
                if self.loading {
                    self.spinner_frame = self.spinner_frame.wrapping_add(1);
                }
            }
            Action::Notify(level, message, ttl) => self.push_toast(level, message, ttl),
            Action::Loading(on) => {
                self.loading = on;
                if !on {
                    self.spinner_frame = 0;
                }
            }
            Action::ResetSettings => {
                self.settings = Settings::default();
                self.theme = Theme::from_color_theme(self.settings.color_theme);
                tracing::info!("Settings reset to defaults");
            }
            Action::SetFontFamily(family) => {
                tracing::info!(font_family = %family, "Font family changed");
                self.settings.font_family = family;
            }
            Action::AccountLoaded(Ok(state)) => {
                write_account(&self.account, |account| *account = state);
                self.clamp_selection();
            }
            Action::AccountLoaded(Err(e)) => {
                write_account(&self.account, |account| *account = AccountState::default());
                self.clamp_selection();
                self.toasts
                    .push(Toast::error(format!("Failed to load account: {e}")));
            }
            Action::Resize(..) => {}
            Action::Quit | Action::ReloadAccount | Action::Input(_) | Action::Mouse(_) => {}
        }
    }

    fn push_toast(&mut self, level: ToastLevel, message: String, ttl: Option<Duration>) {
        let toast = Toast::new(message, level);
        let toast = match ttl {
            Some(ttl) => toast.with_ttl(ttl),
            None => toast,
        };
        self.toasts.push(toast);
    }

    /// Keep the selection inside the row list after it changes length.
    pub(crate) fn clamp_selection(&mut self) {
        let len = self.rows().len();
        let selected = self.list_state.selected().unwrap_or(0);
        self.list_state
            .select((len > 0).then(|| selected.min(len - 1)));
    }
}
