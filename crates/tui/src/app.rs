//! Application state and rendering.
//!
//! The app is a single settings page: the signed-in profile, the current
//! settings and a list of rows that each open a popup. The popup engine
//! sits on top and takes all input while it is not hidden.
//!
//! The module is organized into submodules:
//! - `state`: layout constants and the settings-page rows
//! - `actions`: pure state mutation from `Action`s
//! - `input`: keyboard handling
//! - `mouse`: mouse handling
//! - `render`: drawing

pub mod state;

mod actions;
mod input;
mod mouse;
mod render;

pub use state::{FOOTER_HEIGHT, HEADER_HEIGHT, SettingsRow};

use ratatui::layout::Rect;
use ratatui::widgets::ListState;
use typist_config::{Settings, Theme};

use crate::popup::{PopupEngine, PopupRegistry};
use crate::services::{AccountState, SharedAccount, read_account};
use crate::ui::Toast;

/// Main application state.
pub struct App {
    pub registry: PopupRegistry,
    pub engine: PopupEngine,
    pub settings: Settings,
    pub theme: Theme,
    pub account: SharedAccount,
    pub toasts: Vec<Toast>,
    /// Loader visibility, driven by `Action::Loading`.
    pub loading: bool,
    pub spinner_frame: usize,
    pub list_state: ListState,
    /// Where the rows list was last drawn, for click hit-testing.
    pub list_area: Rect,
    pub last_area: Rect,
}

impl App {
    pub fn new(
        registry: PopupRegistry,
        engine: PopupEngine,
        settings: Settings,
        account: SharedAccount,
    ) -> Self {
        let theme = Theme::from_color_theme(settings.color_theme);
        let mut list_state = ListState::default();
        list_state.select(Some(0));
        Self {
            registry,
            engine,
            settings,
            theme,
            account,
            toasts: Vec::new(),
            loading: false,
            spinner_frame: 0,
            list_state,
            list_area: Rect::default(),
            last_area: Rect::default(),
        }
    }

    /// Snapshot of the shared account state.
    pub fn account_state(&self) -> AccountState {
        read_account(&self.account)
    }

    /// Rows of the settings page for the current account.
    pub fn rows(&self) -> Vec<SettingsRow> {
        SettingsRow::build(&self.account_state())
    }

    /// Index of the selected row, clamped to the current row count.
    pub fn selected_row(&self) -> Option<SettingsRow> {
        let rows = self.rows();
        let index = self.list_state.selected()?.min(rows.len().checked_sub(1)?);
        rows.into_iter().nth(index)
    }
}
