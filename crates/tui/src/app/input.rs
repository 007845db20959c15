//! Keyboard handling for the TUI app.
//!
//! The popup surface sees every key first. Only keys it reports as ignored
//! (surface hidden) reach the settings page.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::action::Action;
use crate::app::App;
use crate::popup::dispatch_key;
use crate::ui::Toast;

impl App {
    /// Handle a key press - returns Action if one should be dispatched.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Some(Action::Quit);
        }

        match dispatch_key(&mut self.engine, &self.registry, key) {
            Ok(outcome) if outcome.is_ignored() => {}
            Ok(_) => return None,
            Err(e) => {
                self.toasts.push(Toast::error(e.to_string()));
                return None;
            }
        }

        match key.code {
            KeyCode::Char('q') => Some(Action::Quit),
            KeyCode::Char('j') | KeyCode::Down => {
                self.select_offset(1);
                None
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.select_offset(-1);
                None
            }
            KeyCode::Home => {
                self.list_state.select(Some(0));
                None
            }
            KeyCode::End => {
                let last = self.rows().len().saturating_sub(1);
                self.list_state.select(Some(last));
                None
            }
            KeyCode::Char('r') => Some(Action::ReloadAccount),
            KeyCode::Enter => self.selected_row().map(|row| row.action()),
            _ => None,
        }
    }

    /// Move the row selection by `delta`, clamped to the list.
    pub(crate) fn select_offset(&mut self, delta: isize) {
        let len = self.rows().len();
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let current = self.list_state.selected().unwrap_or(0) as isize;
        let next = (current + delta).clamp(0, len as isize - 1) as usize;
        self.list_state.select(Some(next));
    }
}
