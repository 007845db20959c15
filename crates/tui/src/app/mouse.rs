//! Mouse event handling for the TUI app.
//!
//! Responsibilities:
//! - Route mouse events to the popup surface first
//! - Select and open rows on the settings page
//!
//! Does NOT handle:
//! - Keyboard input
//! - Rendering

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;

use crate::action::Action;
use crate::app::App;
use crate::popup::dispatch_mouse;
use crate::ui::Toast;

impl App {
    /// Handle mouse input - returns Action if one should be dispatched.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<Action> {
        match dispatch_mouse(&mut self.engine, &self.registry, mouse) {
            Ok(outcome) if outcome.is_ignored() => {}
            Ok(_) => return None,
            Err(e) => {
                self.toasts.push(Toast::error(e.to_string()));
                return None;
            }
        }

        match mouse.kind {
            MouseEventKind::ScrollDown => {
                self.select_offset(1);
                None
            }
            MouseEventKind::ScrollUp => {
                self.select_offset(-1);
                None
            }
            MouseEventKind::Down(MouseButton::Left) => self.handle_list_click(mouse),
            _ => None,
        }
    }

    /// A click on a row selects it and opens its popup.
    fn handle_list_click(&mut self, mouse: MouseEvent) -> Option<Action> {
        let area = self.list_area;
        if !area.contains(Position::new(mouse.column, mouse.row)) {
            return None;
        }
        // First row sits below the list border.
        let row = mouse.row.checked_sub(area.y + 1)? as usize + self.list_state.offset();
        let rows = self.rows();
        let target = rows.get(row)?;
        self.list_state.select(Some(row));
        Some(target.action())
    }
}
