//! Routes key and mouse input to the popup surface.
//!
//! Responsibilities:
//! - Enter confirms, Esc hides, Tab/BackTab cycle focus, other keys edit.
//! - Left mouse-down on the backdrop hides, on the button confirms, on a
//!   field focuses it.
//!
//! Does NOT handle:
//! - Anything while the surface is hidden. Input is reported as `Ignored`
//!   so the host screen can process it.
//!
//! Invariants:
//! - While the surface is not hidden every key is consumed (modal).
//! - A surface without a confirm control can never be confirmed from here.
//! - Targets are resolved against the engine's bound state at event time,
//!   never against a definition captured earlier.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Position;
use tracing::debug;

use crate::popup::engine::PopupEngine;
use crate::popup::error::PopupError;
use crate::popup::registry::PopupRegistry;

/// Outcome of routing one input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
    /// Surface hidden, the host should handle the event.
    Ignored,
    /// Handled by the surface with no lifecycle change.
    Consumed,
    /// The bound definition's confirm handler was started.
    Confirmed,
    /// The surface started hiding without confirming.
    Dismissed,
}

impl Dispatch {
    pub fn is_ignored(self) -> bool {
        self == Self::Ignored
    }
}

/// Route a key press to the popup surface.
///
/// # Errors
///
/// Propagates `PopupError` from `confirm` when the bound id is no longer
/// registered. The hide has already started in that case.
pub fn dispatch_key(
    engine: &mut PopupEngine,
    registry: &PopupRegistry,
    key: KeyEvent,
) -> Result<Dispatch, PopupError> {
    if engine.state().is_hidden() {
        return Ok(Dispatch::Ignored);
    }

    match key.code {
        KeyCode::Esc => {
            engine.hide();
            Ok(Dispatch::Dismissed)
        }
        KeyCode::Enter => try_confirm(engine, registry),
        KeyCode::Tab => {
            if let Some(form) = engine.form_mut() {
                form.focus_next();
            }
            Ok(Dispatch::Consumed)
        }
        KeyCode::BackTab => {
            if let Some(form) = engine.form_mut() {
                form.focus_prev();
            }
            Ok(Dispatch::Consumed)
        }
        _ => {
            if let Some(form) = engine.form_mut() {
                form.handle_key(key);
            }
            Ok(Dispatch::Consumed)
        }
    }
}

/// Route a mouse event to the popup surface.
///
/// Only left-button presses act. Before the first draw there is no layout to
/// hit-test, so presses are consumed without effect.
///
/// # Errors
///
/// Same as [`dispatch_key`].
pub fn dispatch_mouse(
    engine: &mut PopupEngine,
    registry: &PopupRegistry,
    mouse: MouseEvent,
) -> Result<Dispatch, PopupError> {
    if engine.state().is_hidden() {
        return Ok(Dispatch::Ignored);
    }
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return Ok(Dispatch::Consumed);
    }
    let Some(layout) = engine.layout().cloned() else {
        return Ok(Dispatch::Consumed);
    };

    let pos = Position::new(mouse.column, mouse.row);

    if !layout.dialog.contains(pos) {
        debug!(column = mouse.column, row = mouse.row, "Backdrop clicked");
        engine.hide();
        return Ok(Dispatch::Dismissed);
    }

    if let Some(button) = layout.button
        && button.contains(pos)
    {
        return try_confirm(engine, registry);
    }

    if let Some(index) = layout.fields.iter().position(|rect| rect.contains(pos))
        && let Some(form) = engine.form_mut()
    {
        form.focus(index);
    }
    Ok(Dispatch::Consumed)
}

fn try_confirm(
    engine: &mut PopupEngine,
    registry: &PopupRegistry,
) -> Result<Dispatch, PopupError> {
    let has_confirm = engine.surface().is_some_and(|s| s.has_confirm());
    if !engine.state().accepts_confirm() || !has_confirm {
        return Ok(Dispatch::Consumed);
    }
    engine.confirm(registry)?;
    Ok(Dispatch::Confirmed)
}
