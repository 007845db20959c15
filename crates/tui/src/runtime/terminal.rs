//! Terminal setup and restoration.
//!
//! Responsibilities:
//! - Enter raw mode and the alternate screen, optionally capturing the mouse.
//! - Restore the terminal when the guard drops.
//!
//! Invariants:
//! - Only one guard exists per session, created before the first draw.
//! - Drop never panics.

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io;

/// Owns the terminal modes entered at startup and undoes them on drop.
pub struct TerminalGuard {
    mouse_captured: bool,
}

impl TerminalGuard {
    /// Enter raw mode and the alternate screen.
    ///
    /// Mouse capture is enabled unless `no_mouse` is set. If entering the
    /// alternate screen fails, raw mode is left again before returning.
    pub fn enter(no_mouse: bool) -> io::Result<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        let entered = if no_mouse {
            execute!(stdout, EnterAlternateScreen)
        } else {
            execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        };
        if let Err(e) = entered {
            let _ = disable_raw_mode();
            return Err(e);
        }
        tracing::debug!(mouse = !no_mouse, "Terminal entered alternate screen");
        Ok(Self {
            mouse_captured: !no_mouse,
        })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let mut stdout = io::stdout();
        if self.mouse_captured {
            let _ = execute!(stdout, LeaveAlternateScreen, DisableMouseCapture);
        } else {
            let _ = execute!(stdout, LeaveAlternateScreen);
        }
    }
}
