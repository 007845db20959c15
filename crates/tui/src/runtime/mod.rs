//! Runtime components for the TUI application.
//!
//! - Terminal management (`TerminalGuard`)
//! - Async side effects: account reloads and settings persistence
//!
//! Does NOT handle:
//! - UI rendering or input handling (see `typist_tui::app`).
//! - Popup confirm handlers, which run on the popup engine's task tracker.
//!
//! Invariants:
//! - Side effects run in tracked tokio tasks so shutdown can wait for them.

pub mod side_effects;
pub mod terminal;
