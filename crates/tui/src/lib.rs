//! Typist TUI library.
//!
//! The popup engine and its account and settings popups, the settings page
//! that triggers them, and the runtime pieces the binary wires together.
//!
//! # Example
//!
//! ```rust
//! use typist_tui::popup::{InputSpec, PopupDefinition, PopupEngine, PopupRegistry};
//!
//! let mut registry = PopupRegistry::new();
//! registry
//!     .register(
//!         PopupDefinition::builder("demo")
//!             .title("Demo")
//!             .input(InputSpec::new("Name"))
//!             .button_text("Go")
//!             .build(),
//!     )
//!     .unwrap();
//!
//! let mut engine = PopupEngine::new();
//! engine.show(&mut registry, "demo", vec![]).unwrap();
//! assert_eq!(engine.active_id(), Some("demo"));
//! ```

pub mod action;
pub mod app;
pub mod cli;
pub mod popup;
pub mod runtime;
pub mod services;
pub mod ui;

pub use action::Action;
pub use app::{App, FOOTER_HEIGHT, HEADER_HEIGHT};
pub use popup::{PopupDefinition, PopupEngine, PopupError, PopupRegistry};
pub use services::{AccountState, PopupServices, SharedAccount};
pub use ui::toast::{Toast, ToastLevel};
