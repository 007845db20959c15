//! Popup engine: one shared modal surface driven by declarative definitions.
//!
//! - `definition`: what a popup is (inputs, labels, hooks).
//! - `registry`: id to definition lookup, built once at startup.
//! - `form`: input specs turned into editable fields and back into values.
//! - `engine`: the surface state machine (show, hide, confirm, fades).
//! - `dispatch`: keys and clicks routed to the bound popup.
//! - `render`: drawing the backdrop and dialog.
//! - `definitions`: the account and settings popups.

pub mod definition;
pub mod definitions;
pub mod dispatch;
pub mod engine;
pub mod error;
pub mod form;
pub mod registry;
pub mod render;

pub use definition::{
    BeforeShowFn, ExecFn, InputSpec, InputType, PopupDefinition, PopupDefinitionBuilder,
    PopupInvocation, PopupKind,
};
pub use dispatch::{Dispatch, dispatch_key, dispatch_mouse};
pub use engine::{BoundSurface, PopupEngine, SurfaceLayout, SurfaceState};
pub use error::PopupError;
pub use form::{FieldType, Form, FormField, NUMERIC_MIN};
pub use registry::PopupRegistry;
pub use render::render_popup;
