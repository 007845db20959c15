//! Error type for popup engine operations.
//!
//! Only engine-level conditions live here. Failures inside confirm handlers
//! (validation, service errors) are handled by the handlers themselves and
//! surfaced as notifications.

use thiserror::Error;

/// Errors returned by the popup registry and engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PopupError {
    /// No definition is registered under the requested id.
    #[error("Popup '{0}' is not registered")]
    NotFound(String),

    /// A definition with this id was already registered.
    #[error("Popup '{0}' is already registered")]
    DuplicateId(String),

    /// Confirm was requested while no definition is bound to the surface.
    #[error("No popup is currently shown")]
    NoActivePopup,
}
