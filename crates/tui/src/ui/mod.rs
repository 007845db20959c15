//! Shared UI widgets.
//!
//! The popup surface lives in `crate::popup`; this module holds the
//! notification toasts.

pub mod toast;

pub use toast::{Toast, ToastLevel};
