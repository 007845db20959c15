//! Account service client.
//!
//! This crate provides a typed client for the remote account/results service
//! and its authentication provider. Account endpoints return
//! [`ApiResponse`] values carrying the HTTP status so callers can decide how
//! to surface failures; auth endpoints turn rejections into
//! [`ClientError::Auth`].

pub mod client;
pub mod endpoints;
pub mod error;
pub mod models;

pub use client::AccountClient;
pub use client::builder::AccountClientBuilder;
pub use endpoints::url_encoding;
pub use error::{ClientError, Result, WRONG_PASSWORD_CODE};
pub use models::{
    ApiResponse, AuthProviderId, AuthUser, PersonalBest, PersonalBests, Tag, TagPbResult,
    UserSnapshot,
};
