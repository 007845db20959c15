//! Configuration management for Typist.
//!
//! This crate provides the workspace constants, the color theme, the service
//! connection loader (environment + `.env`) and persisted user settings.

pub mod constants;
mod error;
mod loader;
pub mod settings;
pub mod theme;

pub use error::ConfigError;
pub use loader::{
    ConfigLoader, ENV_API_TOKEN, ENV_BASE_URL, ENV_MAX_RETRIES, ENV_TIMEOUT_SECS, ServiceConfig,
    env_var_or_none,
};
pub use settings::{Settings, SettingsManager};
pub use theme::{ColorTheme, Theme};
