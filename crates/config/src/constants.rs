//! Centralized constants for the Typist workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of retries for rate-limited requests.
pub const DEFAULT_MAX_RETRIES: usize = 3;

/// Maximum allowed retry count.
pub const MAX_MAX_RETRIES: usize = 10;

/// Base URL used when neither the environment nor the CLI supplies one.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5005";

// =============================================================================
// TUI/UI Defaults
// =============================================================================

/// Default channel capacity for action messages.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Default UI tick interval in milliseconds.
///
/// Kept well below [`POPUP_FADE_MS`] so fade transitions complete promptly.
pub const DEFAULT_UI_TICK_MS: u64 = 25;

/// Duration of the popup fade-in and fade-out transitions in milliseconds.
pub const POPUP_FADE_MS: u64 = 125;

// =============================================================================
// Account Flow Timings
// =============================================================================

/// Delay before the account is reloaded after a credential change.
pub const ACCOUNT_RELOAD_DELAY_MS: u64 = 1000;

/// Delay before the account is reloaded after account deletion.
pub const ACCOUNT_DELETED_RELOAD_DELAY_MS: u64 = 3000;

/// How long the farewell toast stays up after account deletion.
pub const GOODBYE_TOAST_SECS: u64 = 5;

// =============================================================================
// Settings Defaults
// =============================================================================

/// Font family applied when settings are reset.
pub const DEFAULT_FONT_FAMILY: &str = "Roboto_Mono";

/// Default font size step.
pub const DEFAULT_FONT_SIZE: u8 = 2;

/// Smallest selectable font size step.
pub const MIN_FONT_SIZE: u8 = 1;

/// Largest selectable font size step.
pub const MAX_FONT_SIZE: u8 = 4;
