//! Command-line argument parsing for typist.
//!
//! Responsibilities:
//! - Define CLI argument structure using clap derive macros.
//! - Provide parsed CLI arguments to the main application.
//!
//! Does NOT handle:
//! - Configuration validation (see `typist_config::ConfigLoader`).
//! - Terminal state management (see `runtime::terminal`).
//!
//! Invariants:
//! - The API token is never accepted as a flag; it comes from the
//!   environment or `.env` only, so it does not show up in process listings.

use clap::Parser;
use std::path::PathBuf;

/// Command-line arguments for typist.
///
/// Configuration precedence (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables (`TYPIST_*`, including values from `.env`)
/// 3. Default values
#[derive(Debug, Parser)]
#[command(
    name = "typist",
    about = "Account and settings console for the typing service",
    version,
    after_help = "Examples:\n  typist\n  typist --base-url https://api.example.com\n  typist --log-dir /var/log/typist --no-mouse\n  typist --fresh\n"
)]
pub struct Cli {
    /// Base URL of the account service
    #[arg(long)]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,

    /// Retries for rate-limited requests
    #[arg(long)]
    pub max_retries: Option<usize>,

    /// Path to a custom settings file
    #[arg(long, env = "TYPIST_SETTINGS_PATH")]
    pub settings_path: Option<PathBuf>,

    /// Directory for log files
    #[arg(long, default_value = "logs")]
    pub log_dir: PathBuf,

    /// Disable mouse support
    #[arg(long)]
    pub no_mouse: bool,

    /// Start with default settings, ignoring the saved file
    #[arg(long)]
    pub fresh: bool,
}
