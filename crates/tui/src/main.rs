//! Typist - account and settings console.
//!
//! Responsibilities:
//! - Orchestrate application startup and shutdown.
//! - Initialize logging, configuration, the account client and the terminal.
//! - Register the popups and run the main event loop.
//!
//! Does NOT handle:
//! - HTTP details (see `crates/client`).
//! - Configuration validation and settings storage (see `crates/config`).
//! - Popup behavior (see `typist_tui::popup`).
//!
//! Invariants:
//! - The TUI enters raw mode and alternate screen on startup.
//! - `load_dotenv()` is called at startup to support `.env` configuration.
//! - Configuration precedence: CLI args > env vars > defaults.
//! - Mouse capture is enabled by default unless `--no-mouse` is specified.
//! - Without a token the UI still starts; account rows stay hidden.

use anyhow::{Context, Result};
use clap::Parser;
use futures_util::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::sync::{Arc, RwLock};
use std::time::Duration;
use tokio::sync::mpsc::channel;
use tokio_util::task::TaskTracker;
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use typist_client::AccountClient;
use typist_config::constants::{DEFAULT_CHANNEL_CAPACITY, DEFAULT_UI_TICK_MS};
use typist_config::{ConfigLoader, Settings, SettingsManager};
use typist_tui::action::Action;
use typist_tui::app::App;
use typist_tui::cli::Cli;
use typist_tui::popup::{PopupEngine, PopupRegistry, definitions};
use typist_tui::runtime::side_effects::{handle_side_effects, persist_settings};
use typist_tui::runtime::terminal::TerminalGuard;
use typist_tui::services::{AccountState, PopupServices};
use typist_tui::ui::Toast;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    std::fs::create_dir_all(&cli.log_dir)?;
    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, "typist.log");
    let (non_blocking, _log_guard) = non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(non_blocking))
        .init();

    let mut loader = ConfigLoader::new().load_dotenv()?;
    if let Some(url) = &cli.base_url {
        loader = loader.with_base_url(url.clone());
    }
    if let Some(secs) = cli.timeout_secs {
        loader = loader.with_timeout(Duration::from_secs(secs));
    }
    if let Some(retries) = cli.max_retries {
        loader = loader.with_max_retries(retries);
    }
    let config = loader.from_env()?.build()?;
    tracing::info!(base_url = %config.base_url, signed_in = config.api_token.is_some(), "Configuration loaded");

    let client = Arc::new(
        AccountClient::builder()
            .from_config(&config)
            .build()
            .context("Failed to build account client")?,
    );

    let settings_manager = match &cli.settings_path {
        Some(path) => SettingsManager::with_path(path.clone()),
        None => SettingsManager::new()?,
    };
    let settings = if cli.fresh {
        tracing::info!("--fresh flag set, starting with default settings");
        Settings::default()
    } else {
        settings_manager.load()
    };

    let task_tracker = TaskTracker::new();
    let account = Arc::new(RwLock::new(AccountState::default()));
    let (tx, mut rx) = channel::<Action>(DEFAULT_CHANNEL_CAPACITY);

    let services = PopupServices::new(client.clone(), account.clone(), tx.clone());
    let mut registry = PopupRegistry::new();
    definitions::register_all(&mut registry, &services)?;
    let engine = PopupEngine::new().with_task_tracker(task_tracker.clone());

    let terminal_guard = TerminalGuard::enter(cli.no_mouse)?;
    let backend = CrosstermBackend::new(std::io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let tx_input = tx.clone();
    task_tracker.spawn(async move {
        use crossterm::event::{Event, EventStream, KeyEventKind};
        use tokio::sync::mpsc::error::TrySendError;

        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            let action = match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => Action::Input(key),
                Event::Mouse(mouse) => {
                    // Mouse moves are frequent; drop them rather than block.
                    match tx_input.try_send(Action::Mouse(mouse)) {
                        Ok(()) => continue,
                        Err(TrySendError::Full(_)) => {
                            tracing::debug!("Input channel full, dropping mouse event");
                            continue;
                        }
                        Err(TrySendError::Closed(_)) => break,
                    }
                }
                Event::Resize(width, height) => Action::Resize(width, height),
                _ => continue,
            };
            if tx_input.send(action).await.is_err() {
                break;
            }
        }
    });

    let mut app = App::new(registry, engine, settings, account);

    if client.is_signed_in() {
        let _ = tx.send(Action::ReloadAccount).await;
    } else {
        app.toasts.push(Toast::warning(
            "No API token configured; account actions are unavailable",
        ));
    }

    let mut tick_interval = tokio::time::interval(Duration::from_millis(DEFAULT_UI_TICK_MS));

    loop {
        terminal.draw(|f| app.render(f))?;

        tokio::select! {
            Some(action) = rx.recv() => {
                tracing::debug!(?action, "Handling action");

                let action = match action {
                    Action::Input(key) => app.handle_input(key),
                    Action::Mouse(mouse) => app.handle_mouse(mouse),
                    other => Some(other),
                };
                let Some(action) = action else {
                    continue;
                };

                if matches!(action, Action::Quit) {
                    break;
                }

                app.update(action.clone());

                if action.persists_settings() {
                    persist_settings(&settings_manager, app.settings.clone(), &task_tracker, tx.clone());
                }
                handle_side_effects(action, client.clone(), tx.clone(), task_tracker.clone()).await;
            }
            _ = tick_interval.tick() => {
                app.update(Action::Tick);
            }
        }
    }

    // Input reader never finishes on its own; dropping the receiver lets it exit
    // on its next send.
    drop(rx);
    task_tracker.close();
    let _ = tokio::time::timeout(Duration::from_secs(2), task_tracker.wait()).await;

    drop(terminal);
    drop(terminal_guard);
    Ok(())
}
