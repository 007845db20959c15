//! Toast notifications for transient feedback messages.
//!
//! Toasts stack in the bottom-right corner above the footer. Each toast has a
//! unique id, a severity level and an expiry (TTL). Popup handlers raise them
//! through `Action::Notify`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};
use std::time::{Duration, Instant};
use typist_config::Theme;
use uuid::Uuid;

use crate::app::{FOOTER_HEIGHT, HEADER_HEIGHT};

/// Severity level for toast notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    /// Neutral message
    Info,
    /// Success message
    Success,
    /// Warning message
    Warning,
    /// Error message
    Error,
}

impl ToastLevel {
    /// Returns the display label for this level.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Info => "INFO",
            Self::Success => "OK",
            Self::Warning => "WARN",
            Self::Error => "ERR",
        }
    }

    /// Returns the default TTL (time-to-live) for this level.
    pub fn ttl(&self) -> Duration {
        match self {
            Self::Info | Self::Success | Self::Warning => Duration::from_secs(5),
            Self::Error => Duration::from_secs(10),
        }
    }

    /// Map a numeric severity: negative is an error, zero is neutral and
    /// positive is a success.
    pub fn from_severity(severity: i32) -> Self {
        match severity.signum() {
            -1 => Self::Error,
            0 => Self::Info,
            _ => Self::Success,
        }
    }
}

/// A single toast notification.
#[derive(Debug, Clone)]
pub struct Toast {
    /// Unique identifier for this toast
    pub id: Uuid,
    /// The message to display
    pub message: String,
    /// Severity level
    pub level: ToastLevel,
    /// When this toast was created
    pub created_at: Instant,
    /// Time-to-live before auto-expiry
    pub ttl: Duration,
}

impl Toast {
    /// Creates a new toast with the level's default TTL.
    pub fn new(message: String, level: ToastLevel) -> Self {
        let ttl = level.ttl();
        Self {
            id: Uuid::new_v4(),
            message,
            level,
            created_at: Instant::now(),
            ttl,
        }
    }

    /// Override the TTL.
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Returns true if this toast has expired (TTL elapsed).
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.ttl
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Info)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Success)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Warning)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message.into(), ToastLevel::Error)
    }
}

/// Maximum number of toasts to display at once (prevents screen overflow).
const MAX_TOASTS: usize = 5;

/// Height of one toast including borders.
const TOAST_HEIGHT: u16 = 4;

const TOAST_WIDTH: u16 = 48;

/// Renders all active toasts in the bottom-right corner.
///
/// Toasts are stacked vertically with the most recent at the bottom.
/// Expired toasts are skipped and at most `MAX_TOASTS` are drawn.
pub fn render_toasts(f: &mut Frame, toasts: &[Toast], theme: &Theme) {
    let active: Vec<_> = toasts.iter().filter(|t| !t.is_expired()).collect();
    if active.is_empty() {
        return;
    }

    let skip = active.len().saturating_sub(MAX_TOASTS);
    let active = &active[skip..];

    let total_height = active.len() as u16 * TOAST_HEIGHT;
    let area = f.area();
    if area.height < HEADER_HEIGHT + FOOTER_HEIGHT + total_height + 2
        || area.width < TOAST_WIDTH + 2
    {
        return;
    }

    let toast_area = Rect {
        x: area.width.saturating_sub(TOAST_WIDTH + 2),
        y: area.height.saturating_sub(FOOTER_HEIGHT + total_height + 1),
        width: TOAST_WIDTH,
        height: total_height,
    };

    let chunks = Layout::vertical(std::iter::repeat_n(
        Constraint::Length(TOAST_HEIGHT),
        active.len(),
    ))
    .split(toast_area);

    for (toast, chunk) in active.iter().zip(chunks.iter()) {
        render_single_toast(f, toast, *chunk, theme);
    }
}

fn render_single_toast(f: &mut Frame, toast: &Toast, area: Rect, theme: &Theme) {
    let color = match toast.level {
        ToastLevel::Info => theme.info,
        ToastLevel::Success => theme.success,
        ToastLevel::Warning => theme.warning,
        ToastLevel::Error => theme.error,
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", toast.level.label()),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(toast.message.as_str(), Style::default().fg(theme.text)),
    ]);

    let paragraph = Paragraph::new(line)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        )
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Left);

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toast_expiration() {
        let toast = Toast::info("Test message");
        assert!(!toast.is_expired());

        let mut expired = Toast::info("Test");
        expired.ttl = Duration::from_millis(1);
        expired.created_at = Instant::now() - Duration::from_secs(1);
        assert!(expired.is_expired());
    }

    #[test]
    fn test_toast_level_ttl() {
        assert_eq!(ToastLevel::Info.ttl(), Duration::from_secs(5));
        assert_eq!(ToastLevel::Success.ttl(), Duration::from_secs(5));
        assert_eq!(ToastLevel::Error.ttl(), Duration::from_secs(10));
    }

    #[test]
    fn test_with_ttl_overrides_level_default() {
        let toast = Toast::success("Goodbye").with_ttl(Duration::from_secs(2));
        assert_eq!(toast.ttl, Duration::from_secs(2));
    }

    #[test]
    fn test_from_severity() {
        assert_eq!(ToastLevel::from_severity(-1), ToastLevel::Error);
        assert_eq!(ToastLevel::from_severity(-7), ToastLevel::Error);
        assert_eq!(ToastLevel::from_severity(0), ToastLevel::Info);
        assert_eq!(ToastLevel::from_severity(1), ToastLevel::Success);
    }

    #[test]
    fn test_toast_unique_ids() {
        assert_ne!(Toast::info("a").id, Toast::info("b").id);
    }
}
