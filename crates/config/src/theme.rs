//! Color themes.
//!
//! `ColorTheme` is what the settings file stores; `Theme` is the palette the
//! TUI draws with. Only `ColorTheme` is serialized.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// User-selectable color theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColorTheme {
    /// Dark gray with a yellow caret accent.
    #[default]
    Default,
    Light,
    Dark,
    HighContrast,
}

impl ColorTheme {
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Default => "Default",
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::HighContrast => "High Contrast",
        }
    }
}

impl fmt::Display for ColorTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Runtime palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub title: Color,
    /// Focused field border and caret-colored highlights.
    pub accent: Color,
    pub highlight_fg: Color,
    pub highlight_bg: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    /// Fill behind the popup dialog.
    pub backdrop: Color,
}

impl Theme {
    pub fn from_color_theme(theme: ColorTheme) -> Self {
        match theme {
            ColorTheme::Default => Self {
                background: Color::Rgb(0x32, 0x34, 0x37),
                text: Color::Rgb(0xd1, 0xd0, 0xc5),
                text_dim: Color::Rgb(0x64, 0x66, 0x69),
                border: Color::Rgb(0x64, 0x66, 0x69),
                title: Color::Rgb(0xe2, 0xb7, 0x14),
                accent: Color::Rgb(0xe2, 0xb7, 0x14),
                highlight_fg: Color::Rgb(0x32, 0x34, 0x37),
                highlight_bg: Color::Rgb(0xe2, 0xb7, 0x14),
                success: Color::Rgb(0x8f, 0xbc, 0x6f),
                warning: Color::Rgb(0xe2, 0xb7, 0x14),
                error: Color::Rgb(0xca, 0x47, 0x54),
                info: Color::Rgb(0xd1, 0xd0, 0xc5),
                backdrop: Color::Rgb(0x1e, 0x1f, 0x21),
            },
            ColorTheme::Light => Self {
                background: Color::Rgb(0xee, 0xeb, 0xe2),
                text: Color::Rgb(0x08, 0x09, 0x09),
                text_dim: Color::Rgb(0x99, 0x94, 0x7f),
                border: Color::Rgb(0x99, 0x94, 0x7f),
                title: Color::Rgb(0x08, 0x09, 0x09),
                accent: Color::Rgb(0x2c, 0x6f, 0xb5),
                highlight_fg: Color::Rgb(0xee, 0xeb, 0xe2),
                highlight_bg: Color::Rgb(0x08, 0x09, 0x09),
                success: Color::Rgb(0x3a, 0x8a, 0x3a),
                warning: Color::Rgb(0xb5, 0x7a, 0x00),
                error: Color::Rgb(0xc8, 0x37, 0x37),
                info: Color::Rgb(0x2c, 0x6f, 0xb5),
                backdrop: Color::Rgb(0xc9, 0xc5, 0xb8),
            },
            ColorTheme::Dark => Self {
                background: Color::Rgb(0x11, 0x11, 0x11),
                text: Color::Rgb(0xee, 0xee, 0xee),
                text_dim: Color::Rgb(0x44, 0x44, 0x44),
                border: Color::Rgb(0x44, 0x44, 0x44),
                title: Color::Rgb(0xee, 0xee, 0xee),
                accent: Color::Rgb(0xee, 0xee, 0xee),
                highlight_fg: Color::Rgb(0x11, 0x11, 0x11),
                highlight_bg: Color::Rgb(0xee, 0xee, 0xee),
                success: Color::Rgb(0x7f, 0xc9, 0x7f),
                warning: Color::Rgb(0xd9, 0xb3, 0x4c),
                error: Color::Rgb(0xda, 0x33, 0x33),
                info: Color::Rgb(0x9a, 0xb8, 0xd9),
                backdrop: Color::Black,
            },
            ColorTheme::HighContrast => Self {
                background: Color::Black,
                text: Color::White,
                text_dim: Color::Gray,
                border: Color::White,
                title: Color::White,
                accent: Color::Yellow,
                highlight_fg: Color::Black,
                highlight_bg: Color::Yellow,
                success: Color::LightGreen,
                warning: Color::Yellow,
                error: Color::LightRed,
                info: Color::LightCyan,
                backdrop: Color::Black,
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_color_theme(ColorTheme::Default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_theme_serializes_snake_case() {
        let json = serde_json::to_string(&ColorTheme::HighContrast).unwrap();
        assert_eq!(json, "\"high_contrast\"");
        let back: ColorTheme = serde_json::from_str("\"dark\"").unwrap();
        assert_eq!(back, ColorTheme::Dark);
    }

    #[test]
    fn test_backdrop_differs_from_dialog_background() {
        for theme in [ColorTheme::Default, ColorTheme::Light, ColorTheme::Dark] {
            let palette = Theme::from_color_theme(theme);
            assert_ne!(palette.backdrop, palette.background, "{theme}");
        }
    }
}
