// SPDX-License-Identifier: MPL-2.0
//! Light/dark theming for the demo window.
//!
//! Badges keep their own colors in every mode; only the surrounding
//! window, titles and buttons follow the theme.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ColorScheme {
    // Surfaces
    pub window: Color,
    pub tab_bar: Color,

    // Text
    pub title: Color,
    pub caption: Color,

    // Buttons
    pub brand_primary: Color,
    pub brand_secondary: Color,
    pub brand_hover: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            window: palette::WINDOW,
            tab_bar: palette::TAB_BAR,

            title: palette::WHITE,
            caption: palette::GRAY_100,

            brand_primary: palette::PRIMARY_500,
            brand_secondary: palette::PRIMARY_600,
            brand_hover: palette::PRIMARY_400,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            window: palette::WINDOW_DARK,
            tab_bar: palette::TAB_BAR_DARK,

            title: palette::WHITE,
            caption: palette::GRAY_100,

            brand_primary: palette::PRIMARY_600,
            brand_secondary: palette::GRAY_900,
            brand_hover: palette::PRIMARY_500,
        }
    }

    /// Detects the system theme and returns the matching scheme.
    #[must_use]
    pub fn from_system() -> Self {
        if ThemeMode::System.is_dark() {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

/// Theme configuration for the whole demo.
#[derive(Debug, Clone)]
pub struct AppTheme {
    pub colors: ColorScheme,
    pub mode: ThemeMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// For System mode, detects the actual system theme.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            // Light is the fallback when detection fails; the demo window is light-first.
            ThemeMode::System => matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)),
        }
    }

    /// The Iced built-in theme for this mode.
    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

impl AppTheme {
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        let colors = match mode {
            ThemeMode::Light => ColorScheme::light(),
            ThemeMode::Dark => ColorScheme::dark(),
            ThemeMode::System => ColorScheme::from_system(),
        };

        Self { colors, mode }
    }
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}
