// SPDX-License-Identifier: MPL-2.0
//! Light/dark theming.

use crate::ui::design_tokens::palette;
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Surface and text colors for one theme.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorScheme {
    pub page_background: Color,
    pub surface: Color,
    pub surface_border: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            page_background: palette::GRAY_50,
            surface: palette::WHITE,
            surface_border: palette::GRAY_200,
            text_primary: palette::GRAY_900,
            text_secondary: palette::GRAY_600,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            page_background: palette::GRAY_900,
            surface: palette::GRAY_800,
            surface_border: palette::GRAY_600,
            text_primary: palette::GRAY_50,
            text_secondary: palette::GRAY_300,
        }
    }

    /// Scheme matching the active iced theme.
    #[must_use]
    pub fn for_theme(theme: &Theme) -> Self {
        if theme.extended_palette().is_dark {
            Self::dark()
        } else {
            Self::light()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
    System,
}

impl ThemeMode {
    /// Returns true if the effective theme is dark.
    /// System mode asks the desktop and falls back to light on error.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => matches!(dark_light::detect(), Ok(dark_light::Mode::Dark)),
        }
    }

    #[must_use]
    pub fn iced_theme(self) -> Theme {
        if self.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_scheme_has_light_surface() {
        assert!(ColorScheme::light().surface.r > 0.9);
    }

    #[test]
    fn dark_scheme_has_dark_surface() {
        assert!(ColorScheme::dark().page_background.r < 0.2);
    }

    #[test]
    fn scheme_follows_iced_theme() {
        assert_eq!(ColorScheme::for_theme(&Theme::Light), ColorScheme::light());
        assert_eq!(ColorScheme::for_theme(&Theme::Dark), ColorScheme::dark());
    }

    #[test]
    fn theme_mode_is_dark_returns_correct_values() {
        assert!(!ThemeMode::Light.is_dark());
        assert!(ThemeMode::Dark.is_dark());
        assert_eq!(ThemeMode::Dark.iced_theme(), Theme::Dark);
        let _ = ThemeMode::System.is_dark();
    }

    #[test]
    fn theme_mode_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            mode: ThemeMode,
        }
        let wrapper: Wrapper = toml::from_str(r#"mode = "system""#).expect("parses");
        assert_eq!(wrapper.mode, ThemeMode::System);
    }
}
