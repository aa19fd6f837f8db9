// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{border, palette, radius, shadow};
use crate::ui::theming::ColorScheme;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Window background behind every page.
pub fn page(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.page_background)),
        text_color: Some(scheme.text_primary),
        ..Default::default()
    }
}

/// Top navigation strip.
pub fn navbar(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.surface)),
        border: Border {
            color: scheme.surface_border,
            width: border::WIDTH_SM,
            radius: radius::NONE.into(),
        },
        ..Default::default()
    }
}

/// White card with a thin border and a faint shadow.
pub fn card(theme: &Theme) -> container::Style {
    let scheme = ColorScheme::for_theme(theme);
    container::Style {
        background: Some(Background::Color(scheme.surface)),
        border: Border {
            color: scheme.surface_border,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Light blue callout used for development notes.
pub fn info_panel(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BLUE_50)),
        border: Border {
            color: palette::BLUE_200,
            width: border::WIDTH_SM,
            radius: radius::MD.into(),
        },
        ..Default::default()
    }
}

/// Solid tile behind a glyph. `round` gives a circle.
pub fn badge(fill: Color, round: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(fill)),
        border: Border {
            radius: (if round { radius::FULL } else { radius::MD }).into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn card_follows_theme() {
        let light = card(&Theme::Light);
        let dark = card(&Theme::Dark);
        assert_ne!(light.background, dark.background);
    }

    #[test]
    fn badge_shape() {
        let round = badge(palette::GREEN_100, true)(&Theme::Light);
        let square = badge(palette::BLUE_100, false)(&Theme::Light);
        assert!(round.border.radius.top_left > square.border.radius.top_left);
    }
}
