// SPDX-License-Identifier: MPL-2.0
//! Page components.
//!
//! Pages are pure functions of the localization context. They emit no
//! messages, so each one is generic over the caller's message type.

pub mod loading;
pub mod menu;
pub mod placeholder;

use crate::i18n::{I18n, TextDirection};
use crate::router::Page;
use crate::ui::theming::ColorScheme;
use iced::alignment::Horizontal;
use iced::widget::text;
use iced::{Color, Element, Theme};

/// Renders `page` in the active language.
pub fn view<'a, Message: Clone + 'a>(page: Page, i18n: &'a I18n) -> Element<'a, Message> {
    match page {
        Page::Menu => menu::view(i18n),
        Page::Dashboard | Page::Orders | Page::Restaurants | Page::Settings => {
            placeholder::view(page, i18n)
        }
    }
}

/// Horizontal alignment of the start edge for `direction`.
#[must_use]
pub fn start_alignment(direction: TextDirection) -> Horizontal {
    match direction {
        TextDirection::LeftToRight => Horizontal::Left,
        TextDirection::RightToLeft => Horizontal::Right,
    }
}

pub(crate) fn primary_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).text_primary),
    }
}

pub(crate) fn secondary_text(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(ColorScheme::for_theme(theme).text_secondary),
    }
}

pub(crate) fn colored_text(color: Color) -> impl Fn(&Theme) -> text::Style {
    move |_theme: &Theme| text::Style { color: Some(color) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_page_renders() {
        let i18n = I18n::default();
        for page in Page::ALL {
            let _element: Element<'_, ()> = view(page, &i18n);
        }
    }

    #[test]
    fn start_alignment_follows_direction() {
        assert_eq!(start_alignment(TextDirection::LeftToRight), Horizontal::Left);
        assert_eq!(start_alignment(TextDirection::RightToLeft), Horizontal::Right);
    }
}
