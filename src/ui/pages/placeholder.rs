// SPDX-License-Identifier: MPL-2.0
//! Pages that only show their name until their features land.

use super::{primary_text, start_alignment};
use crate::i18n::I18n;
use crate::router::Page;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::{Container, Text};
use iced::{Element, Length};

/// Translation key and French fallback of a page title.
#[must_use]
pub fn title(page: Page) -> (&'static str, &'static str) {
    match page {
        Page::Dashboard => ("pages.dashboard.title", "Tableau de bord"),
        Page::Menu => ("menu.title", "Menu des Restaurants"),
        Page::Orders => ("pages.orders.title", "Commandes"),
        Page::Restaurants => ("pages.restaurants.title", "Restaurants"),
        Page::Settings => ("pages.settings.title", "Paramètres"),
    }
}

pub fn view<'a, Message: Clone + 'a>(page: Page, i18n: &'a I18n) -> Element<'a, Message> {
    let (key, fallback) = title(page);
    let heading = Text::new(i18n.tr_or(key, fallback))
        .size(typography::TITLE_LG)
        .style(primary_text);

    Container::new(heading)
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .padding([spacing::XL, spacing::MD])
        .align_x(start_alignment(i18n.direction()))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_exist_in_both_languages() {
        let mut i18n = I18n::default();
        for language in crate::i18n::Language::ALL {
            i18n.set_language(language);
            for page in crate::router::Page::ALL {
                let (key, _) = title(page);
                assert!(i18n.has_key(key), "{key} missing");
            }
        }
    }

    #[test]
    fn fallback_matches_french_bundle() {
        let i18n = I18n::default();
        for page in crate::router::Page::ALL {
            let (key, fallback) = title(page);
            assert_eq!(i18n.tr(key), fallback);
        }
    }
}
