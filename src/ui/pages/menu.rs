// SPDX-License-Identifier: MPL-2.0
//! Restaurant menu page.
//!
//! Static content: a heading, an empty-state card announcing upcoming features,
//! a disabled action and a development note. Real menu data is not wired yet.

use super::{colored_text, primary_text, secondary_text, start_alignment};
use crate::i18n::I18n;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, scrollable, Column, Container, Row, Text};
use iced::{Color, Element, Length};

/// A feature announced on the empty-state card.
struct Feature {
    glyph: &'static str,
    tile: Color,
    accent: Color,
    title: (&'static str, &'static str),
    description: (&'static str, &'static str),
}

const FEATURES: [Feature; 3] = [
    Feature {
        glyph: "◉",
        tile: palette::BLUE_100,
        accent: palette::BLUE_600,
        title: ("menu.features.location", "Géolocalisation"),
        description: ("menu.features.location_desc", "Restaurants près de vous"),
    },
    Feature {
        glyph: "◷",
        tile: palette::YELLOW_100,
        accent: palette::YELLOW_600,
        title: ("menu.features.delivery", "Livraison rapide"),
        description: ("menu.features.delivery_desc", "Suivi en temps réel"),
    },
    Feature {
        glyph: "★",
        tile: palette::PURPLE_100,
        accent: palette::PURPLE_600,
        title: ("menu.features.quality", "Qualité premium"),
        description: ("menu.features.quality_desc", "Plats sélectionnés"),
    },
];

const TITLE: (&str, &str) = ("menu.title", "Menu des Restaurants");
const SUBTITLE: (&str, &str) = (
    "menu.subtitle",
    "Découvrez les délicieux plats disponibles via ChopExpress",
);
const EMPTY_TITLE: (&str, &str) = ("menu.empty.title", "Menu en cours de préparation");
const EMPTY_DESCRIPTION: (&str, &str) = (
    "menu.empty.description",
    "Nos chefs préparent une sélection exceptionnelle de plats. Cette page sera bientôt remplie de délicieuses options!",
);
const COMING_SOON: (&str, &str) = ("menu.coming_soon", "Bientôt disponible");
const DEV_TITLE: (&str, &str) = ("dev.info.title", "Information de développement");
const DEV_DESCRIPTION: (&str, &str) = (
    "dev.info.description",
    "Cette page fait partie du livrable initial ChopExpress. L'intégration avec l'API backend et la base de données Supabase sera implémentée dans les prochaines itérations.",
);

fn tr(i18n: &I18n, (key, fallback): (&str, &str)) -> String {
    i18n.tr_or(key, fallback)
}

pub fn view<'a, Message: Clone + 'a>(i18n: &'a I18n) -> Element<'a, Message> {
    let start = start_alignment(i18n.direction());

    let header = Column::new()
        .spacing(spacing::XS)
        .align_x(start)
        .push(
            Text::new(tr(i18n, TITLE))
                .size(typography::TITLE_LG)
                .style(primary_text),
        )
        .push(
            Text::new(tr(i18n, SUBTITLE))
                .size(typography::BODY_LG)
                .style(secondary_text),
        );

    let content = Column::new()
        .spacing(spacing::XL)
        .width(Length::Fill)
        .max_width(sizing::CONTENT_MAX_WIDTH)
        .padding([spacing::XL, spacing::MD])
        .push(Container::new(header).width(Length::Fill).align_x(start))
        .push(empty_state_card(i18n))
        .push(dev_info_panel(i18n));

    scrollable(
        Container::new(content)
            .width(Length::Fill)
            .align_x(Horizontal::Center),
    )
    .into()
}

fn empty_state_card<'a, Message: Clone + 'a>(i18n: &'a I18n) -> Element<'a, Message> {
    let chef_badge = Container::new(
        Text::new("♨")
            .size(typography::GLYPH_LG)
            .style(colored_text(palette::GREEN_600)),
    )
    .center_x(Length::Fixed(sizing::BADGE_LG))
    .center_y(Length::Fixed(sizing::BADGE_LG))
    .style(styles::container::badge(palette::GREEN_100, true));

    let features = Container::new(FEATURES.iter().fold(
        Row::new().spacing(spacing::LG),
        |row, feature| row.push(feature_callout(i18n, feature)),
    ))
    .max_width(sizing::FEATURES_MAX_WIDTH);

    // The action stays disabled until ordering exists.
    let coming_soon = button(Text::new(tr(i18n, COMING_SOON)).size(typography::BODY_LG))
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::disabled());

    let column = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(chef_badge)
        .push(
            Text::new(tr(i18n, EMPTY_TITLE))
                .size(typography::TITLE_MD)
                .style(primary_text),
        )
        .push(
            Container::new(
                Text::new(tr(i18n, EMPTY_DESCRIPTION))
                    .size(typography::BODY_LG)
                    .style(secondary_text),
            )
            .max_width(sizing::PARAGRAPH_MAX_WIDTH),
        )
        .push(features)
        .push(coming_soon);

    Container::new(column)
        .width(Length::Fill)
        .padding(spacing::XXL)
        .align_x(Horizontal::Center)
        .style(styles::container::card)
        .into()
}

fn feature_callout<'a, Message: Clone + 'a>(
    i18n: &'a I18n,
    feature: &Feature,
) -> Element<'a, Message> {
    let tile = Container::new(
        Text::new(feature.glyph)
            .size(typography::GLYPH_MD)
            .style(colored_text(feature.accent)),
    )
    .center_x(Length::Fixed(sizing::BADGE_MD))
    .center_y(Length::Fixed(sizing::BADGE_MD))
    .style(styles::container::badge(feature.tile, false));

    Column::new()
        .spacing(spacing::XXS)
        .width(Length::FillPortion(1))
        .align_x(Horizontal::Center)
        .push(tile)
        .push(
            Text::new(tr(i18n, feature.title))
                .size(typography::BODY_LG)
                .style(primary_text),
        )
        .push(
            Text::new(tr(i18n, feature.description))
                .size(typography::BODY)
                .style(secondary_text),
        )
        .into()
}

fn dev_info_panel<'a, Message: Clone + 'a>(i18n: &'a I18n) -> Element<'a, Message> {
    let badge = Container::new(
        Text::new("ℹ")
            .size(typography::BODY)
            .style(colored_text(palette::BLUE_600)),
    )
    .center_x(Length::Fixed(sizing::BADGE_SM))
    .center_y(Length::Fixed(sizing::BADGE_SM))
    .style(styles::container::badge(palette::BLUE_100, true));

    let body = Column::new()
        .spacing(spacing::XXS)
        .push(
            Text::new(tr(i18n, DEV_TITLE))
                .size(typography::BODY)
                .style(colored_text(palette::BLUE_900)),
        )
        .push(
            Text::new(tr(i18n, DEV_DESCRIPTION))
                .size(typography::BODY)
                .style(colored_text(palette::BLUE_700)),
        );

    Container::new(
        Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Top)
            .push(badge)
            .push(body),
    )
    .width(Length::Fill)
    .padding(spacing::MD)
    .style(styles::container::info_panel)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Language;

    fn all_entries() -> Vec<(&'static str, &'static str)> {
        let mut entries = vec![
            TITLE,
            SUBTITLE,
            EMPTY_TITLE,
            EMPTY_DESCRIPTION,
            COMING_SOON,
            DEV_TITLE,
            DEV_DESCRIPTION,
        ];
        for feature in &FEATURES {
            entries.push(feature.title);
            entries.push(feature.description);
        }
        entries
    }

    #[test]
    fn french_fallbacks_match_french_bundle() {
        let i18n = I18n::default();
        for (key, fallback) in all_entries() {
            assert_eq!(i18n.tr(key), fallback, "{key}");
        }
    }

    #[test]
    fn english_bundle_covers_every_string() {
        let mut i18n = I18n::default();
        i18n.set_language(Language::En);
        for (key, fallback) in all_entries() {
            let value = i18n.tr(key);
            assert!(!value.is_empty());
            assert_ne!(value, fallback, "{key} is not translated");
        }
    }

    #[test]
    fn menu_renders_in_both_languages() {
        let mut i18n = I18n::default();
        for language in Language::ALL {
            i18n.set_language(language);
            let _element: Element<'_, ()> = view(&i18n);
        }
    }
}
