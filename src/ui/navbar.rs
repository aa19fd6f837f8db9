// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! The bar shows the app name, one link per page and a language toggle. The
//! toggle opens a dropdown listing the supported languages by display name.

use crate::i18n::{I18n, Language};
use crate::router::Page;
use crate::ui::design_tokens::{border, palette, radius, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, Column, Container, Row, Space, Text},
    Border, Element, Length, Theme,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub current_page: Page,
    pub language_menu_open: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    Navigate(Page),
    ToggleLanguageMenu,
    SelectLanguage(Language),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    None,
    Navigate(Page),
    LanguageSelected(Language),
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, language_menu_open: &mut bool) -> Event {
    match message {
        Message::Navigate(page) => {
            *language_menu_open = false;
            Event::Navigate(page)
        }
        Message::ToggleLanguageMenu => {
            *language_menu_open = !*language_menu_open;
            Event::None
        }
        Message::SelectLanguage(language) => {
            *language_menu_open = false;
            Event::LanguageSelected(language)
        }
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut content = Column::new().width(Length::Fill).push(build_top_bar(&ctx));

    if ctx.language_menu_open {
        content = content.push(
            Container::new(build_language_dropdown(&ctx))
                .width(Length::Fill)
                .align_x(Horizontal::Right)
                .padding([0.0, spacing::MD]),
        );
    }

    content.into()
}

fn build_top_bar<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let brand = Text::new(ctx.i18n.tr_or("app.name", "ChopExpress"))
        .size(typography::TITLE_SM)
        .style(|_theme: &Theme| iced::widget::text::Style {
            color: Some(palette::GREEN_600),
        });

    let links = Page::ALL.iter().fold(
        Row::new().spacing(spacing::XXS).align_y(Vertical::Center),
        |row, &page| {
            row.push(
                button(Text::new(ctx.i18n.tr(page.nav_key())).size(typography::BODY))
                    .on_press(Message::Navigate(page))
                    .padding([spacing::XS, spacing::SM])
                    .style(styles::button::nav(page == ctx.current_page)),
            )
        },
    );

    let language = ctx.i18n.current_language();
    let language_toggle = button(
        Text::new(format!("{} ▾", language.code().to_uppercase())).size(typography::BODY),
    )
    .on_press(Message::ToggleLanguageMenu)
    .padding([spacing::XS, spacing::SM])
    .style(styles::button::nav(ctx.language_menu_open));

    let row = Row::new()
        .spacing(spacing::LG)
        .padding([0.0, spacing::MD])
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .align_y(Vertical::Center)
        .push(brand)
        .push(links)
        .push(Space::new().width(Length::Fill))
        .push(language_toggle);

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::navbar)
        .into()
}

fn build_language_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let current = ctx.i18n.current_language();
    let items = Language::ALL.iter().fold(
        Column::new()
            .spacing(spacing::XXS)
            .push(Text::new(ctx.i18n.tr("nav.language")).size(typography::CAPTION)),
        |column, &language| {
            column.push(
                button(Text::new(language.display_name()).size(typography::BODY))
                    .on_press(Message::SelectLanguage(language))
                    .padding([spacing::XS, spacing::SM])
                    .width(Length::Fill)
                    .style(styles::button::nav(language == current)),
            )
        },
    );

    Container::new(items)
        .width(Length::Fixed(sizing::TOAST_WIDTH / 2.0))
        .padding(spacing::XS)
        .style(|theme: &Theme| {
            let scheme = ColorScheme::for_theme(theme);
            container::Style {
                background: Some(scheme.surface.into()),
                border: Border {
                    radius: radius::SM.into(),
                    width: border::WIDTH_SM,
                    color: scheme.surface_border,
                },
                ..Default::default()
            }
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_view_renders() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            current_page: Page::Menu,
            language_menu_open: false,
        };
        let _element = view(ctx);
    }

    #[test]
    fn navbar_view_renders_with_language_menu_open() {
        let i18n = I18n::default();
        let ctx = ViewContext {
            i18n: &i18n,
            current_page: Page::Dashboard,
            language_menu_open: true,
        };
        let _element = view(ctx);
    }

    #[test]
    fn toggle_language_menu_changes_state() {
        let mut open = false;
        assert_eq!(update(Message::ToggleLanguageMenu, &mut open), Event::None);
        assert!(open);
        assert_eq!(update(Message::ToggleLanguageMenu, &mut open), Event::None);
        assert!(!open);
    }

    #[test]
    fn selecting_language_closes_menu() {
        let mut open = true;
        let event = update(Message::SelectLanguage(Language::En), &mut open);
        assert!(!open);
        assert_eq!(event, Event::LanguageSelected(Language::En));
    }

    #[test]
    fn navigate_emits_page() {
        let mut open = true;
        let event = update(Message::Navigate(Page::Orders), &mut open);
        assert!(!open);
        assert_eq!(event, Event::Navigate(Page::Orders));
    }
}
