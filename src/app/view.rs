// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The shell stacks the toast overlay above the navbar and the routed page.
//! While locale resources are loading only the loading view is shown.

use super::Message;
use crate::i18n::{I18n, LoadState};
use crate::router::Page;
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::notifications::{self, Toast};
use crate::ui::pages;
use crate::ui::styles;
use iced::{
    widget::{Column, Container, Stack},
    Element, Length,
};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub page: Page,
    pub language_menu_open: bool,
    pub notifications: &'a notifications::Manager,
}

/// What fills the window below the toast overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Body {
    Loading,
    Routed,
}

impl Body {
    /// A failed load still shows the routed page with fallback strings.
    pub fn for_state(state: &LoadState) -> Self {
        match state {
            LoadState::Loading => Body::Loading,
            LoadState::Ready | LoadState::Failed(_) => Body::Routed,
        }
    }
}

/// Renders the shell for the current page.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let body: Element<'_, Message> = match Body::for_state(ctx.i18n.load_state()) {
        Body::Loading => pages::loading::view(ctx.i18n),
        Body::Routed => view_routed(&ctx),
    };

    let base = Container::new(body)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page);

    let toasts = Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification);

    Stack::new()
        .push(base)
        .push(toasts)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_routed<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let navbar = navbar::view(NavbarViewContext {
        i18n: ctx.i18n,
        current_page: ctx.page,
        language_menu_open: ctx.language_menu_open,
    })
    .map(Message::Navbar);

    let content = Container::new(pages::view(ctx.page, ctx.i18n))
        .width(Length::Fill)
        .height(Length::Fill);

    Column::new()
        .push(navbar)
        .push(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
