// SPDX-License-Identifier: MPL-2.0
//! Shown while translation resources are loading.

use super::secondary_text;
use crate::i18n::I18n;
use crate::ui::design_tokens::typography;
use iced::widget::{Container, Text};
use iced::{Element, Length};

pub fn view<'a, Message: Clone + 'a>(i18n: &'a I18n) -> Element<'a, Message> {
    Container::new(
        Text::new(i18n.tr_or("app.loading", "Chargement…"))
            .size(typography::BODY_LG)
            .style(secondary_text),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .center_x(Length::Fill)
    .center_y(Length::Fill)
    .into()
}
