// SPDX-License-Identifier: MPL-2.0
//! Timeline stepper: the `NN/NN` position counter and the round
//! previous/next buttons.
//!
//! Whether a boundary disables a button or wraps around is the navigator's
//! `wrap` policy; this component only renders what the
//! [`NavigationInfo`] snapshot says is possible.

use crate::i18n::fluent::I18n;
use crate::timeline::NavigationInfo;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theme;
use iced::widget::{button, container, text, Column, Row};
use iced::{Element, Length};

/// Messages emitted by the stepper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Previous,
    Next,
}

/// Contextual data needed to render the stepper.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub info: NavigationInfo,
}

/// Zero-padded `NN/NN` counter text, 1-based.
#[must_use]
pub fn counter_text(info: NavigationInfo) -> String {
    format!("{:02}/{:02}", info.active + 1, info.count)
}

/// Render the counter and the stepper buttons.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let counter = text(counter_text(ctx.info))
        .size(typography::CAPTION)
        .color(theme::muted_text_color());

    let previous = stepper_button(
        "‹",
        ctx.i18n.tr("controls-previous"),
        ctx.info.has_previous,
        Message::Previous,
    );
    let next = stepper_button(
        "›",
        ctx.i18n.tr("controls-next"),
        ctx.info.has_next,
        Message::Next,
    );

    Column::new()
        .push(counter)
        .push(Row::new().push(previous).push(next).spacing(spacing::SM))
        .spacing(spacing::SM)
        .into()
}

fn stepper_button(
    glyph: &str,
    label: String,
    enabled: bool,
    message: Message,
) -> Element<'_, Message> {
    let mut stepper = button(
        container(text(glyph).size(typography::TITLE_SM))
            .center_x(Length::Fixed(sizing::STEPPER_BUTTON))
            .center_y(Length::Fixed(sizing::STEPPER_BUTTON)),
    )
    .style(styles::button::stepper)
    .padding(0);

    if enabled {
        stepper = stepper.on_press(message);
    }

    iced::widget::tooltip(
        stepper,
        text(label),
        iced::widget::tooltip::Position::Bottom,
    )
    .into()
}
