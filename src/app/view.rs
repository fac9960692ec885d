// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Lays out the page: heading, the circular navigator with the year pair
//! over its center, then the stepper controls and the event slider. All
//! animated values (rotation angle, interpolated years, fade alpha) are
//! sampled here from the transition state machine.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::timeline::{TimelineNavigator, TimelineSet};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::state::{CircleRotation, Transition};
use crate::ui::{circle_nav, controls, event_slider, styles, theme};
use iced::widget::{container, text, Column, Container, Row, Stack};
use iced::{Element, Length};
use std::time::Instant;

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub timelines: &'a TimelineSet,
    pub navigator: &'a TimelineNavigator,
    pub rotation: CircleRotation,
    pub transition: &'a Transition,
    pub slider: &'a event_slider::State,
    pub now: Instant,
}

/// Renders the full page.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let active = ctx.navigator.active();
    let shown = ctx.transition.displayed_index(active);
    let Some(timeline) = ctx.timelines.get(shown) else {
        return Column::new().into();
    };

    let heading = text(ctx.i18n.tr("app-title"))
        .size(typography::TITLE_LG)
        .shaping(text::Shaping::Advanced)
        .color(theme::ink_color());

    let hero = Stack::new()
        .push(
            container(
                circle_nav::view(circle_nav::ViewContext {
                    timelines: ctx.timelines,
                    active: shown,
                    rotation_degrees: ctx
                        .transition
                        .rotation_degrees(ctx.now, ctx.rotation.degrees()),
                    show_title: ctx.transition.is_idle(),
                })
                .map(Message::CircleNav),
            )
            .center(Length::Fill),
        )
        .push(container(year_pair(&ctx)).center(Length::Fill))
        .width(Length::Fill)
        .height(Length::Fill);

    let fade_alpha = ctx.transition.fade_alpha(ctx.now);
    let slider = event_slider::view(event_slider::ViewContext {
        i18n: ctx.i18n,
        state: ctx.slider,
        timeline,
        timelines: ctx.timelines,
        active: shown,
        fade_alpha,
    })
    .map(Message::Slider);

    let stepper = controls::view(controls::ViewContext {
        i18n: ctx.i18n,
        info: ctx.navigator.info(),
    })
    .map(Message::Controls);

    let content = Column::new()
        .push(heading)
        .push(hero)
        .push(stepper)
        .push(slider)
        .spacing(spacing::LG)
        .width(Length::Fill)
        .height(Length::Fill);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::XXL)
        .style(styles::container::page)
        .into()
}

/// The large year pair over the circle center. Mid-transition the numbers
/// count from the outgoing timeline's span to the incoming one's.
fn year_pair<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let active = ctx.navigator.active();
    let (from_index, to_index) = match *ctx.transition {
        Transition::Active { from, to, .. } => (from, to),
        Transition::Idle => (active, active),
    };

    let (start_from, end_from) = year_span(ctx.timelines, from_index);
    let (start_to, end_to) = year_span(ctx.timelines, to_index);

    let start_year = ctx.transition.display_year(ctx.now, start_from, start_to);
    let end_year = ctx.transition.display_year(ctx.now, end_from, end_to);

    Row::new()
        .push(
            text(start_year.to_string())
                .size(typography::YEAR_XL)
                .color(theme::year_start_color()),
        )
        .push(
            text(end_year.to_string())
                .size(typography::YEAR_XL)
                .color(theme::year_end_color()),
        )
        .spacing(spacing::XXL)
        .into()
}

fn year_span(timelines: &TimelineSet, index: usize) -> (i32, i32) {
    timelines
        .get(index)
        .map_or((0, 0), |t| (t.start_year, t.end_year))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeline::dataset;

    #[test]
    fn year_span_reads_the_timeline_bounds() {
        let timelines = dataset::load_embedded();
        let first = timelines.get(0).unwrap();
        assert_eq!(
            year_span(&timelines, 0),
            (first.start_year, first.end_year)
        );
    }

    #[test]
    fn year_span_is_zero_for_out_of_range_indices() {
        let timelines = dataset::load_embedded();
        assert_eq!(year_span(&timelines, 99), (0, 0));
    }
}
