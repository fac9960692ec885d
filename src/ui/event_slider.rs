// SPDX-License-Identifier: MPL-2.0
//! Horizontally scrolling strip of event cards for the active timeline.
//!
//! The strip tracks its scroll offset and viewport width from the
//! scrollable's `on_scroll` notifications; everything derived from them
//! (edge affordances, per-card visibility) goes through the pure
//! [`compute_edge_state`] so the geometry is testable without a renderer.
//! Switching timelines resets the strip to its first card.

use crate::i18n::fluent::I18n;
use crate::timeline::{Timeline, TimelineSet};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theme;
use iced::advanced::widget::operation;
use iced::widget::scrollable::{self, AbsoluteOffset, Scrollbar, Viewport};
use iced::widget::{button, container, text, Column, Row, Space};
use iced::{Element, Length, Task};

/// Tolerance in pixels for edge and visibility checks, matching the
/// original's `>= -1` / `<= width + 1` comparisons.
const TOLERANCE: f32 = 1.0;

fn strip_id() -> iced::widget::Id {
    iced::widget::Id::new("event-strip")
}

/// Left edge and width of every card in content coordinates.
#[must_use]
pub fn card_extents(card_count: usize) -> Vec<(f32, f32)> {
    (0..card_count)
        .map(|index| {
            (
                index as f32 * (sizing::CARD_WIDTH + spacing::CARD_GAP),
                sizing::CARD_WIDTH,
            )
        })
        .collect()
}

/// Scroll-edge and visibility state derived from the current layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeState {
    pub is_at_start: bool,
    pub is_at_end: bool,
    /// Indices of cards fully inside the viewport.
    pub fully_visible: Vec<usize>,
}

/// Derives the edge state from a scroll offset, the viewport width and the
/// card extents. Empty or fully fitting content reports both edges at rest.
#[must_use]
pub fn compute_edge_state(
    scroll_offset: f32,
    viewport_width: f32,
    card_extents: &[(f32, f32)],
) -> EdgeState {
    let content_width = card_extents
        .last()
        .map(|(left, width)| left + width)
        .unwrap_or(0.0);

    let is_at_start = scroll_offset <= TOLERANCE;
    let is_at_end = scroll_offset + viewport_width >= content_width - TOLERANCE;

    let fully_visible = card_extents
        .iter()
        .enumerate()
        .filter(|(_, (left, width))| {
            let position = left - scroll_offset;
            position >= -TOLERANCE && position + width <= viewport_width + TOLERANCE
        })
        .map(|(index, _)| index)
        .collect();

    EdgeState {
        is_at_start,
        is_at_end,
        fully_visible,
    }
}

/// Event slider state: the scroll position and the last observed viewport
/// width, fed by the scrollable's notifications.
#[derive(Debug, Clone, Copy)]
pub struct State {
    scroll_offset: f32,
    viewport_width: f32,
}

impl Default for State {
    fn default() -> Self {
        Self {
            scroll_offset: 0.0,
            // Before the first on_scroll arrives, assume a generous viewport
            // so nothing renders dimmed on the initial frame.
            viewport_width: f32::MAX,
        }
    }
}

/// Messages for the event slider.
#[derive(Debug, Clone)]
pub enum Message {
    /// The scrollable reported a new offset/viewport.
    Scrolled(Viewport),
    /// Previous edge button.
    Previous,
    /// Next edge button.
    Next,
    /// A pagination dot was clicked.
    PageClicked(usize),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// Request that the given timeline become active.
    TimelineRequested(usize),
}

impl State {
    /// Edge state for the given number of cards at the current scroll
    /// position.
    #[must_use]
    pub fn edge_state(&self, card_count: usize) -> EdgeState {
        compute_edge_state(
            self.scroll_offset,
            self.viewport_width,
            &card_extents(card_count),
        )
    }

    /// Records a viewport change reported outside `on_scroll` (window
    /// resize); the offset is preserved.
    pub fn set_viewport_width(&mut self, width: f32) {
        self.viewport_width = width;
    }

    /// Resets the strip to its first card. Returns the scroll task that
    /// moves the actual widget.
    pub fn reset(&mut self) -> Task<Message> {
        self.scroll_offset = 0.0;
        iced::advanced::widget::operate(operation::scrollable::scroll_to(
            strip_id(),
            AbsoluteOffset {
                x: Some(0.0),
                y: Some(0.0),
            },
        ))
    }

    pub fn update(&mut self, message: Message, card_count: usize) -> (Task<Message>, Event) {
        match message {
            Message::Scrolled(viewport) => {
                self.scroll_offset = viewport.absolute_offset().x;
                self.viewport_width = viewport.bounds().width;
                (Task::none(), Event::None)
            }
            Message::Previous => (self.scroll_by(-self.step(), card_count), Event::None),
            Message::Next => (self.scroll_by(self.step(), card_count), Event::None),
            Message::PageClicked(index) => (Task::none(), Event::TimelineRequested(index)),
        }
    }

    fn step(&self) -> f32 {
        sizing::CARD_WIDTH + spacing::CARD_GAP
    }

    fn scroll_by(&mut self, delta: f32, card_count: usize) -> Task<Message> {
        let content_width = card_extents(card_count)
            .last()
            .map(|(left, width)| left + width)
            .unwrap_or(0.0);
        let max_offset = (content_width - self.viewport_width).max(0.0);
        self.scroll_offset = (self.scroll_offset + delta).clamp(0.0, max_offset);
        iced::advanced::widget::operate(operation::scrollable::scroll_to(
            strip_id(),
            AbsoluteOffset {
                x: Some(self.scroll_offset),
                y: Some(0.0),
            },
        ))
    }
}

/// Contextual data needed to render the slider.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    /// The timeline whose events are shown (the old one mid-transition).
    pub timeline: &'a Timeline,
    pub timelines: &'a TimelineSet,
    pub active: usize,
    /// Opacity of the strip, driven by the transition fade.
    pub fade_alpha: f32,
}

/// Render the title, the card strip with its edge buttons, and the
/// pagination dot row.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let edge = ctx.state.edge_state(ctx.timeline.events.len());

    let title = text(&ctx.timeline.title)
        .size(typography::TITLE_MD)
        .shaping(text::Shaping::Advanced)
        .color(theme::faded(theme::ink_color(), ctx.fade_alpha));

    let mut strip = Row::new().spacing(spacing::CARD_GAP);
    for (index, event) in ctx.timeline.events.iter().enumerate() {
        let dimmed = !edge.fully_visible.contains(&index);
        strip = strip.push(card(event, dimmed, ctx.fade_alpha));
    }

    let cards = iced::widget::scrollable(strip)
        .id(strip_id())
        .direction(scrollable::Direction::Horizontal(
            Scrollbar::new().width(0.0).scroller_width(0.0),
        ))
        .on_scroll(Message::Scrolled)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::CARD_HEIGHT));

    let previous = edge_button("‹", ctx.i18n.tr("slider-previous"), !edge.is_at_start)
        .map(|()| Message::Previous);
    let next = edge_button("›", ctx.i18n.tr("slider-next"), !edge.is_at_end).map(|()| Message::Next);

    let strip_row = Row::new()
        .push(previous)
        .push(cards)
        .push(next)
        .spacing(spacing::MD)
        .align_y(iced::Alignment::Center);

    let mut pagination = Row::new().spacing(spacing::SM);
    for index in 0..ctx.timelines.len() {
        let dot = button(
            Space::new()
                .width(Length::Fixed(sizing::PAGINATION_DOT))
                .height(Length::Fixed(sizing::PAGINATION_DOT)),
        )
        .style(styles::button::pagination_dot(index == ctx.active))
        .padding(0)
        .on_press(Message::PageClicked(index));
        pagination = pagination.push(dot);
    }

    Column::new()
        .push(title)
        .push(strip_row)
        .push(container(pagination).center_x(Length::Fill))
        .spacing(spacing::LG)
        .width(Length::Fill)
        .into()
}

fn card<'a>(
    event: &'a crate::timeline::HistoricalEvent,
    dimmed: bool,
    fade_alpha: f32,
) -> Element<'a, Message> {
    let alpha = if dimmed {
        fade_alpha * crate::ui::design_tokens::opacity::DIMMED
    } else {
        fade_alpha
    };

    let year = text(event.year.to_string())
        .size(typography::TITLE_SM)
        .color(theme::faded(theme::card_year_color(), alpha));
    let description = text(&event.description)
        .size(typography::BODY)
        .shaping(text::Shaping::Advanced)
        .color(theme::faded(theme::ink_color(), alpha));

    Column::new()
        .push(year)
        .push(description)
        .spacing(spacing::SM)
        .width(Length::Fixed(sizing::CARD_WIDTH))
        .into()
}

fn edge_button<'a>(glyph: &'a str, label: String, enabled: bool) -> Element<'a, ()> {
    let mut edge = button(
        container(text(glyph).size(typography::TITLE_SM))
            .center_x(Length::Fixed(sizing::EDGE_BUTTON))
            .center_y(Length::Fixed(sizing::EDGE_BUTTON)),
    )
    .style(styles::button::slider_edge)
    .padding(0);

    if enabled {
        edge = edge.on_press(());
    }

    iced::widget::tooltip(edge, text(label), iced::widget::tooltip::Position::Bottom).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_strip_rests_at_both_edges() {
        let edge = compute_edge_state(0.0, 800.0, &[]);
        assert!(edge.is_at_start);
        assert!(edge.is_at_end);
        assert!(edge.fully_visible.is_empty());
    }

    #[test]
    fn single_fitting_card_rests_at_both_edges() {
        let extents = card_extents(1);
        let edge = compute_edge_state(0.0, 800.0, &extents);
        assert!(edge.is_at_start);
        assert!(edge.is_at_end);
        assert_eq!(edge.fully_visible, vec![0]);
    }

    #[test]
    fn overflowing_content_enables_next_only() {
        let extents = card_extents(6);
        let edge = compute_edge_state(0.0, 800.0, &extents);
        assert!(edge.is_at_start);
        assert!(!edge.is_at_end);
    }

    #[test]
    fn scrolled_to_end_disables_next_only() {
        let extents = card_extents(6);
        let content_width = extents.last().map(|(l, w)| l + w).unwrap();
        let viewport = 800.0;
        let edge = compute_edge_state(content_width - viewport, viewport, &extents);
        assert!(!edge.is_at_start);
        assert!(edge.is_at_end);
    }

    #[test]
    fn visibility_respects_one_pixel_tolerance() {
        // One card exactly filling the viewport, offset by less than the
        // tolerance: still fully visible.
        let extents = vec![(0.0, 800.0)];
        let edge = compute_edge_state(0.5, 800.0, &extents);
        assert_eq!(edge.fully_visible, vec![0]);

        let edge = compute_edge_state(10.0, 800.0, &extents);
        assert!(edge.fully_visible.is_empty());
    }

    #[test]
    fn partially_clipped_cards_are_not_fully_visible() {
        let extents = card_extents(4);
        // Viewport wide enough for two cards and the gap between them.
        let viewport = sizing::CARD_WIDTH * 2.0 + spacing::CARD_GAP;
        let edge = compute_edge_state(0.0, viewport, &extents);
        assert_eq!(edge.fully_visible, vec![0, 1]);
    }

    #[test]
    fn reset_moves_offset_to_zero() {
        let mut state = State {
            scroll_offset: 500.0,
            viewport_width: 800.0,
        };
        let _task = state.reset();
        assert_eq!(state.scroll_offset, 0.0);
        assert!(state.edge_state(6).is_at_start);
    }

    #[test]
    fn scroll_by_clamps_to_content() {
        let mut state = State {
            scroll_offset: 0.0,
            viewport_width: 800.0,
        };
        let _task = state.update(Message::Previous, 6);
        assert_eq!(state.scroll_offset, 0.0);

        for _ in 0..50 {
            let _task = state.update(Message::Next, 6);
        }
        let extents = card_extents(6);
        let content_width = extents.last().map(|(l, w)| l + w).unwrap();
        assert!(state.scroll_offset <= content_width - 800.0 + TOLERANCE);
        assert!(state.edge_state(6).is_at_end);
    }

    #[test]
    fn page_click_requests_timeline() {
        let mut state = State::default();
        let (_task, event) = state.update(Message::PageClicked(2), 6);
        assert_eq!(event, Event::TimelineRequested(2));
    }
}
