// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Navigation requests from every surface (circle dots, pagination dots,
//! stepper buttons, arrow keys) funnel through [`request_timeline`], which
//! enforces a single policy: requests are ignored while a transition is
//! running, and the navigator only commits when the transition reports its
//! swap point.

use super::{App, Message};
use crate::ui::state::{CircleRotation, Step};
use crate::ui::{circle_nav, controls, design_tokens::sizing, design_tokens::spacing, event_slider};
use iced::Task;
use std::time::Instant;

pub(super) fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::CircleNav(circle_nav::Message::DotClicked(index)) => {
            request_timeline(app, index)
        }
        Message::Slider(slider_message) => handle_slider_message(app, slider_message),
        Message::Controls(controls::Message::Previous) => match app.navigator.peek_previous() {
            Some(to) => request_timeline(app, to),
            None => Task::none(),
        },
        Message::Controls(controls::Message::Next) => match app.navigator.peek_next() {
            Some(to) => request_timeline(app, to),
            None => Task::none(),
        },
        Message::Tick(now) => tick(app, now),
        Message::WindowResized(size) => {
            app.slider
                .set_viewport_width(slider_viewport_width(size.width));
            Task::none()
        }
    }
}

fn handle_slider_message(app: &mut App, message: event_slider::Message) -> Task<Message> {
    // The slider always shows the timeline on screen, which is still the
    // old one while a transition is running.
    let shown = app.transition.displayed_index(app.navigator.active());
    let card_count = app.timelines.get(shown).map_or(0, |t| t.events.len());

    let (task, event) = app.slider.update(message, card_count);
    let task = task.map(Message::Slider);

    match event {
        event_slider::Event::TimelineRequested(index) => {
            Task::batch([task, request_timeline(app, index)])
        }
        event_slider::Event::None => task,
    }
}

/// Starts a transition towards `to`, or commits instantly under reduced
/// motion. Requests are dropped while a transition is active and when the
/// target is already the active timeline.
fn request_timeline(app: &mut App, to: usize) -> Task<Message> {
    let from = app.navigator.active();
    if to == from || !app.transition.is_idle() {
        return Task::none();
    }

    if app.reduced_motion {
        return commit(app, to);
    }

    let target = CircleRotation::target_for_index(to, app.navigator.count());
    let from_angle = app.rotation.degrees();
    let to_angle = app.rotation.spun_to(target).degrees();

    let now = Instant::now();
    app.transition.begin(from, to, from_angle, to_angle, now);
    app.now = now;
    Task::none()
}

fn tick(app: &mut App, now: Instant) -> Task<Message> {
    app.now = now;
    match app.transition.tick(now) {
        Step::Swap { to, .. } => commit(app, to),
        Step::Idle | Step::Running | Step::Finished => Task::none(),
    }
}

/// Makes `to` the active timeline: the navigator moves, the committed
/// rotation lands on the dot's slot, and the slider snaps back to the first
/// card.
fn commit(app: &mut App, to: usize) -> Task<Message> {
    app.navigator.select(to);
    let target = CircleRotation::target_for_index(to, app.navigator.count());
    app.rotation = app.rotation.spun_to(target);
    app.slider.reset().map(Message::Slider)
}

/// Approximates the card strip viewport from the window width. The first
/// scroll event reports the exact viewport; this keeps edge buttons sane
/// until then.
fn slider_viewport_width(window_width: f32) -> f32 {
    (window_width - 2.0 * spacing::XXL - 2.0 * (sizing::EDGE_BUTTON + spacing::MD)).max(0.0)
}
