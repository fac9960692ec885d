// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Two sources feed `App::update` besides widget messages: native events
//! (window resize, arrow keys) and a periodic tick that only runs while a
//! transition is animating, so an idle app schedules no wakeups.

use super::Message;
use crate::ui::controls;
use iced::{event, keyboard, time, window, Subscription};
use std::time::Duration;

/// Animation tick interval. 16 ms approximates a 60 Hz redraw cadence.
const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Creates the native event subscription: window resizes always pass
/// through, arrow keys step timelines when no widget captured them.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| {
        if let event::Event::Window(window::Event::Resized(size)) = &event {
            return Some(Message::WindowResized(*size));
        }

        if let event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) = &event {
            if matches!(status, event::Status::Captured) {
                return None;
            }
            return match key {
                keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => {
                    Some(Message::Controls(controls::Message::Previous))
                }
                keyboard::Key::Named(keyboard::key::Named::ArrowRight) => {
                    Some(Message::Controls(controls::Message::Next))
                }
                _ => None,
            };
        }

        None
    })
}

/// Ticks drive the transition state machine; they stop as soon as the
/// machine goes idle.
pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
