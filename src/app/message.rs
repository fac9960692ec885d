// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::timeline::TimelineSet;
use crate::ui::{circle_nav, controls, event_slider};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    CircleNav(circle_nav::Message),
    Slider(event_slider::Message),
    Controls(controls::Message),
    /// Periodic tick driving the transition state machine.
    Tick(Instant),
    /// The window was resized; the slider viewport needs recomputing.
    WindowResized(iced::Size),
}

/// Runtime inputs resolved by `main.rs` before the Iced loop starts.
///
/// The dataset is loaded and validated up front so a broken file is
/// reported on stderr instead of inside a half-initialized window.
#[derive(Debug, Clone)]
pub struct Flags {
    pub timelines: TimelineSet,
    /// Language override from the command line (otherwise config, then
    /// system locale).
    pub lang: Option<String>,
    /// Config directory override, mainly for tests and portable setups.
    pub config_dir: Option<PathBuf>,
}
