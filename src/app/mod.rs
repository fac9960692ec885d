// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration of the timeline navigation.
//!
//! The `App` struct wires together the domains (timeline data, localization,
//! the transition state machine) and translates messages into navigation
//! commits and scroll side effects. This file intentionally keeps policy
//! decisions (minimum window size, when a navigation request is honored)
//! close to the main update loop so it is easy to audit user-facing behavior.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::i18n::fluent::I18n;
use crate::timeline::{dataset, TimelineNavigator, TimelineSet};
use crate::ui::event_slider;
use crate::ui::state::{CircleRotation, Transition};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state that bridges the navigator, the transition
/// state machine, and the UI components.
pub struct App {
    pub i18n: I18n,
    timelines: TimelineSet,
    navigator: TimelineNavigator,
    /// Rotation the circle rests at between transitions.
    rotation: CircleRotation,
    transition: Transition,
    slider: event_slider::State,
    /// Skip the animation phases and swap timelines instantly.
    reduced_motion: bool,
    /// Sample point for the animation curves, refreshed on every tick.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("active", &self.navigator.active())
            .field("transitioning", &!self.transition.is_idle())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const MIN_WINDOW_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 640;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let timelines = dataset::load_embedded();
        let navigator = TimelineNavigator::new(timelines.len(), config::DEFAULT_WRAP_NAVIGATION);
        Self {
            i18n: I18n::default(),
            timelines,
            navigator,
            rotation: CircleRotation::ZERO,
            transition: Transition::Idle,
            slider: event_slider::State::default(),
            reduced_motion: false,
            now: Instant::now(),
        }
    }
}

impl App {
    /// Initializes application state from the `Flags` received from the
    /// launcher: loads the config, resolves the locale, and points the
    /// navigator at the first timeline.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = match &flags.config_dir {
            Some(dir) => config::load_from_path(&dir.join(config::CONFIG_FILE)),
            None => config::load(),
        }
        .unwrap_or_default();

        let i18n = I18n::new(flags.lang, &config);
        let wrap = config
            .wrap_navigation
            .unwrap_or(config::DEFAULT_WRAP_NAVIGATION);
        let reduced_motion = config.reduced_motion.unwrap_or(false);

        let navigator = TimelineNavigator::new(flags.timelines.len(), wrap);
        let app = Self {
            i18n,
            timelines: flags.timelines,
            navigator,
            rotation: CircleRotation::ZERO,
            transition: Transition::Idle,
            slider: event_slider::State::default(),
            reduced_motion,
            now: Instant::now(),
        };

        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(!self.transition.is_idle()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            timelines: &self.timelines,
            navigator: &self.navigator,
            rotation: self.rotation,
            transition: &self.transition,
            slider: &self.slider,
            now: self.now,
        })
    }
}
