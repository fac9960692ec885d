// SPDX-License-Identifier: MPL-2.0
//! Explicit state machine for the timeline-change transition.
//!
//! A transition plays in three phases:
//!
//! 1. `FadeOut` — the event strip fades to invisible.
//! 2. `Rotate` — the navigator spins to the target angle while the displayed
//!    years interpolate; both sample the same phase progress, so they finish
//!    together.
//! 3. `FadeIn` — the strip fades back in over the new timeline's events.
//!
//! The active index swaps exactly at the `Rotate` → `FadeIn` boundary: never
//! before the rotation completes, never after the fade-in starts. Phases
//! advance only through [`Transition::tick`], driven by the app's animation
//! subscription, and a new request is refused while a transition is active.

use super::easing;
use std::time::{Duration, Instant};

/// Phase durations, matching the original page's choreography.
pub const FADE_OUT_DURATION: Duration = Duration::from_millis(300);
pub const ROTATE_DURATION: Duration = Duration::from_millis(800);
pub const FADE_IN_DURATION: Duration = Duration::from_millis(400);

/// Phase of an active transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    FadeOut,
    Rotate,
    FadeIn,
}

impl Phase {
    fn duration(self) -> Duration {
        match self {
            Phase::FadeOut => FADE_OUT_DURATION,
            Phase::Rotate => ROTATE_DURATION,
            Phase::FadeIn => FADE_IN_DURATION,
        }
    }
}

/// Result of advancing the machine by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Nothing to do; the machine is idle.
    Idle,
    /// Still inside a phase.
    Running,
    /// Rotation just completed: commit `to` as the active index now.
    Swap { from: usize, to: usize },
    /// The fade-in completed and the machine returned to idle.
    Finished,
}

/// Transition state machine: `Idle` or one `Active` transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transition {
    Idle,
    Active {
        from: usize,
        to: usize,
        /// Angle the circle starts from (the committed rotation).
        from_angle: f32,
        /// Absolute angle the circle lands on.
        to_angle: f32,
        phase: Phase,
        phase_started: Instant,
    },
}

impl Transition {
    #[must_use]
    pub fn is_idle(&self) -> bool {
        matches!(self, Transition::Idle)
    }

    /// Starts a transition from `from` to `to`.
    ///
    /// Returns `false` without touching the machine when a transition is
    /// already active (concurrent requests are ignored, not queued) or when
    /// the request is a no-op (`from == to`).
    pub fn begin(
        &mut self,
        from: usize,
        to: usize,
        from_angle: f32,
        to_angle: f32,
        now: Instant,
    ) -> bool {
        if !self.is_idle() || from == to {
            return false;
        }
        *self = Transition::Active {
            from,
            to,
            from_angle,
            to_angle,
            phase: Phase::FadeOut,
            phase_started: now,
        };
        true
    }

    /// Advances the machine. Moves to the next phase when the current one
    /// has run its duration; at most one boundary is crossed per call.
    pub fn tick(&mut self, now: Instant) -> Step {
        let Transition::Active {
            from,
            to,
            from_angle,
            to_angle,
            phase,
            phase_started,
        } = *self
        else {
            return Step::Idle;
        };

        if now.duration_since(phase_started) < phase.duration() {
            return Step::Running;
        }

        match phase {
            Phase::FadeOut => {
                *self = Transition::Active {
                    from,
                    to,
                    from_angle,
                    to_angle,
                    phase: Phase::Rotate,
                    phase_started: now,
                };
                Step::Running
            }
            Phase::Rotate => {
                *self = Transition::Active {
                    from,
                    to,
                    from_angle,
                    to_angle,
                    phase: Phase::FadeIn,
                    phase_started: now,
                };
                Step::Swap { from, to }
            }
            Phase::FadeIn => {
                *self = Transition::Idle;
                Step::Finished
            }
        }
    }

    fn phase_progress(&self, now: Instant) -> f32 {
        match self {
            Transition::Idle => 1.0,
            Transition::Active {
                phase,
                phase_started,
                ..
            } => {
                let elapsed = now.duration_since(*phase_started).as_secs_f32();
                (elapsed / phase.duration().as_secs_f32()).clamp(0.0, 1.0)
            }
        }
    }

    /// Opacity of the event strip at `now`. 1.0 while idle.
    #[must_use]
    pub fn fade_alpha(&self, now: Instant) -> f32 {
        match self {
            Transition::Idle => 1.0,
            Transition::Active { phase, .. } => {
                let t = self.phase_progress(now);
                match phase {
                    Phase::FadeOut => 1.0 - easing::power1_in(t),
                    Phase::Rotate => 0.0,
                    Phase::FadeIn => easing::power1_out(t),
                }
            }
        }
    }

    /// Current circle angle at `now`. Falls back to `committed` while idle.
    #[must_use]
    pub fn rotation_degrees(&self, now: Instant, committed: f32) -> f32 {
        match self {
            Transition::Idle => committed,
            Transition::Active {
                from_angle,
                to_angle,
                phase,
                ..
            } => match phase {
                Phase::FadeOut => *from_angle,
                Phase::Rotate => easing::lerp(
                    *from_angle,
                    *to_angle,
                    easing::power2_in_out(self.phase_progress(now)),
                ),
                Phase::FadeIn => *to_angle,
            },
        }
    }

    /// Progress of the year-counter interpolation in `[0, 1]`: 0 until the
    /// rotation starts, eased during it, 1 afterwards. Runs on the same
    /// phase clock as the rotation, so both complete together.
    #[must_use]
    pub fn year_progress(&self, now: Instant) -> f32 {
        match self {
            Transition::Idle => 1.0,
            Transition::Active { phase, .. } => match phase {
                Phase::FadeOut => 0.0,
                Phase::Rotate => easing::sine_in_out(self.phase_progress(now)),
                Phase::FadeIn => 1.0,
            },
        }
    }

    /// Year shown by the counter: rounded interpolation between the previous
    /// and the target timeline's year.
    #[must_use]
    pub fn display_year(&self, now: Instant, from_year: i32, to_year: i32) -> i32 {
        easing::lerp(from_year as f32, to_year as f32, self.year_progress(now)).round() as i32
    }

    /// Index whose events the slider should render: the old one until the
    /// swap, the new one afterwards. `committed` is the navigator's value.
    #[must_use]
    pub fn displayed_index(&self, committed: usize) -> usize {
        match self {
            Transition::Idle => committed,
            Transition::Active { from, phase, .. } => match phase {
                Phase::FadeOut | Phase::Rotate => *from,
                Phase::FadeIn => committed,
            },
        }
    }
}

impl Default for Transition {
    fn default() -> Self {
        Transition::Idle
    }
}
