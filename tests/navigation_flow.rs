// SPDX-License-Identifier: MPL-2.0
//! End-to-end navigation scenarios exercising the navigator, the rotation
//! model, and the transition state machine together, the way `App::update`
//! drives them.

use iced_chronicle::timeline::{dataset, TimelineNavigator};
use iced_chronicle::ui::event_slider::{card_extents, compute_edge_state};
use iced_chronicle::ui::state::transition::{
    FADE_IN_DURATION, FADE_OUT_DURATION, ROTATE_DURATION,
};
use iced_chronicle::ui::state::{CircleRotation, Phase, Step, Transition};
use std::time::{Duration, Instant};

/// Plays a full transition from the navigator's active timeline to `to`,
/// committing at the swap point the way the update loop does.
fn run_transition(
    navigator: &mut TimelineNavigator,
    rotation: &mut CircleRotation,
    to: usize,
) -> Vec<Phase> {
    let from = navigator.active();
    let target = CircleRotation::target_for_index(to, navigator.count());
    let from_angle = rotation.degrees();
    let to_angle = rotation.spun_to(target).degrees();

    let t0 = Instant::now();
    let mut transition = Transition::Idle;
    assert!(transition.begin(from, to, from_angle, to_angle, t0));

    let mut phases = vec![Phase::FadeOut];
    let mut now = t0;
    loop {
        now += Duration::from_millis(16);
        match transition.tick(now) {
            Step::Running | Step::Idle => {}
            Step::Swap {
                from: swapped_from,
                to: swapped_to,
            } => {
                assert_eq!(swapped_from, from);
                assert_eq!(swapped_to, to);
                navigator.select(swapped_to);
                *rotation = rotation.spun_to(target);
            }
            Step::Finished => break,
        }
        if let Transition::Active { phase, .. } = transition {
            if phases.last() != Some(&phase) {
                phases.push(phase);
            }
        }
    }
    assert!(transition.is_idle());
    phases
}

#[test]
fn a_transition_runs_fade_out_rotate_fade_in_exactly_once() {
    let timelines = dataset::load_embedded();
    let mut navigator = TimelineNavigator::new(timelines.len(), false);
    let mut rotation = CircleRotation::ZERO;

    let phases = run_transition(&mut navigator, &mut rotation, 2);

    assert_eq!(phases, vec![Phase::FadeOut, Phase::Rotate, Phase::FadeIn]);
    assert_eq!(navigator.active(), 2);
}

#[test]
fn phase_durations_sum_to_the_full_sequence_length() {
    let total = FADE_OUT_DURATION + ROTATE_DURATION + FADE_IN_DURATION;
    assert_eq!(total, Duration::from_millis(1500));
}

#[test]
fn rotation_commits_on_the_clicked_dot_slot() {
    let timelines = dataset::load_embedded();
    let count = timelines.len();
    let mut navigator = TimelineNavigator::new(count, false);
    let mut rotation = CircleRotation::ZERO;

    run_transition(&mut navigator, &mut rotation, 1);

    let expected = CircleRotation::target_for_index(1, count);
    let normalized = (rotation.degrees() - expected).rem_euclid(360.0);
    assert!(normalized.abs() < 1e-3 || (normalized - 360.0).abs() < 1e-3);
}

#[test]
fn consecutive_steps_accumulate_rotation_along_the_short_way() {
    let timelines = dataset::load_embedded();
    let count = timelines.len();
    let mut navigator = TimelineNavigator::new(count, false);
    let mut rotation = CircleRotation::ZERO;

    let mut previous = rotation.degrees();
    for step in 1..count {
        run_transition(&mut navigator, &mut rotation, step);
        let delta = rotation.degrees() - previous;
        assert!(
            delta.abs() <= 180.0 + 1e-3,
            "step {step} spun {delta} degrees"
        );
        previous = rotation.degrees();
    }
}

#[test]
fn stepper_never_leaves_the_dataset_without_wrap() {
    let timelines = dataset::load_embedded();
    let mut navigator = TimelineNavigator::new(timelines.len(), false);

    assert_eq!(navigator.previous(), None);
    for _ in 0..timelines.len() * 2 {
        navigator.next();
    }
    assert_eq!(navigator.active(), timelines.len() - 1);
    assert_eq!(navigator.next(), None);
}

#[test]
fn stepper_wraps_modularly_when_enabled() {
    let timelines = dataset::load_embedded();
    let count = timelines.len();
    let mut navigator = TimelineNavigator::new(count, true);

    assert_eq!(navigator.previous(), Some(count - 1));
    assert_eq!(navigator.next(), Some(0));
    assert_eq!(navigator.active(), 0);
}

#[test]
fn switching_timelines_resets_the_slider_to_the_first_card() {
    // The commit path issues a scroll-to-zero task; at offset zero the
    // start edge must be at rest and the first card fully visible.
    let timelines = dataset::load_embedded();
    let events = timelines.get(1).map(|t| t.events.len()).unwrap_or(0);

    let edge = compute_edge_state(0.0, 900.0, &card_extents(events));
    assert!(edge.is_at_start);
    assert!(edge.fully_visible.contains(&0));
}

#[test]
fn every_embedded_timeline_is_reachable_by_clicking_dots() {
    let timelines = dataset::load_embedded();
    let count = timelines.len();
    let mut navigator = TimelineNavigator::new(count, false);
    let mut rotation = CircleRotation::ZERO;

    for target in (0..count).rev() {
        if target == navigator.active() {
            continue;
        }
        run_transition(&mut navigator, &mut rotation, target);
        assert_eq!(navigator.active(), target);
    }
}
