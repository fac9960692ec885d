// SPDX-License-Identifier: MPL-2.0
//! Committed rotation angle for the circular navigator.
//!
//! The navigator always spins by the shortest arc. This type stores the
//! last committed angle explicitly and computes the normalized delta to any
//! target, so no transition ever needs to read an angle back from a live
//! animation.

/// Committed rotation of the navigator circle, in degrees.
///
/// The stored value accumulates across transitions (it is not wrapped into
/// `[0, 360)`), which keeps consecutive shortest-arc spins continuous.
///
/// # Example
///
/// ```
/// use iced_chronicle::ui::state::CircleRotation;
///
/// let rotation = CircleRotation::ZERO;
/// let target = CircleRotation::target_for_index(1, 4);
/// assert_eq!(target, -90.0);
/// assert_eq!(rotation.shortest_delta(target), -90.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CircleRotation(f32);

impl CircleRotation {
    /// No rotation; index 0 sits at the start angle.
    pub const ZERO: Self = Self(0.0);

    #[must_use]
    pub fn new(degrees: f32) -> Self {
        Self(degrees)
    }

    /// Returns the committed angle in degrees.
    #[must_use]
    pub fn degrees(self) -> f32 {
        self.0
    }

    /// Target angle that brings `index` of `count` dots to the active
    /// position: `-(index / count) * 360`.
    #[must_use]
    pub fn target_for_index(index: usize, count: usize) -> f32 {
        debug_assert!(count > 0);
        -(index as f32 / count as f32) * 360.0
    }

    /// Shortest angular delta from the committed angle to `target`,
    /// normalized into `(-180, 180]`.
    #[must_use]
    pub fn shortest_delta(self, target: f32) -> f32 {
        let mut delta = (target - self.0) % 360.0;
        if delta > 180.0 {
            delta -= 360.0;
        }
        if delta <= -180.0 {
            delta += 360.0;
        }
        delta
    }

    /// Absolute angle the circle lands on when spinning to `target` by the
    /// shortest arc. This becomes the next committed value.
    #[must_use]
    pub fn spun_to(self, target: f32) -> Self {
        Self(self.0 + self.shortest_delta(target))
    }
}

impl Default for CircleRotation {
    fn default() -> Self {
        Self::ZERO
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn target_for_index_spreads_evenly() {
        assert!((CircleRotation::target_for_index(0, 6)).abs() < EPS);
        assert!((CircleRotation::target_for_index(1, 6) + 60.0).abs() < EPS);
        assert!((CircleRotation::target_for_index(3, 6) + 180.0).abs() < EPS);
        assert!((CircleRotation::target_for_index(5, 6) + 300.0).abs() < EPS);
    }

    #[test]
    fn shortest_delta_stays_in_half_open_range() {
        for committed in -720..=720 {
            for target in -720..=720 {
                if (committed % 90 != 0) || (target % 90 != 0) {
                    continue;
                }
                let rotation = CircleRotation::new(committed as f32);
                let delta = rotation.shortest_delta(target as f32);
                assert!(delta > -180.0 - EPS, "delta {delta} out of range");
                assert!(delta <= 180.0 + EPS, "delta {delta} out of range");
            }
        }
    }

    #[test]
    fn shortest_delta_prefers_short_arc() {
        // Jumping from index 0 to the last of 6 dots spins +60, not -300.
        let rotation = CircleRotation::ZERO;
        let target = CircleRotation::target_for_index(5, 6);
        assert!((rotation.shortest_delta(target) - 60.0).abs() < EPS);
    }

    #[test]
    fn half_turn_resolves_to_positive_180() {
        let rotation = CircleRotation::ZERO;
        assert!((rotation.shortest_delta(-180.0) - 180.0).abs() < EPS);
        assert!((rotation.shortest_delta(180.0) - 180.0).abs() < EPS);
    }

    #[test]
    fn spun_to_accumulates_committed_angle() {
        let rotation = CircleRotation::ZERO
            .spun_to(CircleRotation::target_for_index(5, 6))
            .spun_to(CircleRotation::target_for_index(4, 6));
        // 0 -> +60 -> +120: two short forward arcs, no 300-degree spins.
        assert!((rotation.degrees() - 120.0).abs() < EPS);
    }

    #[test]
    fn spun_to_same_target_is_identity() {
        let rotation = CircleRotation::new(-120.0);
        let spun = rotation.spun_to(-120.0);
        assert!((spun.degrees() - rotation.degrees()).abs() < EPS);
    }

    #[test]
    fn delta_between_equivalent_angles_is_zero() {
        let rotation = CircleRotation::new(360.0);
        assert!(rotation.shortest_delta(0.0).abs() < EPS);
        let rotation = CircleRotation::new(-360.0);
        assert!(rotation.shortest_delta(0.0).abs() < EPS);
    }
}
