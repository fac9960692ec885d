// SPDX-License-Identifier: MPL-2.0
//! Easing curves for the timeline transition.
//!
//! Pure functions over a normalized progress value in `[0, 1]`. Inputs are
//! clamped, so callers can feed raw elapsed/duration ratios.

use std::f32::consts::PI;

/// Linear interpolation between `a` and `b`.
#[must_use]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t.clamp(0.0, 1.0)
}

/// Quadratic ease-in: slow start.
#[must_use]
pub fn power1_in(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t
}

/// Quadratic ease-out: slow finish.
#[must_use]
pub fn power1_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t) * (1.0 - t)
}

/// Cubic ease-in-out: slow at both ends, used for the circle rotation.
#[must_use]
pub fn power2_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u * u / 2.0
    }
}

/// Sinusoidal ease-in-out, used for the year counter interpolation.
#[must_use]
pub fn sine_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    -((PI * t).cos() - 1.0) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_endpoints(ease: fn(f32) -> f32) {
        assert!((ease(0.0)).abs() < EPS);
        assert!((ease(1.0) - 1.0).abs() < EPS);
    }

    #[test]
    fn all_curves_hit_their_endpoints() {
        assert_endpoints(power1_in);
        assert_endpoints(power1_out);
        assert_endpoints(power2_in_out);
        assert_endpoints(sine_in_out);
    }

    #[test]
    fn curves_are_monotonic() {
        for ease in [power1_in, power1_out, power2_in_out, sine_in_out] {
            let mut previous = 0.0;
            for step in 0..=100 {
                let value = ease(step as f32 / 100.0);
                assert!(value >= previous - EPS);
                previous = value;
            }
        }
    }

    #[test]
    fn inputs_are_clamped() {
        assert!((power2_in_out(-1.0)).abs() < EPS);
        assert!((power2_in_out(2.0) - 1.0).abs() < EPS);
        assert!((lerp(10.0, 20.0, 2.0) - 20.0).abs() < EPS);
    }

    #[test]
    fn in_out_curves_cross_midpoint() {
        assert!((power2_in_out(0.5) - 0.5).abs() < EPS);
        assert!((sine_in_out(0.5) - 0.5).abs() < EPS);
    }

    #[test]
    fn lerp_interpolates_years() {
        assert!((lerp(2015.0, 2022.0, 0.0) - 2015.0).abs() < EPS);
        assert!((lerp(2015.0, 2022.0, 1.0) - 2022.0).abs() < EPS);
        assert!((lerp(2015.0, 2022.0, 0.5) - 2018.5).abs() < EPS);
    }
}
