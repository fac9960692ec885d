// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! This module contains the animation state logic separated from the main App
//! struct, following the principle of separation of concerns.

pub mod easing;
pub mod rotation;
pub mod transition;

// Re-export commonly used types for convenience
pub use rotation::CircleRotation;
pub use transition::{Phase, Step, Transition};
