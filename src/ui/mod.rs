// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based
//! architecture with the Elm-style "state down, messages up" pattern.
//!
//! # Components
//!
//! - [`circle_nav`] - Circular navigator with one selectable dot per timeline
//! - [`event_slider`] - Horizontally scrolling strip of event cards
//! - [`controls`] - Position counter and previous/next stepper
//!
//! # Shared Infrastructure
//!
//! - [`state`] - Animation state (rotation, transition, easing)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theme`] - Theme colors and styling helpers

pub mod circle_nav;
pub mod controls;
pub mod design_tokens;
pub mod event_slider;
pub mod state;
pub mod styles;
pub mod theme;
