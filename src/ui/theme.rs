// SPDX-License-Identifier: MPL-2.0
//! Shared UI color helpers for the timeline page.

use crate::ui::design_tokens::{opacity, palette};
use iced::Color;

/// Base ink color for titles, counters and card text.
pub fn ink_color() -> Color {
    palette::INK_900
}

/// Color of the big interpolating start year.
pub fn year_start_color() -> Color {
    palette::IRIS_500
}

/// Color of the big interpolating end year.
pub fn year_end_color() -> Color {
    palette::FUCHSIA_500
}

/// Secondary text (timeline title label, counter).
pub fn muted_text_color() -> Color {
    palette::GRAY_400
}

/// Accent color for event card years.
pub fn card_year_color() -> Color {
    palette::IRIS_500
}

/// Applies an opacity multiplier to a color, used by the transition fade
/// and the dimming of partially visible cards.
pub fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha.clamp(0.0, 1.0),
        ..color
    }
}

/// Color of the faint navigator ring.
pub fn ring_color() -> Color {
    faded(palette::INK_900, opacity::RING)
}
