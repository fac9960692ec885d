// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme, Vector};

fn soft_shadow() -> Shadow {
    Shadow {
        color: Color {
            a: 0.1,
            ..palette::INK_900
        },
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 8.0,
    }
}

/// Round stepper button (previous/next timeline). Outlined circle with an
/// ink arrow; fades when disabled at a boundary.
pub fn stepper(_theme: &Theme, status: button::Status) -> button::Style {
    let (border_alpha, text_alpha) = match status {
        button::Status::Disabled => (opacity::DISABLED, opacity::DISABLED),
        button::Status::Hovered | button::Status::Pressed => (1.0, 1.0),
        _ => (0.6, 1.0),
    };

    button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: Color {
            a: text_alpha,
            ..palette::INK_900
        },
        border: Border {
            color: Color {
                a: border_alpha,
                ..palette::INK_900
            },
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: Shadow::default(),
        snap: true,
    }
}

/// Small round edge button at the sides of the event strip. White disc with
/// a drop shadow and an accent arrow; invisible-ish when disabled.
pub fn slider_edge(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Disabled => button::Style {
            background: Some(Background::Color(Color::TRANSPARENT)),
            text_color: Color {
                a: opacity::TRANSPARENT,
                ..palette::IRIS_500
            },
            border: Border::default(),
            shadow: Shadow::default(),
            snap: true,
        },
        status => button::Style {
            background: Some(Background::Color(Color::WHITE)),
            text_color: palette::IRIS_500,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: if matches!(status, button::Status::Hovered) {
                Shadow {
                    blur_radius: 12.0,
                    ..soft_shadow()
                }
            } else {
                soft_shadow()
            },
            snap: true,
        },
    }
}

/// Pagination dot under the event strip. The active dot is solid ink, the
/// rest are faded and brighten under the cursor.
pub fn pagination_dot(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let alpha = if active {
            opacity::OPAQUE
        } else {
            match status {
                button::Status::Hovered => 0.7,
                _ => opacity::DISABLED,
            }
        };

        button::Style {
            background: Some(Background::Color(Color {
                a: alpha,
                ..palette::INK_900
            })),
            text_color: Color::TRANSPARENT,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            shadow: Shadow::default(),
            snap: true,
        }
    }
}
