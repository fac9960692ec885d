// SPDX-License-Identifier: MPL-2.0
//! Circular navigator: one selectable dot per timeline, evenly spaced on a
//! ring, spun as a whole by the transition's rotation angle.
//!
//! The dots are drawn at rotated *positions* while their ordinals and the
//! active title stay upright text, so no counter-rotation is needed to keep
//! labels readable mid-spin.

use crate::timeline::TimelineSet;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::theme;
use iced::alignment::Vertical;
use iced::widget::canvas::{self, Canvas, Frame, Path, Stroke, Text};
use iced::widget::text::{Alignment as TextAlignment, Shaping};
use iced::{mouse, Element, Length, Point, Rectangle, Renderer, Theme};

/// Angle (degrees) at which index 0 sits while the rotation is zero: the
/// canonical active position on the upper right of the ring.
pub const START_ANGLE_DEG: f32 = -60.0;

/// Hit radius for clicking an inactive dot.
const DOT_HIT_RADIUS: f32 = 16.0;

/// Messages emitted by the navigator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// A dot was clicked; request that timeline become active.
    DotClicked(usize),
}

/// Contextual data needed to render the navigator.
pub struct ViewContext<'a> {
    pub timelines: &'a TimelineSet,
    pub active: usize,
    /// Current circle rotation in degrees (committed or mid-transition).
    pub rotation_degrees: f32,
    /// Whether the active title label is shown (hidden mid-spin).
    pub show_title: bool,
}

/// Render the circular navigator canvas.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    Canvas::new(Program {
        timelines: ctx.timelines,
        active: ctx.active,
        rotation_degrees: ctx.rotation_degrees,
        show_title: ctx.show_title,
    })
    .width(Length::Fixed(sizing::CIRCLE_CANVAS))
    .height(Length::Fixed(sizing::CIRCLE_CANVAS))
    .into()
}

struct Program<'a> {
    timelines: &'a TimelineSet,
    active: usize,
    rotation_degrees: f32,
    show_title: bool,
}

impl Program<'_> {
    /// Position of the dot for `index`, in canvas coordinates.
    fn dot_position(&self, index: usize, bounds: Rectangle) -> Point {
        let center = Point::new(bounds.width / 2.0, bounds.height / 2.0);
        let angle = dot_angle_degrees(index, self.timelines.len(), self.rotation_degrees)
            .to_radians();
        Point::new(
            center.x + sizing::CIRCLE_RADIUS * angle.cos(),
            center.y + sizing::CIRCLE_RADIUS * angle.sin(),
        )
    }

    fn hit_test(&self, cursor_position: Point, bounds: Rectangle) -> Option<usize> {
        (0..self.timelines.len()).find(|&index| {
            let dot = self.dot_position(index, bounds);
            let radius = if index == self.active {
                sizing::DOT_ACTIVE_RADIUS
            } else {
                DOT_HIT_RADIUS
            };
            distance(cursor_position, dot) <= radius
        })
    }
}

/// Absolute angle (degrees) of the dot for `index` given the current circle
/// rotation: evenly spaced from the configured start angle.
#[must_use]
pub fn dot_angle_degrees(index: usize, count: usize, rotation_degrees: f32) -> f32 {
    debug_assert!(count > 0);
    START_ANGLE_DEG + rotation_degrees + (index as f32 / count as f32) * 360.0
}

fn distance(a: Point, b: Point) -> f32 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

impl canvas::Program<Message> for Program<'_> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<iced::widget::Action<Message>> {
        use iced::widget::Action;

        if let iced::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) = event {
            if let Some(cursor_position) = cursor.position_in(bounds) {
                if let Some(index) = self.hit_test(cursor_position, bounds) {
                    return Some(Action::publish(Message::DotClicked(index)).and_capture());
                }
            }
        }

        None
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let center = frame.center();

        // Faint ring the dots sit on.
        let ring = Path::circle(center, sizing::CIRCLE_RADIUS);
        frame.stroke(
            &ring,
            Stroke::default()
                .with_width(1.0)
                .with_color(theme::ring_color()),
        );

        let hovered = cursor
            .position_in(bounds)
            .and_then(|position| self.hit_test(position, bounds));

        for (index, timeline) in self.timelines.iter().enumerate() {
            let position = self.dot_position(index, bounds);
            let expanded = index == self.active || hovered == Some(index);

            if expanded {
                // Expanded dot: paper disc with an ink outline and the
                // 1-based ordinal inside.
                let disc = Path::circle(position, sizing::DOT_ACTIVE_RADIUS);
                frame.fill(&disc, palette::PAPER);
                frame.stroke(
                    &disc,
                    Stroke::default()
                        .with_width(1.0)
                        .with_color(theme::ring_color()),
                );
                frame.fill_text(Text {
                    content: format!("{}", index + 1),
                    position,
                    color: theme::ink_color(),
                    size: typography::TITLE_SM.into(),
                    align_x: TextAlignment::Center,
                    align_y: Vertical::Center,
                    ..Text::default()
                });
            } else {
                let dot = Path::circle(position, sizing::DOT_RADIUS);
                frame.fill(&dot, theme::ink_color());
            }

            if index == self.active && self.show_title {
                frame.fill_text(Text {
                    content: timeline.title.clone(),
                    position: Point::new(
                        position.x + sizing::DOT_ACTIVE_RADIUS + spacing::MD,
                        position.y,
                    ),
                    color: theme::ink_color(),
                    size: typography::TITLE_MD.into(),
                    align_x: TextAlignment::Left,
                    align_y: Vertical::Center,
                    shaping: Shaping::Advanced,
                    ..Text::default()
                });
            }
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        let over_dot = cursor
            .position_in(bounds)
            .and_then(|position| self.hit_test(position, bounds))
            .is_some();

        if over_dot {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-4;

    #[test]
    fn dots_are_evenly_spaced() {
        let count = 6;
        for index in 0..count {
            let angle = dot_angle_degrees(index, count, 0.0);
            let expected = START_ANGLE_DEG + index as f32 * 60.0;
            assert!((angle - expected).abs() < EPS);
        }
    }

    #[test]
    fn rotation_moves_target_dot_to_start_angle() {
        // Rotating to -(index/count)*360 puts that dot at the start angle.
        let count = 6;
        for index in 0..count {
            let rotation = -(index as f32 / count as f32) * 360.0;
            let angle = dot_angle_degrees(index, count, rotation);
            assert!((angle - START_ANGLE_DEG).abs() < EPS);
        }
    }

    #[test]
    fn distance_is_euclidean() {
        let d = distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert!((d - 5.0).abs() < EPS);
    }
}
