//! Payment status HUD primitives
//!
//! Draws the loading arc and the success circle with its checkmark using
//! iced's Canvas. The indicators only carry state; this module turns their
//! current frame into strokes.

use iced::widget::Canvas;
use iced::widget::canvas::{self, Frame, Geometry, LineCap, LineJoin, Path, Program, Stroke};
use iced::{Color, Element, Point, Radians, Rectangle, Renderer, Theme, mouse};

use crate::features::hud::{ArcSegment, LoadingSpinner, SuccessCheck};

/// Snapshot of one indicator frame
#[derive(Debug, Clone)]
pub struct HudIndicator {
    arc: ArcSegment,
    check: Vec<Point>,
    line_width: f32,
    color: Color,
}

impl HudIndicator {
    pub fn loading(spinner: &LoadingSpinner) -> Self {
        Self {
            arc: spinner.arc(),
            check: Vec::new(),
            line_width: spinner.style.line_width,
            color: spinner.style.stroke_color,
        }
    }

    pub fn success(check: &SuccessCheck) -> Self {
        Self {
            arc: check.circle_arc(),
            check: check.check_stroke(),
            line_width: check.style.line_width,
            color: check.style.stroke_color,
        }
    }

    /// Multiply the stroke alpha, used by the overlay fade
    pub fn opacity(mut self, opacity: f32) -> Self {
        self.color = crate::ui::theme::with_opacity(self.color, opacity);
        self
    }

    fn stroke(&self) -> Stroke<'static> {
        Stroke::default()
            .with_width(self.line_width)
            .with_color(self.color)
            .with_line_cap(LineCap::Round)
            .with_line_join(LineJoin::Round)
    }
}

fn arc_path(arc: &ArcSegment) -> Path {
    Path::new(|builder| {
        builder.arc(canvas::path::Arc {
            center: arc.center,
            radius: arc.radius,
            start_angle: Radians(arc.start_angle),
            end_angle: Radians(arc.end_angle),
        });
    })
}

fn polyline_path(points: &[Point]) -> Option<Path> {
    let (first, rest) = points.split_first()?;
    if rest.is_empty() {
        return None;
    }

    Some(Path::new(|builder| {
        builder.move_to(*first);
        for point in rest {
            builder.line_to(*point);
        }
    }))
}

impl<Message> Program<Message> for HudIndicator {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        if !self.arc.is_empty() {
            frame.stroke(&arc_path(&self.arc), self.stroke());
        }
        if let Some(check) = polyline_path(&self.check) {
            frame.stroke(&check, self.stroke());
        }

        vec![frame.into_geometry()]
    }
}

/// Loading arc sized to the spinner's square
pub fn view_loading<'a, Message: 'a>(spinner: &LoadingSpinner, opacity: f32) -> Element<'a, Message> {
    let side = spinner.style.radius.max(0.0);
    Canvas::new(HudIndicator::loading(spinner).opacity(opacity))
        .width(side)
        .height(side)
        .into()
}

/// Success circle and checkmark sized to the indicator's square
pub fn view_success<'a, Message: 'a>(check: &SuccessCheck, opacity: f32) -> Element<'a, Message> {
    let side = check.style.radius.max(0.0);
    Canvas::new(HudIndicator::success(check).opacity(opacity))
        .width(side)
        .height(side)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_single_point_is_not_a_stroke() {
        assert!(polyline_path(&[]).is_none());
        assert!(polyline_path(&[Point::ORIGIN]).is_none());
        assert!(polyline_path(&[Point::ORIGIN, Point::new(1.0, 1.0)]).is_some());
    }

    #[test]
    fn test_success_snapshot_follows_reveal() {
        let mut check = SuccessCheck::default();
        check.show();
        check.advance(Duration::from_secs(1));

        let indicator = HudIndicator::success(&check).opacity(0.5);
        assert_eq!(indicator.check.len(), 3);
        assert!((indicator.color.a - 0.5).abs() < 1e-6);
    }
}
