//! Payment status HUD state machines
//!
//! Both indicators are plain state objects. A driver hands them the time
//! elapsed since the previous frame through `advance`, which keeps the
//! animation math independent of the timing source.

pub mod loading;
pub mod success;

use iced::{Color, Point, color};

pub use loading::LoadingSpinner;
pub use success::SuccessCheck;

/// Default stroke color of both indicators
pub const DEFAULT_STROKE: Color = color!(0x108ee9);

/// Visibility of an indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HudState {
    #[default]
    Hidden,
    Running,
}

/// Appearance shared by both indicators
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HudStyle {
    /// Side length of the square the indicator is drawn in
    pub radius: f32,
    pub line_width: f32,
    pub stroke_color: Color,
}

impl Default for HudStyle {
    fn default() -> Self {
        Self {
            radius: 60.0,
            line_width: 4.0,
            stroke_color: DEFAULT_STROKE,
        }
    }
}

impl HudStyle {
    pub fn radius(mut self, radius: f32) -> Self {
        self.radius = radius;
        self
    }

    pub fn line_width(mut self, width: f32) -> Self {
        self.line_width = width;
        self
    }

    pub fn stroke_color(mut self, color: Color) -> Self {
        self.stroke_color = color;
        self
    }

    /// Circle the stroke runs along, inset so the line stays inside the square
    fn track(&self, start_angle: f32, end_angle: f32) -> ArcSegment {
        let half = self.radius.max(0.0) / 2.0;
        ArcSegment {
            center: Point::new(half, half),
            radius: (half - self.line_width / 2.0).max(0.0),
            start_angle,
            end_angle,
        }
    }
}

/// Clockwise arc in the indicator's local square, angles in radians
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSegment {
    pub center: Point,
    pub radius: f32,
    pub start_angle: f32,
    pub end_angle: f32,
}

impl ArcSegment {
    pub fn sweep(&self) -> f32 {
        self.end_angle - self.start_angle
    }

    pub fn is_empty(&self) -> bool {
        self.sweep() <= f32::EPSILON || self.radius <= 0.0
    }
}
