//! Success reveal: a circle stroke followed by a checkmark stroke
//!
//! The checkmark starts before the circle is complete, at a fixed fraction of
//! the circle's duration. A finished reveal stays fully drawn until hidden.

use std::f32::consts::{FRAC_PI_2, TAU};
use std::time::Duration;

use iced::Point;

use super::{ArcSegment, HudState, HudStyle};

/// Fraction of the circle duration after which the checkmark starts
const CHECK_DELAY_FRACTION: f32 = 0.8;

/// Checkmark corners as fractions of the indicator width
const CHECK_POINTS: [(f32, f32); 3] = [(0.27, 0.54), (0.45, 0.70), (0.78, 0.38)];

#[derive(Debug, Clone)]
pub struct SuccessCheck {
    pub style: HudStyle,
    pub circle_duration: Duration,
    pub check_duration: Duration,
    state: HudState,
    elapsed: Duration,
}

impl Default for SuccessCheck {
    fn default() -> Self {
        Self::new(HudStyle::default())
    }
}

impl SuccessCheck {
    pub fn new(style: HudStyle) -> Self {
        Self {
            style,
            circle_duration: Duration::from_millis(500),
            check_duration: Duration::from_millis(200),
            state: HudState::Hidden,
            elapsed: Duration::ZERO,
        }
    }

    pub fn circle_duration(mut self, duration: Duration) -> Self {
        self.circle_duration = duration;
        self
    }

    pub fn check_duration(mut self, duration: Duration) -> Self {
        self.check_duration = duration;
        self
    }

    /// Restart the reveal from an empty circle
    pub fn show(&mut self) {
        self.state = HudState::Running;
        self.elapsed = Duration::ZERO;
    }

    pub fn hide(&mut self) {
        self.state = HudState::Hidden;
        self.elapsed = Duration::ZERO;
    }

    pub fn state(&self) -> HudState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == HudState::Running
    }

    pub fn advance(&mut self, delta: Duration) {
        if self.is_running() {
            self.elapsed = self.elapsed.saturating_add(delta);
        }
    }

    /// Time after `show` at which the checkmark starts drawing
    pub fn check_delay(&self) -> Duration {
        self.circle_duration.mul_f32(CHECK_DELAY_FRACTION)
    }

    /// Drawn share of the circle (0.0 - 1.0)
    pub fn circle_progress(&self) -> f32 {
        if !self.is_running() {
            return 0.0;
        }
        ratio(self.elapsed, self.circle_duration)
    }

    /// Drawn share of the checkmark (0.0 - 1.0)
    pub fn check_progress(&self) -> f32 {
        if !self.is_running() {
            return 0.0;
        }
        match self.elapsed.checked_sub(self.check_delay()) {
            Some(since_start) => ratio(since_start, self.check_duration),
            None => 0.0,
        }
    }

    /// Both strokes are complete
    pub fn is_finished(&self) -> bool {
        self.is_running() && self.circle_progress() >= 1.0 && self.check_progress() >= 1.0
    }

    /// Circle arc drawn so far, clockwise from the top
    pub fn circle_arc(&self) -> ArcSegment {
        let start = -FRAC_PI_2;
        self.style.track(start, start + self.circle_progress() * TAU)
    }

    /// Checkmark polyline drawn so far; empty before the checkmark starts
    pub fn check_stroke(&self) -> Vec<Point> {
        partial_polyline(&check_points(self.style.radius), self.check_progress())
    }
}

/// Full checkmark for an indicator of `width`
pub fn check_points(width: f32) -> [Point; 3] {
    CHECK_POINTS.map(|(x, y)| Point::new(width * x, width * y))
}

fn ratio(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f32() / duration.as_secs_f32()).clamp(0.0, 1.0)
}

/// Leading part of `points` covering `progress` of its total length
fn partial_polyline(points: &[Point], progress: f32) -> Vec<Point> {
    let Some(&first) = points.first() else {
        return Vec::new();
    };
    if progress <= 0.0 {
        return Vec::new();
    }
    if progress >= 1.0 {
        return points.to_vec();
    }

    let total: f32 = points.windows(2).map(|pair| pair[0].distance(pair[1])).sum();
    let mut remaining = total * progress;
    let mut stroke = vec![first];

    for pair in points.windows(2) {
        let length = pair[0].distance(pair[1]);
        if remaining >= length {
            stroke.push(pair[1]);
            remaining -= length;
        } else {
            if remaining > 0.0 && length > 0.0 {
                let t = remaining / length;
                stroke.push(pair[0] + (pair[1] - pair[0]) * t);
            }
            break;
        }
    }

    stroke
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running() -> SuccessCheck {
        let mut check = SuccessCheck::default();
        check.show();
        check
    }

    fn at(millis: u64) -> SuccessCheck {
        let mut check = running();
        check.advance(Duration::from_millis(millis));
        check
    }

    #[test]
    fn test_hidden_draws_nothing() {
        let mut check = SuccessCheck::default();
        check.advance(Duration::from_secs(2));

        assert_eq!(check.circle_progress(), 0.0);
        assert_eq!(check.check_progress(), 0.0);
        assert!(check.circle_arc().is_empty());
        assert!(check.check_stroke().is_empty());
        assert!(!check.is_finished());
    }

    #[test]
    fn test_timeline() {
        let check = at(250);
        assert!((check.circle_progress() - 0.5).abs() < 1e-3);
        assert_eq!(check.check_progress(), 0.0);

        // Checkmark starts at 80% of the circle duration
        let check = at(390);
        assert_eq!(check.check_progress(), 0.0);

        let check = at(500);
        assert_eq!(check.circle_progress(), 1.0);
        assert!((check.check_progress() - 0.5).abs() < 1e-2);
        assert!(!check.is_finished());

        let check = at(650);
        assert!(check.is_finished());
    }

    #[test]
    fn test_finished_reveal_stays_drawn() {
        let check = at(5_000);
        assert!(check.is_finished());
        assert_eq!(check.check_stroke().as_slice(), &check_points(60.0));
        assert!((check.circle_arc().sweep() - TAU).abs() < 1e-4);
    }

    #[test]
    fn test_show_restarts_and_hide_clears() {
        let mut check = at(5_000);
        check.show();
        assert_eq!(check.circle_progress(), 0.0);

        check.hide();
        check.advance(Duration::from_millis(100));
        assert_eq!(check.state(), HudState::Hidden);
        assert_eq!(check.circle_progress(), 0.0);
    }

    #[test]
    fn test_zero_durations_complete_immediately() {
        let mut check = SuccessCheck::default()
            .circle_duration(Duration::ZERO)
            .check_duration(Duration::ZERO);
        check.show();

        assert!(check.is_finished());
    }

    #[test]
    fn test_partial_checkmark_follows_arc_length() {
        let points = check_points(100.0);
        let first_leg = points[0].distance(points[1]);
        let total = first_leg + points[1].distance(points[2]);

        let half_first_leg = partial_polyline(&points, first_leg / 2.0 / total);
        assert_eq!(half_first_leg.len(), 2);
        let expected = Point::new(
            (points[0].x + points[1].x) / 2.0,
            (points[0].y + points[1].y) / 2.0,
        );
        assert!(half_first_leg[1].distance(expected) < 1e-3);

        let into_second_leg = partial_polyline(&points, 0.9);
        assert_eq!(into_second_leg.len(), 3);
        assert_eq!(into_second_leg[1], points[1]);
    }

    #[test]
    fn test_check_points_scale_with_width() {
        let points = check_points(100.0);
        assert!(points[0].distance(Point::new(27.0, 54.0)) < 1e-3);
        assert!(points[1].distance(Point::new(45.0, 70.0)) < 1e-3);
        assert!(points[2].distance(Point::new(78.0, 38.0)) < 1e-3);
    }
}
