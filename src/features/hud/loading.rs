//! Spinning loading arc
//!
//! The arc grows clockwise from the top. Once its head passes the half-circle
//! mark the growth slows down and the tail starts chasing the head, so the arc
//! eases out and collapses before the cycle restarts.

use std::f32::consts::{FRAC_PI_2, PI, TAU};
use std::time::Duration;

use super::{ArcSegment, HudState, HudStyle};

/// Frame rate the per-frame speeds are expressed in
const REFERENCE_FPS: f32 = 60.0;

/// Progress gained per reference frame, divided by the radius
const GROW_SPEED: f32 = 2.0;
const EASE_OUT_SPEED: f32 = 0.3;

/// Share of the cycle during which the tail catches up with the head
const TAIL_SHARE: f32 = 0.25;

#[derive(Debug, Clone)]
pub struct LoadingSpinner {
    pub style: HudStyle,
    state: HudState,
    progress: f32,
    start_angle: f32,
    end_angle: f32,
}

impl Default for LoadingSpinner {
    fn default() -> Self {
        Self::new(HudStyle::default())
    }
}

impl LoadingSpinner {
    pub fn new(style: HudStyle) -> Self {
        Self {
            style,
            state: HudState::Hidden,
            progress: 0.0,
            start_angle: -FRAC_PI_2,
            end_angle: -FRAC_PI_2,
        }
    }

    /// Start spinning from an empty arc
    pub fn show(&mut self) {
        self.reset();
        self.state = HudState::Running;
    }

    /// Stop spinning and forget the current cycle
    pub fn hide(&mut self) {
        self.reset();
        self.state = HudState::Hidden;
    }

    pub fn state(&self) -> HudState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == HudState::Running
    }

    /// Position in the current cycle (0.0 - 1.0)
    pub fn progress(&self) -> f32 {
        self.progress
    }

    pub fn start_angle(&self) -> f32 {
        self.start_angle
    }

    pub fn end_angle(&self) -> f32 {
        self.end_angle
    }

    /// Advance the animation by `delta`
    pub fn advance(&mut self, delta: Duration) {
        if !self.is_running() {
            return;
        }

        let frames = delta.as_secs_f32() * REFERENCE_FPS;
        self.progress += self.speed() * frames;
        if self.progress >= 1.0 {
            self.progress = 0.0;
        }
        self.update_angles();
    }

    /// Arc to stroke for the current frame
    pub fn arc(&self) -> ArcSegment {
        self.style.track(self.start_angle, self.end_angle)
    }

    /// Progress per reference frame; small indicators spin faster
    fn speed(&self) -> f32 {
        let radius = self.style.radius.max(1.0);
        if self.end_angle > PI {
            EASE_OUT_SPEED / radius
        } else {
            GROW_SPEED / radius
        }
    }

    fn update_angles(&mut self) {
        self.start_angle = -FRAC_PI_2;
        self.end_angle = -FRAC_PI_2 + self.progress * TAU;

        if self.end_angle > PI {
            let tail = 1.0 - (1.0 - self.progress) / TAIL_SHARE;
            self.start_angle = -FRAC_PI_2 + tail * TAU;
        }
    }

    fn reset(&mut self) {
        self.progress = 0.0;
        self.start_angle = -FRAC_PI_2;
        self.end_angle = -FRAC_PI_2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_nanos(16_666_667);

    fn running(radius: f32) -> LoadingSpinner {
        let mut spinner = LoadingSpinner::new(HudStyle::default().radius(radius));
        spinner.show();
        spinner
    }

    #[test]
    fn test_hidden_spinner_does_not_move() {
        let mut spinner = LoadingSpinner::default();
        spinner.advance(Duration::from_secs(1));

        assert_eq!(spinner.state(), HudState::Hidden);
        assert_eq!(spinner.progress(), 0.0);
        assert!(spinner.arc().is_empty());
    }

    #[test]
    fn test_one_frame_grows_by_two_over_radius() {
        let mut spinner = running(60.0);
        spinner.advance(FRAME);

        assert!((spinner.progress() - 2.0 / 60.0).abs() < 1e-4);
        assert_eq!(spinner.start_angle(), -FRAC_PI_2);
        assert!((spinner.end_angle() - (-FRAC_PI_2 + spinner.progress() * TAU)).abs() < 1e-5);
    }

    #[test]
    fn test_smaller_radius_spins_faster() {
        let mut small = running(30.0);
        let mut large = running(120.0);
        small.advance(FRAME);
        large.advance(FRAME);

        assert!(small.progress() > large.progress());
    }

    #[test]
    fn test_ease_out_after_half_circle() {
        let mut spinner = running(60.0);
        while spinner.end_angle() <= PI {
            spinner.advance(FRAME);
        }
        let before = spinner.progress();
        spinner.advance(FRAME);

        assert!((spinner.progress() - before - 0.3 / 60.0).abs() < 1e-4);
        // Tail has started chasing the head
        assert!(spinner.start_angle() > -FRAC_PI_2);
    }

    #[test]
    fn test_arc_never_inverts_and_cycle_wraps() {
        let mut spinner = running(60.0);
        let mut wrapped = false;
        let mut previous = 0.0;

        for _ in 0..2_000 {
            spinner.advance(FRAME);
            assert!(spinner.end_angle() >= spinner.start_angle());
            assert!((0.0..1.0).contains(&spinner.progress()));
            if spinner.progress() < previous {
                wrapped = true;
            }
            previous = spinner.progress();
        }
        assert!(wrapped);
    }

    #[test]
    fn test_hide_resets_cycle() {
        let mut spinner = running(60.0);
        for _ in 0..10 {
            spinner.advance(FRAME);
        }
        spinner.hide();

        assert!(!spinner.is_running());
        assert_eq!(spinner.progress(), 0.0);
        assert_eq!(spinner.start_angle(), spinner.end_angle());

        spinner.show();
        assert!(spinner.is_running());
        assert_eq!(spinner.progress(), 0.0);
    }

    #[test]
    fn test_arc_is_inset_by_half_line_width() {
        let spinner = LoadingSpinner::new(HudStyle::default().radius(100.0).line_width(4.0));
        let arc = spinner.arc();

        assert_eq!(arc.center, iced::Point::new(50.0, 50.0));
        assert_eq!(arc.radius, 48.0);
    }
}
