//! Overlay fade using iced_anim

use std::time::{Duration, Instant};

use iced_anim::Animated;
use iced_anim::transition::Easing;

const FADE_DURATION: Duration = Duration::from_millis(200);

fn fade_easing() -> Easing {
    Easing::EASE.with_duration(FADE_DURATION)
}

/// Opacity of an overlay that fades in when shown and disappears at once when hidden
#[derive(Debug)]
pub struct FadeAnimation {
    animation: Animated<f32>,
}

impl Default for FadeAnimation {
    fn default() -> Self {
        Self::new()
    }
}

impl FadeAnimation {
    pub fn new() -> Self {
        Self {
            animation: Animated::transition(0.0, fade_easing()),
        }
    }

    /// Restart the fade from fully transparent
    pub fn fade_in(&mut self) {
        self.animation = Animated::transition(0.0, fade_easing());
        self.animation.update(1.0.into());
    }

    /// Drop to fully transparent without animating
    pub fn reset(&mut self) {
        self.animation = Animated::transition(0.0, fade_easing());
    }

    /// Current opacity (0.0 to 1.0)
    pub fn opacity(&self) -> f32 {
        self.animation.value().clamp(0.0, 1.0)
    }

    pub fn is_animating(&self) -> bool {
        self.animation.is_animating()
    }

    /// Must be called on each animation frame to update values
    pub fn tick(&mut self, now: Instant) {
        self.animation.tick(now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_transparent() {
        let fade = FadeAnimation::new();
        assert_eq!(fade.opacity(), 0.0);
        assert!(!fade.is_animating());
    }

    #[test]
    fn test_fade_in_reaches_full_opacity() {
        let mut fade = FadeAnimation::new();
        fade.fade_in();
        assert!(fade.is_animating());

        // Frames at 60 fps until well past the fade duration
        let start = Instant::now();
        for frame in 1..=40 {
            fade.tick(start + Duration::from_millis(16 * frame));
            assert!((0.0..=1.0).contains(&fade.opacity()));
        }

        assert!((fade.opacity() - 1.0).abs() < 1e-3);
        assert!(!fade.is_animating());
    }

    #[test]
    fn test_reset_is_immediate() {
        let mut fade = FadeAnimation::new();
        fade.fade_in();
        fade.reset();

        assert_eq!(fade.opacity(), 0.0);
        assert!(!fade.is_animating());
    }
}
