//! Rating aggregation
//!
//! Splits a rating into per-star fill levels and maps a horizontal touch
//! position back onto a rating. Both directions quantize through [`FillMode`].
//!
//! Ties at exactly half a step round up: `0.5` becomes a whole star in
//! [`FillMode::Full`] and `0.25` becomes half a star in [`FillMode::Half`].

use iced::{Point, Size};
use serde::{Deserialize, Serialize};

use super::geometry::clamp_or_min;

/// How a star's continuous fill level is quantized for display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FillMode {
    /// Whole stars only
    Full,
    /// Half-star steps
    Half,
    /// Any fill level
    #[default]
    Precise,
}

impl FillMode {
    /// Get all fill modes
    pub fn all() -> [Self; 3] {
        [Self::Full, Self::Half, Self::Precise]
    }

    /// Quantize a single star's fill level; input is clamped to `[0, 1]` first
    pub fn round(self, level: f32) -> f32 {
        let level = clamp_or_min(level, 0.0, 1.0);
        match self {
            Self::Full => round_half_up(level),
            Self::Half => round_half_up(level * 2.0) / 2.0,
            Self::Precise => level,
        }
    }

    /// Offset added to a touch position so the star under the finger is selected
    fn touch_bias(self) -> f32 {
        match self {
            Self::Full => 0.45,
            Self::Half => 0.20,
            Self::Precise => 0.0,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Full => "Full stars",
            Self::Half => "Half stars",
            Self::Precise => "Precise",
        }
    }
}

impl std::fmt::Display for FillMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

fn round_half_up(value: f32) -> f32 {
    (value + 0.5).floor()
}

/// Largest number of stars a row holds; larger counts are clamped
pub const MAX_STARS: usize = 20;

/// Horizontal arrangement of a row of stars
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RatingLayout {
    pub star_count: usize,
    pub star_size: f32,
    pub star_margin: f32,
}

impl Default for RatingLayout {
    fn default() -> Self {
        Self {
            star_count: 5,
            star_size: 40.0,
            star_margin: 6.0,
        }
    }
}

impl RatingLayout {
    pub fn new(star_count: usize, star_size: f32, star_margin: f32) -> Self {
        Self {
            star_count,
            star_size,
            star_margin,
        }
        .sanitized()
    }

    /// Copy with at most [`MAX_STARS`] stars and size and margin forced to
    /// finite, non-negative values
    pub fn sanitized(&self) -> Self {
        let non_negative = |value: f32| if value.is_finite() { value.max(0.0) } else { 0.0 };
        Self {
            star_count: self.star_count.min(MAX_STARS),
            star_size: non_negative(self.star_size),
            star_margin: non_negative(self.star_margin),
        }
    }

    /// Distance between the left edges of two neighbouring stars
    pub fn stride(&self) -> f32 {
        self.star_size + self.star_margin
    }

    /// Top-left corner of star `index`
    pub fn star_origin(&self, index: usize) -> Point {
        Point::new(index as f32 * self.stride(), 0.0)
    }

    /// Size needed to show every star without trailing margin
    pub fn intrinsic_size(&self) -> Size {
        if self.star_count == 0 {
            return Size::ZERO;
        }
        let count = self.star_count as f32;
        Size::new(
            count * self.star_size + (count - 1.0) * self.star_margin,
            self.star_size,
        )
    }
}

/// Clamp a rating to `[0, star_count]`
pub fn clamp_rating(rating: f32, star_count: usize) -> f32 {
    clamp_or_min(rating, 0.0, star_count as f32)
}

/// Fill level of every star for `rating`, for at most [`MAX_STARS`] stars
pub fn star_fill_levels(rating: f32, star_count: usize, mode: FillMode) -> Vec<f32> {
    let star_count = star_count.min(MAX_STARS);
    let rating = clamp_rating(rating, star_count);
    (0..star_count)
        .map(|index| mode.round(rating - index as f32))
        .collect()
}

/// Rating selected by a touch at horizontal offset `x` from the row's left edge
pub fn rating_from_position(x: f32, layout: &RatingLayout, mode: FillMode) -> f32 {
    let layout = layout.sanitized();
    let precise = precise_rating(x, &layout) + mode.touch_bias();
    displayed_rating(precise, mode, layout.star_count)
}

/// Continuous rating under `x`, a touch inside a margin counts as the whole star
fn precise_rating(x: f32, layout: &RatingLayout) -> f32 {
    let stride = layout.stride();
    if x.is_nan() || x < 0.0 || stride <= 0.0 {
        return 0.0;
    }

    let whole = (x / stride).floor();
    if whole > layout.star_count as f32 {
        return layout.star_count as f32;
    }

    let remainder = x - whole * stride;
    if remainder > layout.star_size {
        whole + 1.0
    } else if layout.star_size > 0.0 {
        whole + remainder / layout.star_size
    } else {
        whole
    }
}

/// Quantize the fractional part of a rating and clamp it to the star count
fn displayed_rating(rating: f32, mode: FillMode, star_count: usize) -> f32 {
    let whole = rating.floor();
    clamp_rating(whole + mode.round(rating - whole), star_count)
}
