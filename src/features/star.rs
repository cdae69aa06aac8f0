//! Star rating logic: outline geometry and rating aggregation

pub mod geometry;
pub mod rating;

pub use geometry::{PathCommand, REGULAR_RADIUS_SCALE, StarGeometry, StarOutline};
pub use rating::{FillMode, MAX_STARS, RatingLayout, rating_from_position, star_fill_levels};
