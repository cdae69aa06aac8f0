//! Primitive UI elements - atomic building blocks
//!
//! This module contains the lowest-level UI components that implement
//! iced's `canvas::Program` trait directly.
//!
//! # Design Principles
//!
//! - **No business logic**: Primitives must not import from `crate::app`
//! - **Generic Message types**: Use type parameters for flexibility
//! - **Self-contained**: Each primitive handles its own layout and rendering
//!
//! # Contents
//!
//! - [`StarRating`] - Row of rounded stars with partial fills and drag input
//! - [`HudIndicator`] - Loading arc and success checkmark

pub mod hud_indicator;
pub mod star_rating;

pub use hud_indicator::{HudIndicator, view_loading, view_success};
pub use star_rating::{StarRating, outline_path, star_rating};
