//! UI module for the star rating and HUD demo
//!
//! # Architecture
//!
//! - **Primitives** (`primitives`): Canvas programs drawing the feature state
//! - **Animation** (`animation`): Eased transitions on top of `iced_anim`
//! - **Theme** (`theme`): Colors and widget styles

pub mod animation;
pub mod primitives;
pub mod theme;
