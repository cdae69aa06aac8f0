//! Feature modules - business logic separated from UI
//!
//! Each feature module contains the core logic for a specific functionality.
//! Features should not depend on UI components directly.

pub mod hud;
pub mod settings;
pub mod star;

pub use hud::{HudState, HudStyle, LoadingSpinner, SuccessCheck};
pub use settings::{HudSettings, RatingSettings, Settings, SettingsError};
pub use star::{FillMode, RatingLayout, StarGeometry, StarOutline};
