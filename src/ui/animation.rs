//! Animation helpers built on `iced_anim`
//!
//! The HUD indicators advance their own state machines from frame deltas;
//! this module only covers eased transitions such as the overlay fade.

mod fade;

pub use fade::FadeAnimation;
