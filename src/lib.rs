//! StarHud - rounded star ratings and payment status HUD indicators
//! Built with iced canvas primitives

pub mod features;
pub mod ui;
