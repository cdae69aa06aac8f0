//! Main application module

mod message;
mod state;
mod update;
mod view;

use iced::{Task, Theme};

use starhud::features::Settings;

pub use message::Message;
pub use state::App;

impl App {
    /// Create new application instance
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        tracing::info!(
            "Starting with {} stars in {} mode",
            settings.rating.star_count,
            settings.rating.fill_mode
        );

        (Self::with_settings(settings), Task::none())
    }

    pub fn title(&self) -> String {
        format!("StarHud - {}", self.page.title())
    }

    pub fn theme(&self) -> Theme {
        if self.settings.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn subscription(&self) -> iced::Subscription<Message> {
        // Animation frames only while an indicator or fade is moving
        if self.hud.needs_frames() {
            iced::window::frames().map(Message::AnimationTick)
        } else {
            iced::Subscription::none()
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new().0
    }
}

/// Subscription decision logic for testability
pub mod subscription_logic {
    pub fn needs_animation_frames(
        spinner_running: bool,
        success_revealing: bool,
        fading: bool,
    ) -> bool {
        spinner_running || success_revealing || fading
    }
}

#[cfg(test)]
mod tests {
    use super::subscription_logic::*;

    #[test]
    fn idle_hud_needs_no_frames() {
        assert!(!needs_animation_frames(false, false, false));
    }

    #[test]
    fn any_moving_indicator_needs_frames() {
        assert!(needs_animation_frames(true, false, false));
        assert!(needs_animation_frames(false, true, false));
        assert!(needs_animation_frames(false, false, true));
    }

    #[test]
    fn finished_success_hud_stops_frames() {
        use starhud::features::Settings;

        let mut hud = super::state::HudPageState::new(&Settings::default());
        hud.success.show();
        hud.success.advance(std::time::Duration::from_secs(5));
        hud.success_fade.reset();

        assert!(hud.success.is_finished());
        assert!(!hud.needs_frames());
    }
}
