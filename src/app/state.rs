//! Application state

use iced::time::Instant;

use starhud::features::{LoadingSpinner, Settings, SuccessCheck};
use starhud::ui::animation::FadeAnimation;
use starhud::ui::theme;

use super::message::Page;

/// HUD page state
#[derive(Debug)]
pub struct HudPageState {
    pub spinner: LoadingSpinner,
    pub success: SuccessCheck,
    pub loading_fade: FadeAnimation,
    pub success_fade: FadeAnimation,
    /// Timestamp of the previous animation frame
    pub last_tick: Option<Instant>,
}

impl HudPageState {
    pub fn new(settings: &Settings) -> Self {
        let mut spinner = settings.hud.loading_spinner();
        spinner.style = spinner.style.stroke_color(theme::HUD_STROKE);
        let mut success = settings.hud.success_check();
        success.style = success.style.stroke_color(theme::HUD_STROKE);

        Self {
            spinner,
            success,
            loading_fade: FadeAnimation::new(),
            success_fade: FadeAnimation::new(),
            last_tick: None,
        }
    }

    /// Whether any indicator still changes from frame to frame
    pub fn needs_frames(&self) -> bool {
        super::subscription_logic::needs_animation_frames(
            self.spinner.is_running(),
            self.success.is_running() && !self.success.is_finished(),
            self.loading_fade.is_animating() || self.success_fade.is_animating(),
        )
    }
}

/// Main application state
#[derive(Debug)]
pub struct App {
    pub settings: Settings,
    pub page: Page,
    /// Rating shown by the star row
    pub rating: f32,
    /// Rating reported when the last drag ended
    pub last_finished: Option<f32>,
    pub hud: HudPageState,
    /// Result of the last save, shown next to the save button
    pub status: Option<String>,
}

impl App {
    pub fn with_settings(settings: Settings) -> Self {
        let hud = HudPageState::new(&settings);
        Self {
            settings,
            page: Page::default(),
            rating: 3.5,
            last_finished: None,
            hud,
            status: None,
        }
    }
}
