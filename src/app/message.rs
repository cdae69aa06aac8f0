//! Application messages

use iced::time::Instant;

use starhud::features::FillMode;

/// Demo pages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Rating,
    Hud,
}

impl Page {
    pub fn all() -> [Self; 2] {
        [Self::Rating, Self::Hud]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Rating => "Rating",
            Self::Hud => "HUD",
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    Navigate(Page),

    // Star rating
    RatingChanged(f32),
    RatingFinished(f32),
    OuterRadiusChanged(f32),
    InnerRadiusChanged(f32),
    RadiusScaleChanged(f32),
    FillModeSelected(FillMode),

    // HUD
    ShowLoading,
    HideLoading,
    ShowSuccess,
    HideSuccess,
    AnimationTick(Instant),

    // Settings
    DarkModeToggled(bool),
    SaveSettings,
}
