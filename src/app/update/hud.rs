//! HUD message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle HUD visibility and animation frames
    pub fn handle_hud(&mut self, message: &Message) -> Option<Task<Message>> {
        let hud = &mut self.hud;

        match message {
            Message::ShowLoading => {
                tracing::info!("Showing loading HUD");
                hud.spinner.show();
                hud.loading_fade.fade_in();
                hud.last_tick = None;
            }
            Message::HideLoading => {
                tracing::info!("Hiding loading HUD");
                hud.spinner.hide();
                hud.loading_fade.reset();
            }
            Message::ShowSuccess => {
                tracing::info!("Showing success HUD");
                hud.success.show();
                hud.success_fade.fade_in();
                hud.last_tick = None;
            }
            Message::HideSuccess => {
                tracing::info!("Hiding success HUD");
                hud.success.hide();
                hud.success_fade.reset();
            }
            Message::AnimationTick(now) => {
                let delta = hud
                    .last_tick
                    .map(|last| now.saturating_duration_since(last))
                    .unwrap_or_default();

                hud.spinner.advance(delta);
                hud.success.advance(delta);
                hud.loading_fade.tick(*now);
                hud.success_fade.tick(*now);

                hud.last_tick = if hud.needs_frames() { Some(*now) } else { None };
            }
            _ => return None,
        }

        Some(Task::none())
    }
}
