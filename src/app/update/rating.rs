//! Star rating message handlers

use iced::Task;

use starhud::features::star::rating::clamp_rating;

use crate::app::message::Message;
use crate::app::state::App;

/// Upper bound of the corner radius sliders
pub const MAX_CORNER_RADIUS: f32 = 30.0;

impl App {
    /// Handle rating and star shape messages
    pub fn handle_rating(&mut self, message: &Message) -> Option<Task<Message>> {
        let rating = &mut self.settings.rating;

        match message {
            Message::RatingChanged(value) => {
                self.rating = clamp_rating(*value, rating.star_count);
            }
            Message::RatingFinished(value) => {
                let value = clamp_rating(*value, rating.star_count);
                tracing::info!("Rating set to {}", value);
                self.rating = value;
                self.last_finished = Some(value);
            }
            Message::OuterRadiusChanged(radius) => {
                rating.outer_corner_radius = radius.clamp(0.0, MAX_CORNER_RADIUS);
            }
            Message::InnerRadiusChanged(radius) => {
                rating.inner_corner_radius = radius.clamp(0.0, MAX_CORNER_RADIUS);
            }
            Message::RadiusScaleChanged(scale) => {
                rating.radius_scale = scale.clamp(0.0, 1.0);
            }
            Message::FillModeSelected(mode) => {
                rating.fill_mode = *mode;
            }
            _ => return None,
        }

        Some(Task::none())
    }
}
