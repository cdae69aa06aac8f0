//! Settings persistence handler

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    pub fn handle_settings(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::DarkModeToggled(enabled) => {
                self.settings.dark_mode = *enabled;
                Some(Task::none())
            }
            Message::SaveSettings => {
                self.status = Some(match self.settings.save() {
                    Ok(()) => {
                        tracing::info!("Settings saved");
                        "Settings saved".to_string()
                    }
                    Err(e) => {
                        tracing::warn!("Failed to save settings: {}", e);
                        format!("Could not save settings: {}", e)
                    }
                });
                Some(Task::none())
            }
            _ => None,
        }
    }
}
