//! Page navigation handler

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    pub fn handle_navigation(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Navigate(page) => {
                tracing::debug!("Navigating to {:?}", page);
                self.page = *page;
                Some(Task::none())
            }
            _ => None,
        }
    }
}
