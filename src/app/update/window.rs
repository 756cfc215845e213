// src/app/update/window.rs
//! Window message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle window-related messages
    pub fn handle_window(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::WindowResized(size) => {
                tracing::debug!("Window resized to {}x{}", size.width, size.height);
                if let Some(slider) = self.slider.as_mut() {
                    slider.resize(*size);
                }
                Some(Task::none())
            }
            _ => None,
        }
    }
}
