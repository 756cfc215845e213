//! Message update handlers - thin dispatcher delegating to submodules

mod gallery;
mod slider;
mod window;

use iced::Task;
use iced::time::Instant;

use super::{App, Message};

impl App {
    /// Handle messages by delegating to appropriate submodule handlers
    pub fn update(&mut self, message: Message) -> Task<Message> {
        // Frame ticks carry their own instant; everything else happens now
        if !matches!(message, Message::AnimationTick(_)) {
            self.now = self.now.max(Instant::now());
        }

        if let Some(task) = self.handle_slider(&message) {
            return task;
        }
        if let Some(task) = self.handle_gallery(&message) {
            return task;
        }
        if let Some(task) = self.handle_window(&message) {
            return task;
        }

        // Default: no task
        Task::none()
    }
}
