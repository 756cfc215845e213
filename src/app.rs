//! Main application module

pub mod helpers;
mod message;
mod state;
mod update;
mod view;

use iced::time::Instant;
use iced::{Task, Theme};

use animated_image_slide::settings::Settings;
pub use message::Message;
pub use state::App;

impl App {
    /// Create new application instance
    pub fn new(settings: Settings) -> (Self, Task<Message>) {
        let now = Instant::now();
        let date = Some(helpers::today());

        // 1. Build the slider, falling back to defaults for broken settings
        let (settings, built) = match helpers::build_slider(&settings, date.clone()) {
            Ok(slider) => (settings, Ok(slider)),
            Err(e) => {
                tracing::warn!("Invalid slider settings ({}), using defaults", e);
                let defaults = Settings::default();
                let built = helpers::build_slider(&defaults, date);
                (defaults, built)
            }
        };

        let mut app = Self {
            settings,
            slider: None,
            slider_error: None,
            now,
            scanning: false,
        };

        // 2. Mount and request every slide image
        let init_task = match built {
            Ok(mut slider) => {
                slider.mount(now);
                let requests = slider.load_requests();
                tracing::info!("Loading {} slide images", requests.len());
                app.slider = Some(slider);
                helpers::load_tasks(requests)
            }
            Err(e) => {
                tracing::error!("Failed to build slider: {}", e);
                app.slider_error = Some(e.to_string());
                Task::none()
            }
        };

        (app, init_task)
    }

    pub fn theme(&self) -> Theme {
        Theme::Dark
    }

    pub fn title(&self) -> String {
        if self.settings.title.is_empty() {
            "Animated Image Slide".to_string()
        } else {
            format!("Animated Image Slide - {}", self.settings.title)
        }
    }

    /// Frames while the slider animates, plus window resizes
    pub fn subscription(&self) -> iced::Subscription<Message> {
        let slider_animating = self
            .slider
            .as_ref()
            .map(|slider| slider.is_animating())
            .unwrap_or(false);

        // 1. Animation subscription (vsync rate) while anything moves
        let animation_sub = if slider_animating {
            iced::window::frames().map(Message::AnimationTick)
        } else {
            iced::Subscription::none()
        };

        // 2. Window resize
        let resize_sub =
            iced::window::resize_events().map(|(_id, size)| Message::WindowResized(size));

        iced::Subscription::batch([animation_sub, resize_sub])
    }
}
