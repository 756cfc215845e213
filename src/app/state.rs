// src/app/state.rs
//! Application state definitions

use iced::time::Instant;

use animated_image_slide::ImageSlider;
use animated_image_slide::settings::Settings;

use super::Message;

/// Main application state
pub struct App {
    /// Persisted demo configuration
    pub settings: Settings,
    /// The carousel, `None` when no valid configuration could be built
    pub slider: Option<ImageSlider<Message>>,
    pub slider_error: Option<String>,
    /// Instant the slider is rendered at, advanced by frame ticks
    pub now: Instant,
    /// A gallery folder scan is running
    pub scanning: bool,
}
