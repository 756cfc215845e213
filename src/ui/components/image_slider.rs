//! Animated image slider
//!
//! An auto-advancing carousel. Each slide is shown for one run of a
//! [`SlideTimer`](crate::ui::animation::SlideTimer); the active slide fades
//! in, zooms and tilts into place while the previous one fades out. Tapping
//! the slide surface reveals a bottom overlay with title, date, a thumbnail
//! strip and mute / pause / gallery controls.
//!
//! The host owns an [`ImageSlider`], forwards its [`Event`]s to
//! [`ImageSlider::update`] and turns the returned callback messages into
//! tasks. All timing goes through explicit instants.

mod config;
mod state;
mod view;

use iced::Element;

pub use config::{
    ContainerStyleFn, DEFAULT_HEIGHT, DEFAULT_ICON_SIZE, DEFAULT_ROTATE_DEGREE,
    DEFAULT_SLIDE_DURATION, DEFAULT_WIDTH, Slide, SliderConfig, SliderStyle, TextStyle,
};
pub use state::ImageSlider;

/// Interactions produced by the slider's own view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Tap on the slide surface
    SurfacePressed,
    /// Tap on the thumbnail at this raw position
    ThumbnailPressed(usize),
    MutePressed,
    PausePressed,
    GalleryPressed,
}

/// Snapshot handed to a custom controller renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControllerState {
    pub muted: bool,
    pub paused: bool,
    pub controllers_visible: bool,
    pub active_index: usize,
    pub slide_count: usize,
}

/// Custom controller renderer, replaces the default icon bar
pub type ControllerFn = Box<dyn Fn(ControllerState) -> Element<'static, Event>>;
