//! Animated image slider for iced
//!
//! An auto-advancing carousel that crossfades, zooms and tilts between
//! slides, with a revealable overlay holding a title, a thumbnail strip and
//! mute / pause / gallery controls.

pub mod error;
pub mod media;
pub mod settings;
pub mod ui;

pub use error::{LoadError, SliderError};
pub use ui::components::image_slider::{Event, ImageSlider, Slide, SliderConfig};
