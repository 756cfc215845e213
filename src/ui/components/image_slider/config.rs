//! Slider configuration
//!
//! Everything the slider needs is passed in through [`SliderConfig`]; the
//! component holds no static defaults of its own beyond the named constants
//! below.

use iced::widget::container;
use iced::{Color, Theme};
use std::time::Duration;

use crate::error::SliderError;
use crate::media::ImageSource;

/// Width used when the caller does not size the slider
pub const DEFAULT_WIDTH: f32 = 1280.0;
/// Height used when the caller does not size the slider
pub const DEFAULT_HEIGHT: f32 = 800.0;
/// Rotation magnitude. The value is π but it is applied as degrees.
pub const DEFAULT_ROTATE_DEGREE: f32 = std::f32::consts::PI;
/// How long each slide stays before the next one takes over
pub const DEFAULT_SLIDE_DURATION: Duration = Duration::from_millis(6000);
/// Height of the mute and gallery icons
pub const DEFAULT_ICON_SIZE: f32 = 33.0;

/// One image in the carousel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub source: ImageSource,
}

impl Slide {
    pub fn new(source: impl Into<ImageSource>) -> Self {
        Self {
            source: source.into(),
        }
    }
}

/// Container style override
pub type ContainerStyleFn = fn(&Theme) -> container::Style;

/// Text style override
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub size: f32,
    pub color: Color,
    pub bold: bool,
}

/// Optional style overrides, `None` keeps the built-in look
#[derive(Debug, Clone, Copy, Default)]
pub struct SliderStyle {
    /// Outer container
    pub container: Option<ContainerStyleFn>,
    /// Each mounted slide
    pub slide_container: Option<ContainerStyleFn>,
    /// The default icon bar
    pub controller_container: Option<ContainerStyleFn>,
    /// The whole bottom overlay (title, date, thumbnails, controls)
    pub controllers: Option<ContainerStyleFn>,
    pub title: Option<TextStyle>,
    pub date: Option<TextStyle>,
}

/// Slider configuration
#[derive(Debug, Clone)]
pub struct SliderConfig {
    /// Ordered slides, must not be empty
    pub slides: Vec<Slide>,
    /// Title over the slides, hidden when empty
    pub title: String,
    /// Date under the title. Without it the title gets extra bottom spacing.
    pub date: Option<String>,
    pub style: SliderStyle,
    /// Slider width, also the travel of the thumbnail strip reveal
    pub width: f32,
    /// Slider height, also the travel of the controller bar reveal
    pub height: f32,
    /// Tilt of resting slides
    pub rotate_degree: f32,
    /// One full timer run
    pub slide_duration: Duration,
    /// Controller icon size; the pause icon is 1.3× as tall and the bar 4.5× as wide
    pub icon_size: f32,
}

impl SliderConfig {
    pub fn new(slides: Vec<Slide>, title: impl Into<String>) -> Self {
        Self {
            slides,
            title: title.into(),
            date: None,
            style: SliderStyle::default(),
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            rotate_degree: DEFAULT_ROTATE_DEGREE,
            slide_duration: DEFAULT_SLIDE_DURATION,
            icon_size: DEFAULT_ICON_SIZE,
        }
    }

    pub fn date(mut self, date: Option<String>) -> Self {
        self.date = date;
        self
    }

    pub fn style(mut self, style: SliderStyle) -> Self {
        self.style = style;
        self
    }

    pub fn size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn rotate_degree(mut self, rotate_degree: f32) -> Self {
        self.rotate_degree = rotate_degree;
        self
    }

    pub fn slide_duration(mut self, duration: Duration) -> Self {
        self.slide_duration = duration;
        self
    }

    pub fn icon_size(mut self, size: f32) -> Self {
        self.icon_size = size;
        self
    }

    /// Reject configurations the slider cannot run with
    pub fn validate(&self) -> Result<(), SliderError> {
        if self.slides.is_empty() {
            return Err(SliderError::EmptySlides);
        }
        if self.slide_duration.is_zero() {
            return Err(SliderError::ZeroDuration);
        }
        let valid = |v: f32| v.is_finite() && v > 0.0;
        if !valid(self.width) || !valid(self.height) {
            return Err(SliderError::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }
        Ok(())
    }

    /// Width of one thumbnail
    pub fn thumbnail_width(&self) -> f32 {
        self.width / 7.0
    }

    /// Height of one thumbnail (aspect ratio 0.9)
    pub fn thumbnail_height(&self) -> f32 {
        self.thumbnail_width() / 0.9
    }

    pub fn has_title(&self) -> bool {
        !self.title.is_empty()
    }

    pub fn has_date(&self) -> bool {
        self.date.as_deref().is_some_and(|d| !d.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slides(count: usize) -> Vec<Slide> {
        (0..count)
            .map(|i| Slide::new(format!("/tmp/{}.png", i).as_str()))
            .collect()
    }

    #[test]
    fn defaults_are_documented_values() {
        let config = SliderConfig::new(slides(2), "Title");
        assert_eq!(config.slide_duration, Duration::from_millis(6000));
        assert_eq!(config.icon_size, 33.0);
        assert_eq!(config.rotate_degree, std::f32::consts::PI);
        assert_eq!(config.date, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_slides_are_rejected() {
        let config = SliderConfig::new(Vec::new(), "Title");
        assert_eq!(config.validate(), Err(SliderError::EmptySlides));
    }

    #[test]
    fn zero_duration_is_rejected() {
        let config = SliderConfig::new(slides(1), "Title").slide_duration(Duration::ZERO);
        assert_eq!(config.validate(), Err(SliderError::ZeroDuration));
    }

    #[test]
    fn non_positive_size_is_rejected() {
        let config = SliderConfig::new(slides(1), "Title").size(0.0, 600.0);
        assert!(matches!(
            config.validate(),
            Err(SliderError::InvalidSize { .. })
        ));
    }

    #[test]
    fn thumbnail_size_follows_width() {
        let config = SliderConfig::new(slides(1), "").size(700.0, 400.0);
        assert_eq!(config.thumbnail_width(), 100.0);
        assert!((config.thumbnail_height() - 111.111).abs() < 0.01);
        assert!(!config.has_title());
    }

    #[test]
    fn blank_date_counts_as_absent() {
        let config = SliderConfig::new(slides(1), "T").date(Some(String::new()));
        assert!(!config.has_date());
    }
}
