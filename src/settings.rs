//! Demo settings persistence
//!
//! Handles saving and loading the demo application's slider configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::media::ImageSource;
use crate::ui::components::image_slider::{
    DEFAULT_HEIGHT, DEFAULT_ICON_SIZE, DEFAULT_ROTATE_DEGREE, DEFAULT_SLIDE_DURATION,
    DEFAULT_WIDTH, Slide, SliderConfig,
};

/// Picsum photos shown when nothing else is configured
const DEFAULT_SLIDE_IDS: [u32; 7] = [16, 17, 18, 19, 20, 21, 22];

/// Demo application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Title shown over the slides
    pub title: String,
    /// Show today's date under the title
    pub show_date: bool,
    /// Slide sources: URLs or file paths
    pub slides: Vec<String>,
    /// How long each slide stays, in milliseconds
    pub slide_duration_ms: u64,
    /// Rotation magnitude passed to the slider
    pub rotate_degree: f32,
    /// Controller icon size
    pub icon_size: f32,
    /// Initial window width
    pub window_width: f32,
    /// Initial window height
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: "Slider title".to_string(),
            show_date: true,
            slides: DEFAULT_SLIDE_IDS
                .iter()
                .map(|id| format!("https://picsum.photos/id/{}/1000/800", id))
                .collect(),
            slide_duration_ms: DEFAULT_SLIDE_DURATION.as_millis() as u64,
            rotate_degree: DEFAULT_ROTATE_DEGREE,
            icon_size: DEFAULT_ICON_SIZE,
            window_width: DEFAULT_WIDTH,
            window_height: DEFAULT_HEIGHT,
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "animated-image-slide", "AnimatedImageSlide")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        Self::file_path()
            .and_then(|path| match Self::load_from_file(&path) {
                Ok(settings) => Some(settings),
                Err(e) => {
                    tracing::debug!("Using default settings ({})", e);
                    None
                }
            })
            .unwrap_or_default()
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(path) = Self::file_path() {
            self.save_to_file(&path)
        } else {
            Err(SettingsError::Io(
                "Could not determine config directory".to_string(),
            ))
        }
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }

    /// Slides in display order
    pub fn slide_list(&self) -> Vec<Slide> {
        self.slides
            .iter()
            .filter(|s| !s.trim().is_empty())
            .map(|s| Slide::new(ImageSource::parse(s)))
            .collect()
    }

    /// Build the slider configuration these settings describe
    pub fn slider_config(&self, date: Option<String>) -> SliderConfig {
        let mut config = SliderConfig::new(self.slide_list(), self.title.clone())
            .size(self.window_width, self.window_height)
            .rotate_degree(self.rotate_degree)
            .slide_duration(Duration::from_millis(self.slide_duration_ms))
            .icon_size(self.icon_size);
        if self.show_date {
            config = config.date(date);
        }
        config
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_settings_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("animated-image-slide-{}-{}", name, std::process::id()))
            .join("settings.json")
    }

    #[test]
    fn defaults_match_the_demo() {
        let settings = Settings::default();
        assert_eq!(settings.slides.len(), 7);
        assert_eq!(settings.slide_duration_ms, 6000);
        assert_eq!(settings.icon_size, 33.0);
        assert!(settings.slides[0].starts_with("https://picsum.photos/id/16/"));
    }

    #[test]
    fn save_then_load_restores_values() {
        let path = temp_settings_path("roundtrip");
        let settings = Settings {
            title: "Holiday".to_string(),
            slide_duration_ms: 2500,
            ..Settings::default()
        };

        settings.save_to_file(&path).expect("save settings");
        let loaded = Settings::load_from_file(&path).expect("load settings");
        if let Some(dir) = path.parent() {
            std::fs::remove_dir_all(dir).ok();
        }

        assert_eq!(loaded, settings);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let parsed: Settings =
            serde_json::from_str(r#"{ "title": "Only a title" }"#).expect("partial json");
        assert_eq!(parsed.title, "Only a title");
        assert_eq!(parsed.slide_duration_ms, 6000);
        assert_eq!(parsed.slides, Settings::default().slides);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = Settings::load_from_file(Path::new("/nonexistent/settings.json"));
        assert!(matches!(result, Err(SettingsError::Io(_))));
    }

    #[test]
    fn slider_config_carries_settings() {
        let settings = Settings {
            slides: vec!["a.png".into(), "  ".into(), "https://x.test/b.jpg".into()],
            show_date: false,
            ..Settings::default()
        };
        let config = settings.slider_config(Some("Oct 18, 2026".into()));

        assert_eq!(config.slides.len(), 2);
        assert_eq!(config.date, None);
        assert_eq!(config.slide_duration, Duration::from_millis(6000));
        assert!(config.validate().is_ok());
    }
}
