// src/app/message.rs
//! Application messages

use std::path::PathBuf;

use iced::Size;
use iced::time::Instant;

use animated_image_slide::media::{ImageSource, LoadedImage};
use animated_image_slide::ui::components::image_slider::Event as SliderEvent;
use animated_image_slide::LoadError;

#[derive(Clone)]
pub enum Message {
    /// Interaction inside the slider view
    Slider(SliderEvent),
    /// Frame tick while the slider is animating
    AnimationTick(Instant),
    WindowResized(Size),
    /// Result of loading the image for the slide at this position
    ImageLoaded(usize, ImageSource, Result<LoadedImage, LoadError>),

    // Slider callbacks
    MuteChanged(bool),
    PauseChanged(bool),
    ControllersVisibleChanged(bool),
    GalleryPressed,

    // Gallery import
    FolderSelected(Option<PathBuf>),
    FolderScanned(PathBuf, Vec<PathBuf>),
}

// Loaded images carry pixel handles, keep the debug output short
impl std::fmt::Debug for Message {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Slider(event) => write!(f, "Slider({:?})", event),
            Self::AnimationTick(_) => write!(f, "AnimationTick"),
            Self::WindowResized(size) => {
                write!(f, "WindowResized({}x{})", size.width, size.height)
            }
            Self::ImageLoaded(index, source, result) => write!(
                f,
                "ImageLoaded({}, {:?}, ok={})",
                index,
                source,
                result.is_ok()
            ),
            Self::MuteChanged(v) => write!(f, "MuteChanged({})", v),
            Self::PauseChanged(v) => write!(f, "PauseChanged({})", v),
            Self::ControllersVisibleChanged(v) => write!(f, "ControllersVisibleChanged({})", v),
            Self::GalleryPressed => write!(f, "GalleryPressed"),
            Self::FolderSelected(path) => write!(f, "FolderSelected({:?})", path),
            Self::FolderScanned(root, files) => {
                write!(f, "FolderScanned({}, {} files)", root.display(), files.len())
            }
        }
    }
}
