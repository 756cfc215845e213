//! Helper functions for the application

use std::path::PathBuf;

use iced::Task;

use animated_image_slide::media::{self, ImageSource};
use animated_image_slide::settings::Settings;
use animated_image_slide::{ImageSlider, SliderError};

use super::Message;

/// How deep a gallery folder is searched for images
pub const SCAN_DEPTH: usize = 3;

/// Today's date as shown under the title, e.g. "Oct 18, 2026"
pub fn today() -> String {
    chrono::Local::now().format("%b %-d, %Y").to_string()
}

/// Build the slider described by `settings` with every callback wired
pub fn build_slider(
    settings: &Settings,
    date: Option<String>,
) -> Result<ImageSlider<Message>, SliderError> {
    let slider = ImageSlider::new(settings.slider_config(date))?
        .on_gallery_press(|| Message::GalleryPressed)
        .on_mute_press(Message::MuteChanged)
        .on_pause_press(Message::PauseChanged)
        .on_controllers_visible_change(Message::ControllersVisibleChanged);
    Ok(slider)
}

/// One load task per pending request
pub fn load_tasks(requests: Vec<(usize, ImageSource)>) -> Task<Message> {
    Task::batch(requests.into_iter().map(|(index, source)| {
        let key = source.clone();
        Task::perform(media::load(source), move |result| {
            Message::ImageLoaded(index, key, result)
        })
    }))
}

/// Open folder dialog
pub async fn open_folder_dialog() -> Option<PathBuf> {
    rfd::AsyncFileDialog::new()
        .set_title("Choose an image folder")
        .pick_folder()
        .await
        .map(|handle| handle.path().to_path_buf())
}

/// Scan `root` for images off the runtime thread
pub async fn scan_folder(root: PathBuf) -> Vec<PathBuf> {
    let scan_root = root.clone();
    match tokio::task::spawn_blocking(move || {
        media::discover_image_files(&scan_root, Some(SCAN_DEPTH))
    })
    .await
    {
        Ok(files) => files,
        Err(e) => {
            tracing::warn!("Folder scan of {} failed: {}", root.display(), e);
            Vec::new()
        }
    }
}

/// Settings entries for a scanned folder
pub fn slide_entries(files: &[PathBuf]) -> Vec<String> {
    files
        .iter()
        .map(|p| p.to_string_lossy().into_owned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn today_has_month_day_and_year() {
        let date = today();
        let parts: Vec<&str> = date.split(' ').collect();
        assert_eq!(parts.len(), 3, "unexpected date format: {}", date);
        assert_eq!(parts[0].len(), 3, "month should be abbreviated");
        assert!(parts[1].ends_with(','), "day should be followed by a comma");
        assert_eq!(parts[2].len(), 4, "year should have four digits");
    }

    #[test]
    fn default_settings_build_a_slider() {
        let slider = build_slider(&Settings::default(), Some(today())).expect("valid defaults");
        assert_eq!(slider.slide_count(), 7);
        assert_eq!(slider.active_index(), 1);
    }

    #[test]
    fn empty_slide_list_is_an_error() {
        let settings = Settings {
            slides: Vec::new(),
            ..Settings::default()
        };
        assert_eq!(
            build_slider(&settings, None).err(),
            Some(SliderError::EmptySlides)
        );
    }

    #[test]
    fn scanned_paths_become_settings_entries() {
        let files = vec![PathBuf::from("/photos/a.jpg"), PathBuf::from("/photos/b.png")];
        assert_eq!(
            slide_entries(&files),
            vec!["/photos/a.jpg".to_string(), "/photos/b.png".to_string()]
        );
    }

    #[test]
    fn scanning_a_missing_folder_yields_nothing() {
        let runtime = tokio::runtime::Runtime::new().expect("runtime");
        let files = runtime.block_on(scan_folder(PathBuf::from(
            "/definitely/not/an/existing/folder",
        )));
        assert!(files.is_empty());
    }
}
