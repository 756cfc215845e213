// src/app/update/gallery.rs
//! Gallery button: pick a folder, scan it, replace the slides

use iced::Task;

use animated_image_slide::Slide;

use crate::app::helpers;
use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle gallery import messages
    pub fn handle_gallery(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::GalleryPressed => {
                tracing::info!("Gallery pressed");
                if self.scanning {
                    return Some(Task::none());
                }
                self.scanning = true;
                Some(Task::perform(
                    helpers::open_folder_dialog(),
                    Message::FolderSelected,
                ))
            }

            Message::FolderSelected(None) => {
                self.scanning = false;
                Some(Task::none())
            }

            Message::FolderSelected(Some(root)) => {
                tracing::info!("Scanning {} for images", root.display());
                let root = root.clone();
                Some(Task::perform(
                    helpers::scan_folder(root.clone()),
                    move |files| Message::FolderScanned(root, files),
                ))
            }

            Message::FolderScanned(root, files) => {
                self.scanning = false;
                Some(self.apply_scanned_folder(root, files))
            }

            _ => None,
        }
    }

    fn apply_scanned_folder(
        &mut self,
        root: &std::path::Path,
        files: &[std::path::PathBuf],
    ) -> Task<Message> {
        if files.is_empty() {
            tracing::warn!("No images found in {}", root.display());
            return Task::none();
        }
        let Some(slider) = self.slider.as_mut() else {
            return Task::none();
        };

        let slides = files.iter().map(|p| Slide::new(p.as_path())).collect();
        if let Err(e) = slider.set_slides(slides, self.now) {
            tracing::warn!("Could not use {}: {}", root.display(), e);
            return Task::none();
        }
        tracing::info!("Showing {} images from {}", files.len(), root.display());

        self.settings.slides = helpers::slide_entries(files);
        if let Err(e) = self.settings.save() {
            tracing::warn!("Failed to save settings: {}", e);
        }

        helpers::load_tasks(slider.load_requests())
    }
}
