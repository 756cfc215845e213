// src/app/view.rs
//! View rendering

use iced::widget::{container, text};
use iced::{Element, Fill};

use animated_image_slide::ui::theme;

use super::{App, Message};

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let content: Element<'_, Message> = match &self.slider {
            Some(slider) => slider.view(self.now).map(Message::Slider),
            None => text(format!(
                "Slider unavailable: {}",
                self.slider_error.as_deref().unwrap_or("unknown error")
            ))
            .size(16)
            .into(),
        };

        container(content)
            .center(Fill)
            .style(theme::app_root)
            .into()
    }
}

#[cfg(test)]
mod tests {
    use animated_image_slide::settings::Settings;

    use super::*;

    #[test]
    fn view_builds_with_and_without_slider() {
        let mut app = App::new(Settings::default()).0;
        let _ = app.view();

        app.slider = None;
        app.slider_error = Some("no slides".to_string());
        let _ = app.view();
    }
}
