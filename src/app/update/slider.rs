// src/app/update/slider.rs
//! Slider events, frame ticks, image loads and slider callbacks

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;

impl App {
    /// Handle slider-related messages
    pub fn handle_slider(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::Slider(event) => {
                let now = self.now;
                let callback = self
                    .slider
                    .as_mut()
                    .and_then(|slider| slider.update(*event, now));
                // Callback messages go through update like any other message
                Some(callback.map(Task::done).unwrap_or_else(Task::none))
            }

            Message::AnimationTick(at) => {
                self.now = self.now.max(*at);
                let now = self.now;
                if let Some(slider) = self.slider.as_mut() {
                    slider.tick(now);
                }
                Some(Task::none())
            }

            Message::ImageLoaded(index, source, result) => {
                if let Err(e) = result {
                    tracing::warn!("Slide {} failed to load: {}", index, e);
                }
                if let Some(slider) = self.slider.as_mut() {
                    slider.image_loaded(*index, source, result.clone());
                }
                Some(Task::none())
            }

            Message::MuteChanged(muted) => {
                tracing::info!("Mute pressed, muted = {}", muted);
                Some(Task::none())
            }

            Message::PauseChanged(paused) => {
                tracing::info!("Pause pressed, paused = {}", paused);
                Some(Task::none())
            }

            Message::ControllersVisibleChanged(visible) => {
                tracing::info!("Controllers visible = {}", visible);
                Some(Task::none())
            }

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use iced::time::Duration;

    use animated_image_slide::Event;
    use animated_image_slide::settings::Settings;

    use super::*;

    fn app() -> App {
        App::new(Settings::default()).0
    }

    #[test]
    fn frame_ticks_advance_the_clock() {
        let mut app = app();
        let later = app.now + Duration::from_millis(250);
        let _ = app.update(Message::AnimationTick(later));
        assert_eq!(app.now, later);

        // An older frame never moves time backwards
        let _ = app.update(Message::AnimationTick(later - Duration::from_millis(100)));
        assert_eq!(app.now, later);
    }

    #[test]
    fn slide_advances_after_one_duration() {
        let mut app = app();
        let start = app.now;
        let duration = Duration::from_millis(app.settings.slide_duration_ms);
        let _ = app.update(Message::AnimationTick(start + duration + Duration::from_millis(1)));
        let slider = app.slider.as_ref().expect("slider");
        assert_eq!(slider.active_index(), 2);
    }

    #[test]
    fn pause_event_toggles_the_slider() {
        let mut app = app();
        let _ = app.update(Message::Slider(Event::PausePressed));
        assert!(app.slider.as_ref().expect("slider").is_paused());
        let _ = app.update(Message::Slider(Event::PausePressed));
        assert!(!app.slider.as_ref().expect("slider").is_paused());
    }

    #[test]
    fn surface_press_reveals_controllers() {
        let mut app = app();
        let _ = app.update(Message::Slider(Event::SurfacePressed));
        assert!(app.slider.as_ref().expect("slider").controllers_visible());
    }

    #[test]
    fn failed_loads_let_a_paused_slider_settle() {
        let mut app = app();
        let _ = app.update(Message::Slider(Event::PausePressed));

        let sources: Vec<_> = app
            .slider
            .as_ref()
            .expect("slider")
            .config()
            .slides
            .iter()
            .map(|slide| slide.source.clone())
            .collect();
        for (index, source) in sources.into_iter().enumerate() {
            let _ = app.update(Message::ImageLoaded(
                index,
                source,
                Err(animated_image_slide::LoadError::Fetch("offline".to_string())),
            ));
        }

        let settled = app.now + Duration::from_secs(1);
        let _ = app.update(Message::AnimationTick(settled));
        assert!(
            !app.slider.as_ref().expect("slider").is_animating(),
            "nothing should move once paused and loaded"
        );
    }
}
