//! Slider state machine
//!
//! Carousel state is a handful of flags plus the active index. The per-slide
//! timer drives the automatic advance; user input toggles the flags and
//! returns whatever the matching callback produced.

use iced::Size;
use iced::time::Instant;
use tracing::debug;

use super::config::{Slide, SliderConfig};
use super::{ControllerFn, ControllerState, Event};
use crate::error::{LoadError, SliderError};
use crate::media::{ImageSource, LoadedImage};
use crate::ui::animation::{
    AnimationEnd, RenderedPair, RevealSequence, SlideTimer, SlideTransform, curves,
};
use crate::ui::primitives::{PressableState, ProgressiveImage};

type ToggleCallback<Message> = Box<dyn Fn(bool) -> Message>;

/// The carousel component
pub struct ImageSlider<Message> {
    pub(super) config: SliderConfig,
    active_index: usize,
    paused: bool,
    muted: bool,
    controllers_visible: bool,
    timer: SlideTimer,
    reveal: RevealSequence,
    rendered: RenderedPair,
    pub(super) images: Vec<ProgressiveImage>,
    pub(super) thumbnails: Vec<PressableState>,
    mounted_at: Option<Instant>,
    on_gallery_press: Option<Box<dyn Fn() -> Message>>,
    on_mute_press: Option<ToggleCallback<Message>>,
    on_pause_press: Option<ToggleCallback<Message>>,
    on_controllers_visible_change: Option<ToggleCallback<Message>>,
    pub(super) controller: Option<ControllerFn>,
}

impl<Message> ImageSlider<Message> {
    /// Build a slider; starts on slide `1 % n`, playing, controllers hidden
    pub fn new(config: SliderConfig) -> Result<Self, SliderError> {
        config.validate()?;

        let count = config.slides.len();
        let active_index = 1 % count;
        let (images, thumbnails) = slide_states(&config.slides);

        Ok(Self {
            timer: SlideTimer::new(config.slide_duration),
            config,
            active_index,
            paused: false,
            muted: false,
            controllers_visible: false,
            reveal: RevealSequence::new(false),
            rendered: RenderedPair::new(active_index, count),
            images,
            thumbnails,
            mounted_at: None,
            on_gallery_press: None,
            on_mute_press: None,
            on_pause_press: None,
            on_controllers_visible_change: None,
            controller: None,
        })
    }

    pub fn on_gallery_press(mut self, callback: impl Fn() -> Message + 'static) -> Self {
        self.on_gallery_press = Some(Box::new(callback));
        self
    }

    /// Called with the new mute state on every toggle
    pub fn on_mute_press(mut self, callback: impl Fn(bool) -> Message + 'static) -> Self {
        self.on_mute_press = Some(Box::new(callback));
        self
    }

    /// Called with the new pause state on every toggle
    pub fn on_pause_press(mut self, callback: impl Fn(bool) -> Message + 'static) -> Self {
        self.on_pause_press = Some(Box::new(callback));
        self
    }

    /// Called with the new visibility whenever the slide surface is tapped
    pub fn on_controllers_visible_change(
        mut self,
        callback: impl Fn(bool) -> Message + 'static,
    ) -> Self {
        self.on_controllers_visible_change = Some(Box::new(callback));
        self
    }

    /// Replace the default icon bar
    pub fn controller(
        mut self,
        render: impl Fn(ControllerState) -> iced::Element<'static, Event> + 'static,
    ) -> Self {
        self.controller = Some(Box::new(render));
        self
    }

    /// Start the first timer run. Later calls do nothing.
    pub fn mount(&mut self, now: Instant) {
        if self.mounted_at.is_some() {
            return;
        }
        self.mounted_at = Some(now);
        if !self.paused {
            self.timer.start(now);
        }
        debug!(
            "Slider mounted with {} slides, starting at {}",
            self.slide_count(),
            self.active_index
        );
    }

    /// Handle an event from the slider's view
    pub fn update(&mut self, event: Event, now: Instant) -> Option<Message> {
        self.tick(now);
        match event {
            Event::SurfacePressed => self.toggle_controllers(now),
            Event::ThumbnailPressed(index) => self.jump_to(index, now),
            Event::MutePressed => self.toggle_mute(),
            Event::PausePressed => self.toggle_pause(now),
            Event::GalleryPressed => self.press_gallery(),
        }
    }

    /// Advance every animation to `now`
    pub fn tick(&mut self, now: Instant) {
        while let Some((end, ended_at)) = self.timer.tick(now) {
            if !self.complete_slide(end, ended_at) {
                break;
            }
        }
        self.reveal.tick(now);
        for thumbnail in &mut self.thumbnails {
            thumbnail.tick(now);
        }
    }

    /// Handle the end of a timer run. Returns whether the timer was re-armed.
    fn complete_slide(&mut self, end: AnimationEnd, ended_at: Instant) -> bool {
        if !end.is_finished() {
            return false;
        }
        self.timer.reset();
        self.set_active((self.active_index + 1) % self.slide_count());
        if self.paused {
            return false;
        }
        self.timer.start(ended_at);
        true
    }

    fn set_active(&mut self, index: usize) {
        self.active_index = index;
        self.rendered = RenderedPair::new(index, self.slide_count());
        debug!("Active slide is now {}", index);
    }

    /// Freeze or resume the timer. Runs that ended before `now` count first.
    pub fn toggle_pause(&mut self, now: Instant) -> Option<Message> {
        self.tick(now);
        self.paused = !self.paused;
        if self.paused {
            if let Some(end) = self.timer.stop(now) {
                self.complete_slide(end, now);
            }
        } else {
            self.timer.start(now);
        }
        debug!("Slider paused: {}", self.paused);
        self.on_pause_press.as_ref().map(|callback| callback(self.paused))
    }

    /// Jump from a thumbnail tap at raw position `index`.
    ///
    /// The target is one past the tapped thumbnail, wrapped. The timer is
    /// reset and playback is forced to pause even when the target is
    /// already active.
    pub fn jump_to(&mut self, index: usize, now: Instant) -> Option<Message> {
        self.tick(now);
        self.timer.reset();
        let message = if self.paused {
            None
        } else {
            self.toggle_pause(now)
        };

        let count = self.slide_count();
        let target = ((index % count) + 1) % count;
        if target != self.active_index {
            self.set_active(target);
        }
        message
    }

    /// The callback sees the new value before the flag flips
    pub fn toggle_mute(&mut self) -> Option<Message> {
        let muted = !self.muted;
        let message = self.on_mute_press.as_ref().map(|callback| callback(muted));
        self.muted = muted;
        message
    }

    /// Show or hide the bottom overlay
    pub fn toggle_controllers(&mut self, now: Instant) -> Option<Message> {
        let visible = !self.controllers_visible;
        self.reveal.animate_to(visible, now);
        let message = self
            .on_controllers_visible_change
            .as_ref()
            .map(|callback| callback(visible));
        self.controllers_visible = visible;
        debug!("Controllers visible: {}", visible);
        message
    }

    pub fn press_gallery(&mut self) -> Option<Message> {
        self.on_gallery_press.as_ref().map(|callback| callback())
    }

    /// Replace the slide list and start over from slide `1 % n`
    pub fn set_slides(&mut self, slides: Vec<Slide>, now: Instant) -> Result<(), SliderError> {
        if slides.is_empty() {
            return Err(SliderError::EmptySlides);
        }
        let (images, thumbnails) = slide_states(&slides);
        self.images = images;
        self.thumbnails = thumbnails;
        self.config.slides = slides;

        self.timer.reset();
        self.set_active(1 % self.slide_count());
        if self.mounted_at.is_some() && !self.paused {
            self.timer.start(now);
        }
        Ok(())
    }

    /// Follow the window size; travel distances use it
    pub fn resize(&mut self, size: Size) {
        if size.width > 0.0 && size.height > 0.0 {
            self.config.width = size.width;
            self.config.height = size.height;
        } else {
            debug!("Ignoring slider resize to {:?}", size);
        }
    }

    /// Sources that still need loading, each handed out once
    pub fn load_requests(&mut self) -> Vec<(usize, ImageSource)> {
        self.images
            .iter_mut()
            .enumerate()
            .filter_map(|(index, image)| image.take_request().map(|source| (index, source)))
            .collect()
    }

    /// Deliver a load result; results for a replaced source are dropped
    pub fn image_loaded(
        &mut self,
        index: usize,
        source: &ImageSource,
        result: Result<LoadedImage, LoadError>,
    ) {
        match self.images.get_mut(index) {
            Some(image) if image.source() == source && image.is_loading() => image.finish(result),
            _ => debug!("Dropping stale image result for slide {}", index),
        }
    }

    /// Whether the view changes without input, i.e. frames are needed
    pub fn is_animating(&self) -> bool {
        self.timer.is_running()
            || self.reveal.is_animating()
            || self.images.iter().any(ProgressiveImage::is_loading)
            || self.thumbnails.iter().any(PressableState::is_animating)
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    pub fn slide_count(&self) -> usize {
        self.config.slides.len()
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn controllers_visible(&self) -> bool {
        self.controllers_visible
    }

    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    pub fn rendered(&self) -> RenderedPair {
        self.rendered
    }

    pub fn timer_value(&self, now: Instant) -> f32 {
        self.timer.value(now)
    }

    /// Transform of a mounted slide, `None` for slides that are not rendered
    pub fn transform(&self, index: usize, now: Instant) -> Option<SlideTransform> {
        self.rendered.contains(index).then(|| {
            curves::slide_transform(
                index,
                self.active_index,
                self.slide_count(),
                self.timer.value(now),
                self.config.rotate_degree,
            )
        })
    }

    pub fn bar_progress(&self, now: Instant) -> f32 {
        self.reveal.bar_progress(now)
    }

    pub fn strip_progress(&self, now: Instant) -> f32 {
        self.reveal.strip_progress(now)
    }

    /// Loader rotation, one turn per second since mount
    pub fn spinner_angle(&self, now: Instant) -> f32 {
        self.mounted_at.map_or(0.0, |mounted| {
            now.saturating_duration_since(mounted).as_secs_f32() * std::f32::consts::TAU
        })
    }

    pub fn controller_state(&self) -> ControllerState {
        ControllerState {
            muted: self.muted,
            paused: self.paused,
            controllers_visible: self.controllers_visible,
            active_index: self.active_index,
            slide_count: self.slide_count(),
        }
    }
}

fn slide_states(slides: &[Slide]) -> (Vec<ProgressiveImage>, Vec<PressableState>) {
    slides
        .iter()
        .map(|slide| {
            (
                ProgressiveImage::new(slide.source.clone()),
                PressableState::new(false),
            )
        })
        .unzip()
}
