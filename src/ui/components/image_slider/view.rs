//! Slider rendering

use iced::time::Instant;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{
    Column, Space, Stack, button, column, container, mouse_area, opaque, row, scrollable, svg,
    text,
};
use iced::{Alignment, Border, Element, Fill, Font, Padding, Vector};

use super::config::{ContainerStyleFn, TextStyle};
use super::state::ImageSlider;
use super::Event;
use crate::ui::animation::SlideTransform;
use crate::ui::animation::reveal::travel_offset;
use crate::ui::icons;
use crate::ui::primitives::progressive_image::{self, Fit, ImageLayer, Layer, ProgressiveImage};
use crate::ui::primitives::{Feedback, offset, pressable};
use crate::ui::theme;

const TITLE_SIZE: f32 = 17.0;
const DATE_SIZE: f32 = 14.0;
const THUMBNAIL_RADIUS: f32 = 10.0;
const THUMBNAIL_SPACING: f32 = 10.0;
const PAUSE_ICON_SCALE: f32 = 1.3;
const CONTROLLER_WIDTH_SCALE: f32 = 4.5;

impl<Message> ImageSlider<Message> {
    /// Render the slider at `now`
    pub fn view(&self, now: Instant) -> Element<'_, Event> {
        let style = &self.config.style;
        let spinner = self.spinner_angle(now);

        // Mounted slides only, later indices on top
        let slides: Vec<Element<'_, Event>> = self
            .rendered()
            .indices()
            .into_iter()
            .filter_map(|index| {
                let transform = self.transform(index, now)?;
                let image = self.images.get(index)?;
                Some(view_slide(image, transform, spinner, style.slide_container))
            })
            .collect();

        let surface = mouse_area(Stack::with_children(slides).width(Fill).height(Fill))
            .on_press(Event::SurfacePressed);

        container(iced::widget::stack![surface, self.view_controllers(now)])
            .width(self.config.width)
            .height(self.config.height)
            .clip(true)
            .style(style.container.unwrap_or(theme::slider_container))
            .into()
    }

    /// Bottom overlay: title, date, thumbnails and the controller
    fn view_controllers(&self, now: Instant) -> Element<'_, Event> {
        let config = &self.config;
        let style = &config.style;
        let width = config.width;
        let spinner = self.spinner_angle(now);

        let mut content = Column::new().width(Fill);

        if config.has_title() {
            let title_style = style.title.unwrap_or(TextStyle {
                size: TITLE_SIZE,
                color: theme::PRIMARY,
                bold: true,
            });
            let bottom = title_bottom_padding(width, config.has_date());
            content = content.push(
                container(styled_text(&config.title, title_style))
                    .width(width * 0.9)
                    .padding(Padding::new(0.0).left(width * 0.1).bottom(bottom)),
            );
        }

        if let Some(date) = config.date.as_deref().filter(|d| !d.is_empty()) {
            let date_style = style.date.unwrap_or(TextStyle {
                size: DATE_SIZE,
                color: theme::PRIMARY,
                bold: false,
            });
            content = content.push(
                container(styled_text(date, date_style))
                    .width(width * 0.9)
                    .padding(Padding::new(0.0).left(width * 0.1).bottom(width * 0.02)),
            );
        }

        let thumbnails = self
            .images
            .iter()
            .zip(&self.thumbnails)
            .enumerate()
            .map(|(index, (image, state))| {
                pressable(progressive_image::thumbnail(image, THUMBNAIL_RADIUS, spinner))
                    .state(state)
                    .on_press(Event::ThumbnailPressed(index))
                    .feedback(Feedback::platform_default(true))
                    .press_dim(cfg!(target_os = "ios"))
                    .border(Border {
                        radius: THUMBNAIL_RADIUS.into(),
                        width: 1.0,
                        color: theme::PRIMARY,
                    })
                    .width(config.thumbnail_width())
                    .height(config.thumbnail_height())
                    .into()
            })
            .collect::<Vec<Element<'_, Event>>>();

        let strip = scrollable(
            row(thumbnails)
                .spacing(THUMBNAIL_SPACING)
                .padding(Padding::new(0.0).left(width * 0.1).right(THUMBNAIL_SPACING)),
        )
        .direction(Direction::Horizontal(
            Scrollbar::new().width(0).scroller_width(0),
        ))
        .style(theme::thumbnail_strip)
        .width(Fill);

        let strip_shift = travel_offset(self.strip_progress(now), width);
        content = content.push(offset(strip, Vector::new(strip_shift, 0.0)));

        let controller: Element<'_, Event> = match &self.controller {
            Some(render) => render(self.controller_state()),
            None => self.view_default_controller(),
        };
        content = content.push(controller);

        let block = container(content)
            .width(Fill)
            .style(style.controllers.unwrap_or(theme::controllers));

        // Taps on the overlay must not reach the slide surface
        let bar_shift = travel_offset(self.bar_progress(now), config.height);
        let overlay = offset(opaque(block), Vector::new(0.0, bar_shift));

        column![
            Space::new().height(Fill),
            overlay,
            Space::new().height(config.height * 0.05),
        ]
        .width(Fill)
        .height(Fill)
        .into()
    }

    /// Mute, pause/play and gallery icons
    fn view_default_controller(&self) -> Element<'_, Event> {
        let size = self.config.icon_size;
        let bar = row![
            icon_button(mute_icon(self.is_muted()), size, Event::MutePressed),
            Space::new().width(Fill),
            icon_button(
                pause_icon(self.is_paused()),
                size * PAUSE_ICON_SCALE,
                Event::PausePressed
            ),
            Space::new().width(Fill),
            icon_button(icons::GALLERY, size, Event::GalleryPressed),
        ]
        .width(size * CONTROLLER_WIDTH_SCALE)
        .align_y(Alignment::Center);

        container(bar)
            .padding(Padding::new(0.0).top(self.config.width * 0.05))
            .center_x(Fill)
            .style(
                self.config
                    .style
                    .controller_container
                    .unwrap_or(theme::controller_container),
            )
            .into()
    }
}

/// Space under the title; without a date it keeps the gap the date would have had
fn title_bottom_padding(width: f32, has_date: bool) -> f32 {
    if has_date { width * 0.005 } else { width * 0.02 }
}

/// Shows the action a tap performs: unmute while muted
fn mute_icon(muted: bool) -> &'static str {
    if muted { icons::UNMUTE } else { icons::MUTE }
}

fn pause_icon(paused: bool) -> &'static str {
    if paused { icons::PLAY } else { icons::PAUSE }
}

/// Blurred cover copy under a contained copy, both with the same transform
fn view_slide(
    image: &ProgressiveImage,
    transform: SlideTransform,
    spinner_angle: f32,
    style: Option<ContainerStyleFn>,
) -> Element<'_, Event> {
    let background = progressive_image::view(
        ImageLayer::new(image)
            .fit(Fit::Cover)
            .layer(Layer::Blurred)
            .transform(transform)
            .hide_loader(true),
    );
    let foreground = progressive_image::view(
        ImageLayer::new(image)
            .fit(Fit::Contain)
            .transform(transform)
            .spinner_angle(spinner_angle),
    );

    container(iced::widget::stack![background, foreground])
        .width(Fill)
        .height(Fill)
        .style(style.unwrap_or(theme::slide_container))
        .into()
}

fn styled_text(content: &str, style: TextStyle) -> Element<'_, Event> {
    let weight = if style.bold {
        theme::BOLD_WEIGHT
    } else {
        iced::font::Weight::Normal
    };
    text(content)
        .size(style.size)
        .color(style.color)
        .font(Font {
            weight,
            ..Default::default()
        })
        .into()
}

fn icon_button(icon: &'static str, size: f32, event: Event) -> Element<'static, Event> {
    button(
        svg(svg::Handle::from_memory(icon.as_bytes()))
            .width(size)
            .height(size)
            .style(|_theme, _status| svg::Style {
                color: Some(theme::icon_color()),
            }),
    )
    .padding(0)
    .style(theme::controller_icon_button)
    .on_press(event)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::components::image_slider::{Slide, SliderConfig};

    fn slider(count: usize) -> ImageSlider<()> {
        let slides = (0..count)
            .map(|i| Slide::new(format!("/tmp/slide-{}.png", i).as_str()))
            .collect();
        ImageSlider::new(SliderConfig::new(slides, "Title").date(Some("Oct 18, 2026".into())))
            .expect("valid config")
    }

    #[test]
    fn view_builds_for_every_state() {
        let mut slider = slider(3);
        let t0 = Instant::now();
        slider.mount(t0);
        let _ = slider.view(t0);

        slider.toggle_controllers(t0);
        slider.toggle_pause(t0);
        slider.toggle_mute();
        let _ = slider.view(t0 + iced::time::Duration::from_millis(500));
    }

    #[test]
    fn custom_controller_replaces_icons() {
        use std::cell::RefCell;
        use std::rc::Rc;

        let seen = Rc::new(RefCell::new(Vec::new()));
        let recorder = Rc::clone(&seen);
        let mut slider = slider(2).controller(move |state| {
            recorder.borrow_mut().push(state);
            text(format!("{}", state.muted)).into()
        });
        slider.toggle_mute();

        let _ = slider.view(Instant::now());
        let seen = seen.borrow();
        assert_eq!(seen.len(), 1, "renderer runs once per view");
        assert!(seen[0].muted);
        assert_eq!(seen[0].slide_count, 2);
    }

    #[test]
    fn title_gap_grows_without_date() {
        assert!((title_bottom_padding(1000.0, true) - 5.0).abs() < 1e-3);
        assert!((title_bottom_padding(1000.0, false) - 20.0).abs() < 1e-3);
    }

    #[test]
    fn icons_follow_mute_and_pause_state() {
        assert_eq!(mute_icon(false), icons::MUTE);
        assert_eq!(mute_icon(true), icons::UNMUTE);
        assert_eq!(pause_icon(false), icons::PAUSE);
        assert_eq!(pause_icon(true), icons::PLAY);
        assert_ne!(icons::MUTE, icons::UNMUTE);
        assert_ne!(icons::PAUSE, icons::PLAY);
    }
}
