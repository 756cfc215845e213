//! Progressive image primitive
//!
//! Tracks the load state of one image source and draws it with a canvas
//! program: a grey placeholder with a spinning arc while loading, then the
//! decoded image with the slide transform applied.
//!
//! # Design
//!
//! The state never loads anything itself. The owner asks for pending
//! requests with [`ProgressiveImage::take_request`], runs the loader and
//! reports back through [`ProgressiveImage::finish`].

use iced::widget::canvas::{self, Frame, Geometry, Path, Program, Stroke};
use iced::widget::{Canvas, container};
use iced::{Color, ContentFit, Element, Length, Point, Radians, Rectangle, Renderer, Size, Theme, mouse};
use tracing::warn;

use crate::error::LoadError;
use crate::media::{ImageSource, LoadedImage};
use crate::ui::animation::SlideTransform;
use crate::ui::theme;

/// Load state of a single source
#[derive(Debug, Clone)]
pub enum LoadState {
    Loading,
    Ready(LoadedImage),
    /// Broken image; nothing is drawn and the load is not retried
    Failed,
}

/// An image that shows a loader until its source has been decoded
#[derive(Debug, Clone)]
pub struct ProgressiveImage {
    source: ImageSource,
    state: LoadState,
    requested: bool,
}

impl ProgressiveImage {
    pub fn new(source: ImageSource) -> Self {
        Self {
            source,
            state: LoadState::Loading,
            requested: false,
        }
    }

    pub fn source(&self) -> &ImageSource {
        &self.source
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Back to `Loading`, e.g. after the source changed
    pub fn begin_load(&mut self) {
        self.state = LoadState::Loading;
        self.requested = false;
    }

    /// Hand out the source once per load
    pub fn take_request(&mut self) -> Option<ImageSource> {
        if self.is_loading() && !self.requested {
            self.requested = true;
            Some(self.source.clone())
        } else {
            None
        }
    }

    pub fn finish(&mut self, result: Result<LoadedImage, LoadError>) {
        self.state = match result {
            Ok(loaded) => LoadState::Ready(loaded),
            Err(e) => {
                warn!("slider image error: {} ({:?})", e, self.source);
                LoadState::Failed
            }
        };
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading)
    }

    pub fn loaded(&self) -> Option<&LoadedImage> {
        match &self.state {
            LoadState::Ready(loaded) => Some(loaded),
            _ => None,
        }
    }
}

/// How the image fills its bounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fit {
    /// Fill the bounds, cropping the overflow
    Cover,
    /// Fit entirely inside the bounds
    Contain,
}

/// Which decoded layer to draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Sharp,
    Blurred,
}

/// Canvas program drawing one [`ProgressiveImage`]
#[derive(Debug, Clone, Copy)]
pub struct ImageLayer<'a> {
    image: &'a ProgressiveImage,
    fit: Fit,
    layer: Layer,
    transform: SlideTransform,
    hide_loader: bool,
    spinner_angle: f32,
}

impl<'a> ImageLayer<'a> {
    pub fn new(image: &'a ProgressiveImage) -> Self {
        Self {
            image,
            fit: Fit::Cover,
            layer: Layer::Sharp,
            transform: SlideTransform::default(),
            hide_loader: false,
            spinner_angle: 0.0,
        }
    }

    pub fn fit(mut self, fit: Fit) -> Self {
        self.fit = fit;
        self
    }

    pub fn layer(mut self, layer: Layer) -> Self {
        self.layer = layer;
        self
    }

    pub fn transform(mut self, transform: SlideTransform) -> Self {
        self.transform = transform;
        self
    }

    pub fn hide_loader(mut self, hide: bool) -> Self {
        self.hide_loader = hide;
        self
    }

    /// Spinner rotation in radians
    pub fn spinner_angle(mut self, angle: f32) -> Self {
        self.spinner_angle = angle;
        self
    }
}

/// Rectangle an image of `image_size` occupies inside `bounds`
pub fn fitted_bounds(image_size: Size, bounds: Size, fit: Fit) -> Rectangle {
    if image_size.width <= 0.0 || image_size.height <= 0.0 {
        return Rectangle::new(Point::ORIGIN, bounds);
    }

    let scale_w = bounds.width / image_size.width;
    let scale_h = bounds.height / image_size.height;
    let scale = match fit {
        Fit::Cover => scale_w.max(scale_h),
        Fit::Contain => scale_w.min(scale_h),
    };

    let width = image_size.width * scale;
    let height = image_size.height * scale;
    Rectangle::new(
        Point::new((bounds.width - width) / 2.0, (bounds.height - height) / 2.0),
        Size::new(width, height),
    )
}

/// Grow or shrink `rect` around its center
pub fn scaled_about_center(rect: Rectangle, scale: f32) -> Rectangle {
    let width = rect.width * scale;
    let height = rect.height * scale;
    let center = rect.center();
    Rectangle::new(
        Point::new(center.x - width / 2.0, center.y - height / 2.0),
        Size::new(width, height),
    )
}

impl<'a, Message> Program<Message> for ImageLayer<'a> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let opacity = self.transform.opacity.clamp(0.0, 1.0);

        match self.image.state() {
            LoadState::Loading if !self.hide_loader => {
                let mut placeholder = theme::PLACEHOLDER;
                placeholder.a *= opacity;
                frame.fill_rectangle(Point::ORIGIN, bounds.size(), placeholder);
                draw_spinner(&mut frame, bounds.size(), self.spinner_angle, opacity);
            }
            LoadState::Ready(loaded) if opacity > 0.0 => {
                // The blurred layer keeps the aspect ratio, so both are placed by full size
                let handle = match self.layer {
                    Layer::Sharp => loaded.sharp.clone(),
                    Layer::Blurred => loaded.blurred.clone(),
                };
                let size = Size::new(loaded.width as f32, loaded.height as f32);
                let target = scaled_about_center(
                    fitted_bounds(size, bounds.size(), self.fit),
                    self.transform.scale,
                );
                let image = canvas::Image::new(handle)
                    .rotation(Radians(self.transform.rotation_degrees.to_radians()))
                    .opacity(opacity);
                frame.draw_image(target, image);
            }
            _ => {}
        }

        vec![frame.into_geometry()]
    }
}

fn draw_spinner(frame: &mut Frame, size: Size, angle: f32, opacity: f32) {
    let center = Point::new(size.width / 2.0, size.height / 2.0);
    let radius = (size.width.min(size.height) / 8.0).clamp(4.0, 10.0);
    let arc = Path::new(|builder| {
        builder.arc(canvas::path::Arc {
            center,
            radius,
            start_angle: Radians(angle),
            end_angle: Radians(angle + std::f32::consts::PI * 1.5),
        });
    });
    frame.stroke(
        &arc,
        Stroke::default()
            .with_width(2.0)
            .with_color(Color {
                a: theme::SPINNER.a * opacity,
                ..theme::SPINNER
            }),
    );
}

/// Full-size canvas element for `layer`
pub fn view<'a, Message: 'a>(layer: ImageLayer<'a>) -> Element<'a, Message> {
    Canvas::new(layer)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Small rounded image used in thumbnail strips
pub fn thumbnail<'a, Message: 'a>(
    image: &'a ProgressiveImage,
    radius: f32,
    spinner_angle: f32,
) -> Element<'a, Message> {
    match image.loaded() {
        Some(loaded) => container(
            iced::widget::image(loaded.sharp.clone())
                .width(Length::Fill)
                .height(Length::Fill)
                .content_fit(ContentFit::Cover)
                .border_radius(radius),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into(),
        None => view(ImageLayer::new(image).spinner_angle(spinner_angle)),
    }
}
