//! Asynchronous image loading
//!
//! Fetches the bytes behind an [`ImageSource`], decodes them off the async
//! executor and prepares both the sharp and the blurred background layer.

use anyhow::{Context, Result};
use iced::widget::image::Handle;
use tracing::debug;

use super::processing::{
    BACKGROUND_BLUR_PASSES, BACKGROUND_BLUR_RADIUS, BACKGROUND_MAX_EDGE, box_blur,
};
use super::source::ImageSource;
use crate::error::LoadError;

/// Decoded slide image, ready for drawing
#[derive(Debug, Clone)]
pub struct LoadedImage {
    pub width: u32,
    pub height: u32,
    /// Full resolution layer
    pub sharp: Handle,
    /// Downscaled and blurred layer
    pub blurred: Handle,
}

/// Load and decode `source`
pub async fn load(source: ImageSource) -> Result<LoadedImage, LoadError> {
    debug!("Loading image {:?}", source);
    let bytes = fetch_bytes(&source)
        .await
        .map_err(|e| LoadError::Fetch(format!("{:#}", e)))?;

    tokio::task::spawn_blocking(move || decode(&bytes))
        .await
        .map_err(|e| LoadError::Decode(e.to_string()))?
}

async fn fetch_bytes(source: &ImageSource) -> Result<Vec<u8>> {
    match source {
        ImageSource::Path(path) => tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display())),
        ImageSource::Url(url) => {
            let response = reqwest::get(url)
                .await
                .with_context(|| format!("Failed to request {}", url))?
                .error_for_status()
                .with_context(|| format!("Bad response for {}", url))?;
            let bytes = response
                .bytes()
                .await
                .context("Failed to read response body")?;
            Ok(bytes.to_vec())
        }
        ImageSource::Bytes(bytes) => Ok(bytes.to_vec()),
    }
}

/// Decode encoded bytes into both drawing layers
pub fn decode(bytes: &[u8]) -> Result<LoadedImage, LoadError> {
    let image = image::load_from_memory(bytes).map_err(|e| LoadError::Decode(e.to_string()))?;

    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    if width == 0 || height == 0 {
        return Err(LoadError::Decode("image has no pixels".to_string()));
    }
    let sharp = Handle::from_rgba(width, height, rgba.into_raw());

    let small = image
        .thumbnail(BACKGROUND_MAX_EDGE, BACKGROUND_MAX_EDGE)
        .to_rgba8();
    let (small_width, small_height) = small.dimensions();
    let mut pixels = small.into_raw();
    box_blur(
        &mut pixels,
        small_width as usize,
        small_height as usize,
        BACKGROUND_BLUR_RADIUS,
        BACKGROUND_BLUR_PASSES,
    );
    let blurred = Handle::from_rgba(small_width, small_height, pixels);

    Ok(LoadedImage {
        width,
        height,
        sharp,
        blurred,
    })
}
