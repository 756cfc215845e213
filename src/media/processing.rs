//! Pixel processing for slide backgrounds
//!
//! The background layer of each slide is a blurred copy of the image. The
//! blur is a multi-pass box blur over RGBA bytes, which approximates a
//! gaussian well enough once it is scaled up behind the sharp layer.

/// Radius of the background blur, in pixels of the downscaled copy
pub const BACKGROUND_BLUR_RADIUS: usize = 3;
/// Number of box passes
pub const BACKGROUND_BLUR_PASSES: usize = 2;
/// Longest edge of the copy that gets blurred
pub const BACKGROUND_MAX_EDGE: u32 = 480;

const CHANNELS: usize = 4;

/// Blur RGBA `data` in place
pub fn box_blur(data: &mut [u8], width: usize, height: usize, radius: usize, passes: usize) {
    if radius == 0 || passes == 0 || width == 0 || height == 0 {
        return;
    }
    debug_assert_eq!(data.len(), width * height * CHANNELS);

    let mut scratch = vec![0u8; data.len()];
    for _ in 0..passes {
        blur_rows(data, &mut scratch, width, height, radius);
        blur_columns(&scratch, data, width, height, radius);
    }
}

/// Horizontal pass from `src` into `dst`
fn blur_rows(src: &[u8], dst: &mut [u8], width: usize, height: usize, radius: usize) {
    let window = (2 * radius + 1) as u32;
    let last = width - 1;

    for y in 0..height {
        let row = y * width;
        for channel in 0..CHANNELS {
            let at = |x: usize| src[(row + x) * CHANNELS + channel] as u32;

            // Edge pixels are repeated outside the image
            let mut sum = at(0) * (radius as u32 + 1);
            for i in 1..=radius {
                sum += at(i.min(last));
            }

            for x in 0..width {
                dst[(row + x) * CHANNELS + channel] = ((sum + window / 2) / window) as u8;
                let incoming = at((x + radius + 1).min(last));
                let outgoing = at(x.saturating_sub(radius));
                sum = sum + incoming - outgoing;
            }
        }
    }
}

/// Vertical pass from `src` into `dst`
fn blur_columns(src: &[u8], dst: &mut [u8], width: usize, height: usize, radius: usize) {
    let window = (2 * radius + 1) as u32;
    let last = height - 1;

    for x in 0..width {
        for channel in 0..CHANNELS {
            let at = |y: usize| src[(y * width + x) * CHANNELS + channel] as u32;

            let mut sum = at(0) * (radius as u32 + 1);
            for i in 1..=radius {
                sum += at(i.min(last));
            }

            for y in 0..height {
                dst[(y * width + x) * CHANNELS + channel] = ((sum + window / 2) / window) as u8;
                let incoming = at((y + radius + 1).min(last));
                let outgoing = at(y.saturating_sub(radius));
                sum = sum + incoming - outgoing;
            }
        }
    }
}
