//! Contrast/brightness pre-enhancement.
//!
//! The tracer wants a hard-contrast view of the source so the darkness
//! verdicts split cleanly: brightness is scaled by 1.3, then contrast by 10.
//! Both follow PIL's `ImageEnhance` semantics, which the original filter
//! chain was built around: an enhancement with factor `f` interpolates
//! between a degenerate image and the original, `out = degenerate * (1 - f)
//! + original * f`, channel-wise, clamped to `[0, 255]`. For brightness the
//! degenerate image is black; for contrast it is the uniform gray at the
//! mean luma of the input.

use image::{Rgb, RgbImage};

pub const BRIGHTNESS_FACTOR: f64 = 1.3;
pub const CONTRAST_FACTOR: f64 = 10.0;

/// The fixed pre-stage: brightness x1.3, then contrast x10.
pub fn enhance(img: &RgbImage) -> RgbImage {
    adjust_contrast(&adjust_brightness(img, BRIGHTNESS_FACTOR), CONTRAST_FACTOR)
}

/// Brightness enhancement: interpolation from black, so every channel is
/// scaled by `factor`.
pub fn adjust_brightness(img: &RgbImage, factor: f64) -> RgbImage {
    map_channels(img, |v| v * factor)
}

/// Contrast enhancement: interpolation from the uniform gray image at the
/// rounded mean luma of the input.
pub fn adjust_contrast(img: &RgbImage, factor: f64) -> RgbImage {
    let mean = f64::from(mean_luma(img));
    map_channels(img, |v| mean + (v - mean) * factor)
}

/// Mean of the ITU-R 601 luma over all pixels, rounded to the nearest
/// integer level.
fn mean_luma(img: &RgbImage) -> u8 {
    let mut sum: u64 = 0;
    for Rgb([r, g, b]) in img.pixels() {
        // Same fixed-point grayscale conversion PIL's "L" mode uses.
        let luma = (u32::from(*r) * 19595 + u32::from(*g) * 38470 + u32::from(*b) * 7471
            + 0x8000)
            >> 16;
        sum += u64::from(luma);
    }
    let count = u64::from(img.width()) * u64::from(img.height());
    if count == 0 {
        return 0;
    }
    ((sum as f64 / count as f64) + 0.5) as u8
}

fn map_channels(img: &RgbImage, f: impl Fn(f64) -> f64) -> RgbImage {
    let mut out = RgbImage::new(img.width(), img.height());
    for (src, dst) in img.pixels().zip(out.pixels_mut()) {
        let Rgb([r, g, b]) = *src;
        *dst = Rgb([
            clamp_channel(f(f64::from(r))),
            clamp_channel(f(f64::from(g))),
            clamp_channel(f(f64::from(b))),
        ]);
    }
    out
}

fn clamp_channel(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}
