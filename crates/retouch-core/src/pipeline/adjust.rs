//! Per-pixel tone adjustments: grayscale and brightness/contrast.

use rayon::prelude::*;

use crate::image::Image;

// Rec.601 luma coefficients
const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

// Use parallelism for >100k pixels
const PARALLEL_THRESHOLD: usize = 100_000 * Image::CHANNELS;

// Process in chunks of 256 pixels for good cache locality
const CHUNK_SIZE: usize = 256 * Image::CHANNELS;

/// Collapse each pixel to its luminance, keeping the three-channel layout.
///
/// The result is visually gray but still an RGB image, so every later
/// stage and every consumer sees the same pixel shape.
pub fn to_grayscale(image: &mut Image) {
    for pixel in image.data_mut().chunks_exact_mut(Image::CHANNELS) {
        let luma = luminance(pixel[0], pixel[1], pixel[2]);
        pixel[0] = luma;
        pixel[1] = luma;
        pixel[2] = luma;
    }
}

/// Luminance of one RGB pixel, rounded to 8 bits.
#[inline]
pub(crate) fn luminance(r: u8, g: u8, b: u8) -> u8 {
    (LUMA_R * r as f32 + LUMA_G * g as f32 + LUMA_B * b as f32)
        .round()
        .min(255.0) as u8
}

/// Apply `clamp(contrast * value + brightness, 0, 255)` to every channel.
///
/// The two adjustments share one affine pass, as a single multiply-add per
/// sample. Out-of-range inputs saturate instead of wrapping.
pub fn apply_brightness_contrast(image: &mut Image, contrast: f32, brightness: i32) {
    let beta = brightness as f32;
    let data = image.data_mut();

    if data.len() >= PARALLEL_THRESHOLD {
        // Parallel processing for large images
        data.par_chunks_mut(CHUNK_SIZE).for_each(|chunk| {
            for value in chunk.iter_mut() {
                *value = remap_channel(*value, contrast, beta);
            }
        });
    } else {
        // Sequential processing for small images
        for value in data.iter_mut() {
            *value = remap_channel(*value, contrast, beta);
        }
    }
}

#[inline(always)]
fn remap_channel(value: u8, alpha: f32, beta: f32) -> u8 {
    (alpha * value as f32 + beta).round().clamp(0.0, 255.0) as u8
}
