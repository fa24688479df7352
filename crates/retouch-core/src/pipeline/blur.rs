//! Separable Gaussian blur.

use rayon::prelude::*;

use crate::image::Image;

/// Blur an image with a Gaussian kernel of size `2 * strength + 1`.
///
/// The standard deviation is derived from the kernel size with the usual
/// `0.3 * ((ksize - 1) * 0.5 - 1) + 0.8` rule, so callers only choose the
/// slider strength. Uses a separable 2-pass convolution with clamped
/// borders; rows are processed in parallel.
pub fn gaussian_blur(image: &Image, strength: u32) -> Image {
    if strength == 0 {
        return image.clone();
    }

    let ksize = 2 * strength as usize + 1;
    let sigma = 0.3 * ((ksize as f32 - 1.0) * 0.5 - 1.0) + 0.8;
    let kernel = gaussian_kernel_1d(ksize, sigma);
    let half = kernel.len() / 2;

    let (width, height) = image.dimensions();
    let w = width as usize;
    let h = height as usize;
    let row_len = w * Image::CHANNELS;
    let data = image.data();

    // Work in f32 between the two passes for precision
    let mut temp = vec![0.0f32; data.len()];

    // Horizontal pass
    temp.par_chunks_mut(row_len).enumerate().for_each(|(y, row)| {
        for x in 0..w {
            for c in 0..Image::CHANNELS {
                let mut sum = 0.0f32;
                for (ki, &kv) in kernel.iter().enumerate() {
                    let sx = (x as isize + ki as isize - half as isize)
                        .clamp(0, w as isize - 1) as usize;
                    sum += data[y * row_len + sx * Image::CHANNELS + c] as f32 * kv;
                }
                row[x * Image::CHANNELS + c] = sum;
            }
        }
    });

    // Vertical pass, converting back to u8
    let mut out = vec![0u8; data.len()];
    out.par_chunks_mut(row_len).enumerate().for_each(|(y, row)| {
        for x in 0..w {
            for c in 0..Image::CHANNELS {
                let mut sum = 0.0f32;
                for (ki, &kv) in kernel.iter().enumerate() {
                    let sy = (y as isize + ki as isize - half as isize)
                        .clamp(0, h as isize - 1) as usize;
                    sum += temp[sy * row_len + x * Image::CHANNELS + c] * kv;
                }
                row[x * Image::CHANNELS + c] = sum.round().clamp(0.0, 255.0) as u8;
            }
        }
    });

    // Length is data.len() by construction
    Image::from_raw(width, height, out).unwrap_or_else(|| image.clone())
}

/// Generate a normalized 1-D Gaussian kernel of the given odd size.
pub(crate) fn gaussian_kernel_1d(size: usize, sigma: f32) -> Vec<f32> {
    let half = size / 2;

    let mut kernel: Vec<f32> = (0..size)
        .map(|i| {
            let x = i as f32 - half as f32;
            (-x * x / (2.0 * sigma * sigma)).exp()
        })
        .collect();

    // Normalize
    let sum: f32 = kernel.iter().sum();
    for v in kernel.iter_mut() {
        *v /= sum;
    }

    kernel
}
