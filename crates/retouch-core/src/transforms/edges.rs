//! Gradient-magnitude edge detection with dual thresholds.

use crate::image::Image;

const SOBEL_X: [[i32; 3]; 3] = [[-1, 0, 1], [-2, 0, 2], [-1, 0, 1]];
const SOBEL_Y: [[i32; 3]; 3] = [[-1, -2, -1], [0, 0, 0], [1, 2, 1]];

/// Gradient magnitudes at or above this value are edges unconditionally.
const HIGH_THRESHOLD: f32 = 200.0;

/// Gradient magnitudes between the low and high thresholds count as edges
/// only when an 8-connected neighbor is above the high threshold.
const LOW_THRESHOLD: f32 = 100.0;

// Rec.601 luma coefficients
const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

/// Detect edges, producing a binary (0 or 255) map replicated across all
/// three channels so the result keeps the editor's RGB pixel shape.
///
/// The image is reduced to luminance, convolved with the Sobel kernels,
/// and the gradient magnitude is thresholded at 100/200 on the 8-bit
/// scale. The outermost 1-pixel frame carries no gradient and stays
/// black, as does every pixel of a uniform image.
pub fn detect_edges(image: &Image) -> Image {
    let (width, height) = image.dimensions();
    let w = width as usize;
    let h = height as usize;
    let mut out = Image::new(width, height);

    if w < 3 || h < 3 {
        return out;
    }

    // Luminance plane
    let mut luma = vec![0.0f32; w * h];
    for (plane, pixel) in luma.iter_mut().zip(image.data().chunks_exact(3)) {
        *plane = LUMA_R * pixel[0] as f32 + LUMA_G * pixel[1] as f32 + LUMA_B * pixel[2] as f32;
    }

    // Sobel gradient magnitude; the border frame stays zero
    let mut magnitude = vec![0.0f32; w * h];
    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let mut gx = 0.0f32;
            let mut gy = 0.0f32;
            for ky in 0..3 {
                for kx in 0..3 {
                    let value = luma[(y + ky - 1) * w + (x + kx - 1)];
                    gx += value * SOBEL_X[ky][kx] as f32;
                    gy += value * SOBEL_Y[ky][kx] as f32;
                }
            }
            magnitude[y * w + x] = (gx * gx + gy * gy).sqrt();
        }
    }

    // Dual-threshold classification: strong edges pass, weak edges pass
    // only next to a strong one
    for y in 1..h - 1 {
        for x in 1..w - 1 {
            let mag = magnitude[y * w + x];
            let is_edge = if mag >= HIGH_THRESHOLD {
                true
            } else if mag >= LOW_THRESHOLD {
                has_strong_neighbor(&magnitude, w, x, y)
            } else {
                false
            };

            if is_edge {
                out.set_pixel(x as u32, y as u32, [255, 255, 255]);
            }
        }
    }

    out
}

/// True when any 8-connected neighbor exceeds the high threshold.
///
/// Callers only probe interior pixels, so all neighbor indices are in
/// bounds.
#[inline]
fn has_strong_neighbor(magnitude: &[f32], w: usize, x: usize, y: usize) -> bool {
    for ny in y - 1..=y + 1 {
        for nx in x - 1..=x + 1 {
            if (nx, ny) != (x, y) && magnitude[ny * w + nx] >= HIGH_THRESHOLD {
                return true;
            }
        }
    }
    false
}
