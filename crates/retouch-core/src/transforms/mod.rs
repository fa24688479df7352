//! Destructive geometric transforms.
//!
//! These operations permanently replace the base image and are recorded on
//! the undo stack by the editor; the functions themselves are pure.

mod edges;


pub use edges::detect_edges;

use serde::{Deserialize, Serialize};

use crate::image::Image;

/// Mirror axis for [`flip`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlipAxis {
    /// Mirror left-to-right
    Horizontal,
    /// Mirror top-to-bottom
    Vertical,
}

/// Rotate 90 degrees clockwise; output dimensions are swapped.
///
/// Source `(x, y)` maps to `(height - 1 - y, x)`, so four applications are
/// the identity.
pub fn rotate_90_cw(image: &Image) -> Image {
    let (width, height) = image.dimensions();
    let mut out = Image::new(height, width);

    for y in 0..height {
        let new_x = height - 1 - y;
        for x in 0..width {
            out.set_pixel(new_x, x, image.pixel(x, y));
        }
    }

    out
}

/// Mirror along the requested axis; dimensions are unchanged.
pub fn flip(image: &Image, axis: FlipAxis) -> Image {
    let (width, height) = image.dimensions();
    let mut out = Image::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let (sx, sy) = match axis {
                FlipAxis::Horizontal => (width - 1 - x, y),
                FlipAxis::Vertical => (x, height - 1 - y),
            };
            out.set_pixel(x, y, image.pixel(sx, sy));
        }
    }

    out
}
