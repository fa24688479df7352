//! Preview rendering pipeline
//!
//! Derives the displayed preview from the base image and the current
//! slider settings. The pipeline is a pure function recomputed from
//! scratch on every call, never incrementally, so repeated slider changes
//! cannot accumulate rounding or interpolation error. Stage order is
//! fixed:
//!
//! 1. Grayscale conversion (if enabled)
//! 2. Brightness/contrast affine remap
//! 3. Gaussian blur
//! 4. Resize

mod adjust;
mod blur;
mod resize;

#[cfg(test)]
mod tests;

pub use adjust::{apply_brightness_contrast, to_grayscale};
pub use blur::gaussian_blur;
pub use resize::{resize, scaled_dimensions};

use crate::image::Image;
use crate::models::FilterSettings;

/// Render a preview image from the base image and the current settings.
///
/// Neutral settings reproduce the input pixel-for-pixel. The input is
/// never mutated.
pub fn render_preview(base: &Image, settings: &FilterSettings) -> Image {
    let mut image = base.clone();

    if settings.grayscale {
        adjust::to_grayscale(&mut image);
    }

    if settings.contrast != 1.0 || settings.brightness != 0 {
        adjust::apply_brightness_contrast(&mut image, settings.contrast, settings.brightness);
    }

    if settings.blur > 0 {
        image = blur::gaussian_blur(&image, settings.blur);
    }

    if settings.scale != 100 {
        let (width, height) = resize::scaled_dimensions(image.dimensions(), settings.scale);
        image = resize::resize(&image, width, height);
    }

    image
}
