//! Image resizing: area averaging for downscale, bilinear for upscale.

use crate::image::Image;

/// Target dimensions for a percentage scale, clamped to at least 1x1 so
/// extreme shrink factors still produce an image.
pub fn scaled_dimensions((width, height): (u32, u32), scale: u32) -> (u32, u32) {
    let new_width = ((width as f32 * scale as f32 / 100.0).round() as u32).max(1);
    let new_height = ((height as f32 * scale as f32 / 100.0).round() as u32).max(1);
    (new_width, new_height)
}

/// Resize to exact target dimensions.
///
/// Shrinking averages each destination pixel over the source region it
/// covers, including fractional rows and columns; enlarging interpolates
/// bilinearly between the four nearest source pixels.
pub fn resize(image: &Image, new_width: u32, new_height: u32) -> Image {
    if (new_width, new_height) == image.dimensions() {
        return image.clone();
    }

    if new_width <= image.width() && new_height <= image.height() {
        resize_area(image, new_width, new_height)
    } else {
        resize_bilinear(image, new_width, new_height)
    }
}

fn resize_area(image: &Image, new_width: u32, new_height: u32) -> Image {
    let x_ratio = image.width() as f32 / new_width as f32;
    let y_ratio = image.height() as f32 / new_height as f32;
    let mut out = Image::new(new_width, new_height);

    for dy in 0..new_height {
        let sy0 = dy as f32 * y_ratio;
        let sy1 = sy0 + y_ratio;
        let iy1 = (sy1.ceil() as u32).min(image.height());

        for dx in 0..new_width {
            let sx0 = dx as f32 * x_ratio;
            let sx1 = sx0 + x_ratio;
            let ix1 = (sx1.ceil() as u32).min(image.width());

            let mut acc = [0.0f32; 3];
            let mut area = 0.0f32;
            for iy in sy0.floor() as u32..iy1 {
                let wy = overlap(iy as f32, sy0, sy1);
                for ix in sx0.floor() as u32..ix1 {
                    let weight = overlap(ix as f32, sx0, sx1) * wy;
                    let pixel = image.pixel(ix, iy);
                    for c in 0..3 {
                        acc[c] += pixel[c] as f32 * weight;
                    }
                    area += weight;
                }
            }

            let mut rgb = [0u8; 3];
            for c in 0..3 {
                rgb[c] = (acc[c] / area).round().clamp(0.0, 255.0) as u8;
            }
            out.set_pixel(dx, dy, rgb);
        }
    }

    out
}

/// Length of the overlap between the unit cell starting at `cell` and the
/// interval `[lo, hi)`.
#[inline]
fn overlap(cell: f32, lo: f32, hi: f32) -> f32 {
    (hi.min(cell + 1.0) - lo.max(cell)).max(0.0)
}

fn resize_bilinear(image: &Image, new_width: u32, new_height: u32) -> Image {
    let x_ratio = image.width() as f32 / new_width as f32;
    let y_ratio = image.height() as f32 / new_height as f32;
    let mut out = Image::new(new_width, new_height);

    for dy in 0..new_height {
        let sy = ((dy as f32 + 0.5) * y_ratio - 0.5).max(0.0);
        let y0 = sy.floor() as u32;
        let y1 = (y0 + 1).min(image.height() - 1);
        let fy = sy - y0 as f32;

        for dx in 0..new_width {
            let sx = ((dx as f32 + 0.5) * x_ratio - 0.5).max(0.0);
            let x0 = sx.floor() as u32;
            let x1 = (x0 + 1).min(image.width() - 1);
            let fx = sx - x0 as f32;

            let p00 = image.pixel(x0, y0);
            let p10 = image.pixel(x1, y0);
            let p01 = image.pixel(x0, y1);
            let p11 = image.pixel(x1, y1);

            let mut rgb = [0u8; 3];
            for c in 0..3 {
                let top = p00[c] as f32 * (1.0 - fx) + p10[c] as f32 * fx;
                let bottom = p01[c] as f32 * (1.0 - fx) + p11[c] as f32 * fx;
                rgb[c] = (top * (1.0 - fy) + bottom * fy)
                    .round()
                    .clamp(0.0, 255.0) as u8;
            }
            out.set_pixel(dx, dy, rgb);
        }
    }

    out
}
