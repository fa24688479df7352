//! Tests for the preview pipeline

use super::*;
use crate::models::FilterSettings;

/// 2x2 gradient for exact pixel checks.
fn quad() -> Image {
    let mut image = Image::new(2, 2);
    image.set_pixel(0, 0, [10, 20, 30]);
    image.set_pixel(1, 0, [40, 50, 60]);
    image.set_pixel(0, 1, [70, 80, 90]);
    image.set_pixel(1, 1, [200, 210, 220]);
    image
}

#[test]
fn neutral_settings_are_the_identity() {
    let base = quad();
    let preview = render_preview(&base, &FilterSettings::default());
    assert_eq!(preview, base);
}

#[test]
fn grayscale_collapses_channels_to_luminance() {
    let mut image = Image::from_pixel(2, 2, [255, 0, 0]);
    to_grayscale(&mut image);
    // 0.299 * 255 rounds to 76
    assert_eq!(image.pixel(0, 0), [76, 76, 76]);
    assert_eq!(image.pixel(1, 1), [76, 76, 76]);
}

#[test]
fn grayscale_preserves_neutral_gray() {
    let mut image = Image::from_pixel(3, 3, [128, 128, 128]);
    to_grayscale(&mut image);
    assert_eq!(image.pixel(1, 1), [128, 128, 128]);
}

#[test]
fn brightness_contrast_is_affine_and_saturating() {
    let mut image = Image::from_pixel(2, 1, [100, 200, 50]);
    apply_brightness_contrast(&mut image, 1.0, 50);
    assert_eq!(image.pixel(0, 0), [150, 250, 100]);

    let mut image = Image::from_pixel(2, 1, [100, 200, 50]);
    apply_brightness_contrast(&mut image, 2.0, 0);
    assert_eq!(image.pixel(0, 0), [200, 255, 100]);

    let mut image = Image::from_pixel(2, 1, [100, 200, 50]);
    apply_brightness_contrast(&mut image, 0.5, -100);
    assert_eq!(image.pixel(0, 0), [0, 0, 0]);
}

#[test]
fn extreme_settings_do_not_panic() {
    // Out-of-domain values are the caller's bug, but they must degrade
    // into saturated pixels rather than crash.
    let base = quad();
    let settings = FilterSettings {
        brightness: 100_000,
        blur: 0,
        contrast: 1000.0,
        scale: 100,
        grayscale: false,
    };
    let preview = render_preview(&base, &settings);
    assert_eq!(preview.pixel(0, 0), [255, 255, 255]);
}

#[test]
fn gaussian_kernel_is_normalized() {
    for strength in 1..=20u32 {
        let ksize = 2 * strength as usize + 1;
        let sigma = 0.3 * ((ksize as f32 - 1.0) * 0.5 - 1.0) + 0.8;
        let kernel = blur::gaussian_kernel_1d(ksize, sigma);
        assert_eq!(kernel.len(), ksize);
        let sum: f32 = kernel.iter().sum();
        assert!((sum - 1.0).abs() < 1e-4, "kernel sum {} for {}", sum, ksize);
    }
}

#[test]
fn blur_preserves_dimensions_and_uniform_color() {
    let image = Image::from_pixel(16, 9, [120, 60, 200]);
    let blurred = gaussian_blur(&image, 5);
    assert_eq!(blurred.dimensions(), (16, 9));
    // A weighted average of identical values is the same value
    assert_eq!(blurred, image);
}

#[test]
fn blur_spreads_a_bright_spike() {
    let mut image = Image::new(9, 9);
    image.set_pixel(4, 4, [255, 255, 255]);
    let blurred = gaussian_blur(&image, 2);

    let center = blurred.pixel(4, 4);
    let neighbor = blurred.pixel(4, 5);
    assert!(center[0] < 255, "center should lose energy");
    assert!(neighbor[0] > 0, "neighbors should gain energy");
    assert!(center[0] >= neighbor[0]);
}

#[test]
fn blur_strength_zero_is_identity() {
    let image = quad();
    assert_eq!(gaussian_blur(&image, 0), image);
}

#[test]
fn scaled_dimensions_round_and_clamp() {
    assert_eq!(scaled_dimensions((100, 100), 10), (10, 10));
    assert_eq!(scaled_dimensions((100, 100), 200), (200, 200));
    // round(3 * 0.5) = round(1.5) = 2
    assert_eq!(scaled_dimensions((3, 3), 50), (2, 2));
    // A tiny image at minimum scale clamps to 1x1 instead of vanishing
    assert_eq!(scaled_dimensions((4, 4), 10), (1, 1));
}

#[test]
fn area_downscale_averages_source_pixels() {
    let mut image = Image::new(2, 2);
    image.set_pixel(0, 0, [0, 0, 0]);
    image.set_pixel(1, 0, [255, 255, 255]);
    image.set_pixel(0, 1, [255, 255, 255]);
    image.set_pixel(1, 1, [0, 0, 0]);

    let small = resize(&image, 1, 1);
    assert_eq!(small.dimensions(), (1, 1));
    // (0 + 255 + 255 + 0) / 4 = 127.5, rounds to 128
    assert_eq!(small.pixel(0, 0), [128, 128, 128]);
}

#[test]
fn fractional_downscale_keeps_all_rows_weighted() {
    // 3x1 -> 2x1: each output pixel covers 1.5 source pixels
    let mut image = Image::new(3, 1);
    image.set_pixel(0, 0, [30, 30, 30]);
    image.set_pixel(1, 0, [90, 90, 90]);
    image.set_pixel(2, 0, [150, 150, 150]);

    let small = resize(&image, 2, 1);
    // left: (30 * 1.0 + 90 * 0.5) / 1.5 = 50
    assert_eq!(small.pixel(0, 0), [50, 50, 50]);
    // right: (90 * 0.5 + 150 * 1.0) / 1.5 = 130
    assert_eq!(small.pixel(1, 0), [130, 130, 130]);
}

#[test]
fn bilinear_upscale_preserves_uniform_color() {
    let image = Image::from_pixel(3, 3, [10, 90, 170]);
    let large = resize(&image, 6, 6);
    assert_eq!(large.dimensions(), (6, 6));
    for y in 0..6 {
        for x in 0..6 {
            assert_eq!(large.pixel(x, y), [10, 90, 170]);
        }
    }
}

#[test]
fn upscale_interpolates_between_pixels() {
    let mut image = Image::new(2, 1);
    image.set_pixel(0, 0, [0, 0, 0]);
    image.set_pixel(1, 0, [200, 200, 200]);

    let large = resize(&image, 4, 1);
    // Edge pixels clamp to the nearest source sample
    assert_eq!(large.pixel(0, 0), [0, 0, 0]);
    assert_eq!(large.pixel(3, 0), [200, 200, 200]);
    // Interior pixels land between the two sources
    let mid = large.pixel(1, 0)[0];
    assert!(mid > 0 && mid < 200);
}

#[test]
fn stages_apply_in_fixed_order() {
    // Grayscale must run before the brightness offset: luminance of pure
    // red is 30, plus 10 gives 40 on every channel. Reversing the order
    // would brighten the channels before weighting and land elsewhere.
    let base = Image::from_pixel(2, 2, [100, 0, 0]);
    let settings = FilterSettings {
        brightness: 10,
        grayscale: true,
        ..FilterSettings::default()
    };
    let preview = render_preview(&base, &settings);
    assert_eq!(preview.pixel(0, 0), [40, 40, 40]);
}

#[test]
fn scale_runs_last_on_adjusted_pixels() {
    let base = Image::from_pixel(4, 4, [100, 100, 100]);
    let settings = FilterSettings {
        brightness: 55,
        scale: 50,
        ..FilterSettings::default()
    };
    let preview = render_preview(&base, &settings);
    assert_eq!(preview.dimensions(), (2, 2));
    assert_eq!(preview.pixel(0, 0), [155, 155, 155]);
}
