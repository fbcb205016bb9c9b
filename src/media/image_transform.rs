// SPDX-License-Identifier: MPL-2.0
//! Image transformation functions for grayscale, mirror, blur, and
//! brightness/contrast operations.
//!
//! Every function takes the source image by reference and returns a new image,
//! leaving history bookkeeping to the caller.
//!
//! Channel arithmetic converts between `u8` and `f32`; results are clamped to
//! the channel range before the narrowing cast.
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]

use crate::domain::editing::EnhanceFactor;
use image_rs::{DynamicImage, GrayImage, Luma, Pixel, Rgb, RgbImage};

/// Standard deviation of the Gaussian blur, in source pixels.
pub const BLUR_RADIUS: f32 = 5.0;

// ==========================================================================
// Mode Conversions
// ==========================================================================

/// Convert an image to single-channel luminance with ITU-R 601-2 weights.
///
/// Alpha is dropped. Luminance input keeps its values, so converting an
/// image that is already single-channel returns identical pixels.
pub fn to_grayscale(image: &DynamicImage) -> DynamicImage {
    match image {
        DynamicImage::ImageLuma8(_) => image.clone(),
        DynamicImage::ImageLumaA8(_) => DynamicImage::ImageLuma8(image.to_luma8()),
        other => DynamicImage::ImageLuma8(luma_601(&other.to_rgb8())),
    }
}

/// Per-pixel `L = R * 299/1000 + G * 587/1000 + B * 114/1000`, in 16-bit
/// fixed point rounded to nearest.
fn luma_601(image: &RgbImage) -> GrayImage {
    GrayImage::from_fn(image.width(), image.height(), |x, y| {
        Luma([luma_of(*image.get_pixel(x, y))])
    })
}

fn luma_of(pixel: Rgb<u8>) -> u8 {
    let [r, g, b] = pixel.0.map(u32::from);
    ((r * 19_595 + g * 38_470 + b * 7_471 + 0x8000) >> 16) as u8
}

/// Coerce an image to three-channel RGB.
///
/// Alpha and palette information are dropped. RGB input is cloned untouched.
pub fn ensure_rgb(image: &DynamicImage) -> DynamicImage {
    match image {
        DynamicImage::ImageRgb8(_) => image.clone(),
        other => DynamicImage::ImageRgb8(other.to_rgb8()),
    }
}

// ==========================================================================
// Geometry and Filters
// ==========================================================================

/// Flip an image horizontally (mirror left-to-right).
pub fn flip_horizontal(image: &DynamicImage) -> DynamicImage {
    image.fliph()
}

/// Apply a Gaussian blur of the given standard deviation after coercing
/// the image to RGB.
pub fn gaussian_blur(image: &DynamicImage, sigma: f32) -> DynamicImage {
    ensure_rgb(image).blur(sigma)
}

// ==========================================================================
// Enhancement Passes
// ==========================================================================

/// Scale every channel by `factor` (blend toward black).
///
/// `1.0` leaves the image unchanged, `0.0` yields a black image.
pub fn adjust_brightness(image: &RgbImage, factor: EnhanceFactor) -> RgbImage {
    blend_toward(image, 0, factor)
}

/// Spread every channel away from the image's mean luminance by `factor`.
///
/// `1.0` leaves the image unchanged, `0.0` yields a flat gray image at the
/// mean luminance.
pub fn adjust_contrast(image: &RgbImage, factor: EnhanceFactor) -> RgbImage {
    blend_toward(image, mean_luminance(image), factor)
}

/// Brightness pass followed by a contrast pass computed on the brightened
/// image. Non-RGB input is coerced to RGB first.
pub fn adjust_brightness_contrast(
    image: &DynamicImage,
    brightness: EnhanceFactor,
    contrast: EnhanceFactor,
) -> DynamicImage {
    let rgb = image.to_rgb8();
    let brightened = adjust_brightness(&rgb, brightness);
    DynamicImage::ImageRgb8(adjust_contrast(&brightened, contrast))
}

/// Rounded mean of the ITU-R 601-2 luminance.
fn mean_luminance(image: &RgbImage) -> u8 {
    let count = u64::from(image.width()) * u64::from(image.height());
    if count == 0 {
        return 0;
    }
    let sum: u64 = image.pixels().map(|p| u64::from(luma_of(*p))).sum();
    ((sum as f64 / count as f64) + 0.5) as u8
}

fn blend_toward(image: &RgbImage, degenerate: u8, factor: EnhanceFactor) -> RgbImage {
    let mut output = image.clone();
    if factor.is_neutral() {
        return output;
    }
    let factor = factor.value();
    let base = f32::from(degenerate);
    for pixel in output.pixels_mut() {
        pixel.apply(|channel| {
            let blended = base + factor * (f32::from(channel) - base);
            blended.clamp(0.0, 255.0) as u8
        });
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::{GenericImageView, ImageBuffer, LumaA, Rgba};

    fn create_test_image(width: u32, height: u32) -> DynamicImage {
        let buffer = ImageBuffer::from_pixel(width, height, Rgba([0, 0, 0, 0]));
        DynamicImage::ImageRgba8(buffer)
    }

    fn uniform_rgb(value: [u8; 3]) -> RgbImage {
        RgbImage::from_pixel(2, 2, Rgb(value))
    }

    #[test]
    fn grayscale_produces_single_channel() {
        let img = create_test_image(4, 3);
        let gray = to_grayscale(&img);
        assert!(matches!(gray, DynamicImage::ImageLuma8(_)));
        assert_eq!(gray.dimensions(), (4, 3));
    }

    #[test]
    fn grayscale_is_idempotent() {
        let mut buffer = GrayImage::new(3, 1);
        buffer.put_pixel(0, 0, Luma([12]));
        buffer.put_pixel(1, 0, Luma([128]));
        buffer.put_pixel(2, 0, Luma([250]));
        let gray = DynamicImage::ImageLuma8(buffer);

        assert_eq!(to_grayscale(&gray), gray);
    }

    #[test]
    fn grayscale_drops_alpha() {
        let buffer = ImageBuffer::from_pixel(2, 2, LumaA([90u8, 10]));
        let gray = to_grayscale(&DynamicImage::ImageLumaA8(buffer));

        assert!(matches!(gray, DynamicImage::ImageLuma8(_)));
        assert_eq!(gray.to_luma8().get_pixel(0, 0).0, [90]);
    }

    #[test]
    fn grayscale_uses_601_weights() {
        let mut buffer = RgbImage::new(5, 1);
        buffer.put_pixel(0, 0, Rgb([255, 0, 0]));
        buffer.put_pixel(1, 0, Rgb([0, 255, 0]));
        buffer.put_pixel(2, 0, Rgb([0, 0, 255]));
        buffer.put_pixel(3, 0, Rgb([255, 255, 255]));
        buffer.put_pixel(4, 0, Rgb([10, 200, 90]));

        let gray = to_grayscale(&DynamicImage::ImageRgb8(buffer)).to_luma8();

        // 10 * 0.299 + 200 * 0.587 + 90 * 0.114 = 130.65
        assert_eq!(gray.into_raw(), vec![76, 150, 29, 255, 131]);
    }

    #[test]
    fn grayscale_ignores_alpha_of_rgba() {
        let rgba = DynamicImage::ImageRgba8(ImageBuffer::from_pixel(1, 1, Rgba([255, 0, 0, 7])));
        assert_eq!(to_grayscale(&rgba).to_luma8().get_pixel(0, 0).0, [76]);
    }

    #[test]
    fn ensure_rgb_drops_alpha_and_keeps_rgb() {
        let rgba = DynamicImage::ImageRgba8(ImageBuffer::from_pixel(1, 1, Rgba([1, 2, 3, 4])));
        let rgb = ensure_rgb(&rgba);
        assert!(matches!(rgb, DynamicImage::ImageRgb8(_)));
        assert_eq!(rgb.to_rgb8().get_pixel(0, 0).0, [1, 2, 3]);

        assert_eq!(ensure_rgb(&rgb), rgb);
    }

    #[test]
    fn flip_horizontal_mirrors_pixels_left_to_right() {
        // Create an image with distinct left and right sides
        let mut buffer = ImageBuffer::from_pixel(4, 2, Rgba([0, 0, 0, 255]));
        // Fill right half with white
        for x in 2..4 {
            for y in 0..2 {
                buffer.put_pixel(x, y, Rgba([255, 255, 255, 255]));
            }
        }
        let img = DynamicImage::ImageRgba8(buffer);

        let flipped = flip_horizontal(&img);
        let flipped_rgba = flipped.to_rgba8();

        assert_eq!(
            flipped_rgba.get_pixel(0, 0).0,
            [255, 255, 255, 255],
            "Top-left should be white after flip"
        );
        assert_eq!(
            flipped_rgba.get_pixel(3, 0).0,
            [0, 0, 0, 255],
            "Top-right should be black after flip"
        );
    }

    #[test]
    fn flip_horizontal_twice_is_identity() {
        let mut buffer = RgbImage::new(3, 2);
        for (x, y, pixel) in buffer.enumerate_pixels_mut() {
            *pixel = Rgb([x as u8 * 40, y as u8 * 90, 7]);
        }
        let img = DynamicImage::ImageRgb8(buffer);

        assert_eq!(flip_horizontal(&flip_horizontal(&img)), img);
    }

    #[test]
    fn blur_coerces_to_rgb_and_preserves_dimensions() {
        let img = create_test_image(8, 6);
        let blurred = gaussian_blur(&img, BLUR_RADIUS);
        assert!(matches!(blurred, DynamicImage::ImageRgb8(_)));
        assert_eq!(blurred.dimensions(), (8, 6));
    }

    #[test]
    fn blur_softens_a_hard_edge() {
        let mut buffer = RgbImage::from_pixel(20, 4, Rgb([0, 0, 0]));
        for x in 10..20 {
            for y in 0..4 {
                buffer.put_pixel(x, y, Rgb([255, 255, 255]));
            }
        }
        let blurred = gaussian_blur(&DynamicImage::ImageRgb8(buffer), BLUR_RADIUS).to_rgb8();

        let left_of_edge = blurred.get_pixel(9, 2).0[0];
        let right_of_edge = blurred.get_pixel(10, 2).0[0];
        assert!(left_of_edge > 0, "dark side should pick up light");
        assert!(right_of_edge < 255, "light side should pick up dark");
    }

    #[test]
    fn brightness_neutral_returns_unchanged() {
        let img = uniform_rgb([100, 150, 200]);
        assert_eq!(adjust_brightness(&img, EnhanceFactor::new(1.0)), img);
    }

    #[test]
    fn brightness_scales_and_clamps_channels() {
        let img = uniform_rgb([100, 150, 200]);

        let brighter = adjust_brightness(&img, EnhanceFactor::new(1.5));
        assert_eq!(brighter.get_pixel(0, 0).0, [150, 225, 255]);

        let darker = adjust_brightness(&img, EnhanceFactor::new(0.5));
        assert_eq!(darker.get_pixel(0, 0).0, [50, 75, 100]);

        let black = adjust_brightness(&img, EnhanceFactor::new(0.0));
        assert_eq!(black.get_pixel(0, 0).0, [0, 0, 0]);
    }

    #[test]
    fn brightness_accepts_factors_above_ten() {
        let img = uniform_rgb([5, 10, 13]);

        let boosted = adjust_brightness(&img, EnhanceFactor::new(20.0));
        assert_eq!(boosted.get_pixel(0, 0).0, [100, 200, 255]);
    }

    #[test]
    fn negative_brightness_clamps_to_black() {
        let img = uniform_rgb([5, 10, 13]);

        let inverted = adjust_brightness(&img, EnhanceFactor::new(-2.0));
        assert_eq!(inverted.get_pixel(0, 0).0, [0, 0, 0]);
    }

    #[test]
    fn contrast_zero_flattens_to_mean_gray() {
        let mut img = RgbImage::new(2, 1);
        img.put_pixel(0, 0, Rgb([0, 0, 0]));
        img.put_pixel(1, 0, Rgb([200, 200, 200]));

        let flat = adjust_contrast(&img, EnhanceFactor::new(0.0));
        assert_eq!(flat.get_pixel(0, 0).0, [100, 100, 100]);
        assert_eq!(flat.get_pixel(1, 0).0, [100, 100, 100]);
    }

    #[test]
    fn contrast_mean_uses_601_luminance() {
        let mut img = RgbImage::new(2, 1);
        img.put_pixel(0, 0, Rgb([255, 0, 0]));
        img.put_pixel(1, 0, Rgb([0, 0, 255]));

        // Luminances 76 and 29 average to 52.5, rounded to 53.
        let flat = adjust_brightness_contrast(
            &DynamicImage::ImageRgb8(img),
            EnhanceFactor::new(1.0),
            EnhanceFactor::new(0.0),
        )
        .to_rgb8();
        assert_eq!(flat.get_pixel(0, 0).0, [53, 53, 53]);
        assert_eq!(flat.get_pixel(1, 0).0, [53, 53, 53]);
    }

    #[test]
    fn contrast_increase_spreads_around_mean() {
        let mut img = RgbImage::new(2, 1);
        img.put_pixel(0, 0, Rgb([80, 80, 80]));
        img.put_pixel(1, 0, Rgb([120, 120, 120]));

        let spread = adjust_contrast(&img, EnhanceFactor::new(2.0));
        assert_eq!(spread.get_pixel(0, 0).0, [60, 60, 60]);
        assert_eq!(spread.get_pixel(1, 0).0, [140, 140, 140]);
    }

    #[test]
    fn brightness_contrast_identity_keeps_pixels() {
        let img = DynamicImage::ImageRgb8(uniform_rgb([12, 34, 56]));
        let adjusted =
            adjust_brightness_contrast(&img, EnhanceFactor::new(1.0), EnhanceFactor::new(1.0));
        assert_eq!(adjusted, img);
    }

    #[test]
    fn contrast_uses_brightened_image() {
        // Brightness 0 yields black; contrast over black must stay black.
        // Computing contrast from the original would restore gray values.
        let img = DynamicImage::ImageRgb8(uniform_rgb([100, 100, 100]));
        let adjusted =
            adjust_brightness_contrast(&img, EnhanceFactor::new(0.0), EnhanceFactor::new(2.0));
        assert_eq!(adjusted.to_rgb8().get_pixel(0, 0).0, [0, 0, 0]);
    }

    #[test]
    fn brightness_contrast_coerces_grayscale_to_rgb() {
        let gray = DynamicImage::ImageLuma8(GrayImage::from_pixel(2, 2, Luma([40])));
        let adjusted =
            adjust_brightness_contrast(&gray, EnhanceFactor::new(2.0), EnhanceFactor::new(1.0));
        assert!(matches!(adjusted, DynamicImage::ImageRgb8(_)));
        assert_eq!(adjusted.to_rgb8().get_pixel(1, 1).0, [80, 80, 80]);
    }
}
