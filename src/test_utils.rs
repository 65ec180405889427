//! Test utilities for gridcarve
//!
//! This module provides common rasters for testing grid operations.
//! It is only compiled when running tests.

use crate::gridcarve::hsla::Hsla;
use crate::gridcarve::raster::HslaImage;
use image::{Rgba, RgbaImage};

/// Creates a 2x2 RGBA image with predefined pixel values:
/// - (0,0): [200, 150, 100, 255] (opaque)
/// - (1,0): [100, 200, 150, 128] (semi-transparent)
/// - (0,1): [150, 100, 200, 64]  (more transparent)
/// - (1,1): [50, 75, 25, 0]      (fully transparent)
pub fn create_test_rgba_image() -> RgbaImage {
    let mut image = RgbaImage::new(2, 2);
    image.put_pixel(0, 0, Rgba([200, 150, 100, 255]));
    image.put_pixel(1, 0, Rgba([100, 200, 150, 128]));
    image.put_pixel(0, 1, Rgba([150, 100, 200, 64]));
    image.put_pixel(1, 1, Rgba([50, 75, 25, 0]));
    image
}

/// Creates an HSLA raster where every pixel is distinct.
///
/// Hue sweeps with `x`, lightness with `y`, and a small per-pixel offset
/// keeps lightness values unique so selections are deterministic.
pub fn create_test_hsla_image(width: u32, height: u32) -> HslaImage {
    HslaImage::from_fn(width, height, |x, y| {
        let h = f64::from(x * 37 % 360);
        let l = (f64::from((x * 7 + y * 3) % 11) + f64::from(x) / 100.0) / 12.0;
        Hsla::new(h, 0.5, l, 1.0)
    })
}

/// A single-row raster with the given lightness values.
pub fn lightness_row(lightness: &[f64]) -> HslaImage {
    HslaImage::from_fn(lightness.len() as u32, 1, |x, _| {
        Hsla::opaque(0.0, 0.0, lightness[x as usize])
    })
}

/// A single-row raster with the given hues.
pub fn hue_row(hues: &[f64]) -> HslaImage {
    HslaImage::from_fn(hues.len() as u32, 1, |x, _| {
        Hsla::opaque(hues[x as usize], 1.0, 0.5)
    })
}

/// Creates an RGBA image filled with a checkerboard pattern.
pub fn create_large_test_image(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| {
        if (x + y) % 2 == 0 {
            Rgba([200, 150, 100, 255])
        } else {
            Rgba([100, 150, 200, 255])
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_test_rgba_image_with_valid_input_creates_image() {
        let image = create_test_rgba_image();
        assert_eq!(image.dimensions(), (2, 2));
        assert_eq!(image.get_pixel(0, 0), &Rgba([200, 150, 100, 255]));
        assert_eq!(image.get_pixel(1, 1), &Rgba([50, 75, 25, 0]));
    }

    #[test]
    fn create_test_hsla_image_has_valid_channels() {
        let image = create_test_hsla_image(12, 5);
        assert_eq!(image.dimensions(), (12, 5));
        assert!(image
            .pixels()
            .all(|p| (0.0..360.0).contains(&p.h) && (0.0..=1.0).contains(&p.l)));
    }

    #[test]
    fn rows_hold_requested_values() {
        let image = lightness_row(&[0.1, 0.2, 0.3]);
        assert_eq!(image.dimensions(), (3, 1));
        assert_eq!(image.get_pixel(2, 0).l, 0.3);
        assert_eq!(hue_row(&[10.0, 350.0]).get_pixel(1, 0).h, 350.0);
    }

    #[test]
    fn create_large_test_image_with_valid_input_creates_image() {
        let image = create_large_test_image(10, 10);
        assert_eq!(image.dimensions(), (10, 10));
        assert_eq!(image.get_pixel(0, 0), &Rgba([200, 150, 100, 255]));
        assert_eq!(image.get_pixel(1, 0), &Rgba([100, 150, 200, 255]));
    }
}
