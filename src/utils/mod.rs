//! Internal utility functions for gridcarve.
//!
//! This module contains the channel conversions and validation shared by
//! the colour model, the raster and the grid.

use crate::error::Error;
use imageproc::definitions::Clamp;

/// Clamps a channel value to the unit interval.
///
/// NaN is mapped to 0 so that a malformed input never leaks into the grid.
#[inline]
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// Normalizes an 8-bit channel to a floating-point value in the range [0, 1].
#[inline]
pub fn normalize_channel(channel: u8) -> f64 {
    f64::from(channel) / f64::from(u8::MAX)
}

/// Converts a unit-range channel back to 8 bits, rounding to nearest.
///
/// # Arguments
///
/// * `value` - The channel value, expected in [0, 1]
///
/// # Returns
///
/// The channel scaled to [0, 255], saturating outside the expected range
#[inline]
pub fn denormalize_channel(value: f64) -> u8 {
    let scaled = (value * f64::from(u8::MAX)).round() as f32;
    <u8 as Clamp<f32>>::clamp(scaled)
}

/// Validates that an image has non-zero dimensions.
///
/// # Arguments
///
/// * `width` - The width of the image
/// * `height` - The height of the image
///
/// # Returns
///
/// `Ok(())` if the dimensions are valid, otherwise [`Error::InvalidDimension`]
pub fn validate_non_empty_image(width: u32, height: u32) -> Result<(), Error> {
    if width == 0 || height == 0 {
        Err(Error::InvalidDimension { width, height })
    } else {
        Ok(())
    }
}
