//! Gray level calculation shared by the equalization and contrast filters.
//!
//! Both filters reduce a pixel to a single 8-bit gray level with one fixed
//! luma formula. The weighted sum is evaluated in `f64` and truncated toward
//! zero, never rounded, so results match existing outputs bit for bit.

/// Luma weight for the red channel.
pub const LUMA_R: f64 = 0.2989;

/// Luma weight for the green channel.
pub const LUMA_G: f64 = 0.5870;

/// Luma weight for the blue channel.
pub const LUMA_B: f64 = 0.1140;

/// Truncated gray level of an RGB triple.
///
/// The weights sum to 0.9999, so the result lies in 0..=254; pure white
/// maps to 254 and any neutral gray `(v, v, v)` with `v >= 1` maps to `v - 1`.
#[inline]
pub fn gray_level(r: u8, g: u8, b: u8) -> u8 {
    let gray = LUMA_R * r as f64 + LUMA_G * g as f64 + LUMA_B * b as f64;
    // `as` saturates and truncates toward zero
    gray as u8
}

/// Gray level of one RGBA pixel slice (alpha is ignored).
#[inline]
pub(crate) fn gray_of(pixel: &[u8]) -> u8 {
    gray_level(pixel[0], pixel[1], pixel[2])
}
