//! RGBA pixel buffer shared by every filter.

use thiserror::Error;

/// Bytes per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// Errors raised when a buffer or a filter job cannot be processed.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    /// Width or height is zero
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// Pixel data length doesn't match expected dimensions
    #[error("Invalid pixel data: expected {expected} bytes (width * height * 4), got {actual}")]
    InvalidPixelData { expected: usize, actual: usize },

    /// width * height * 4 doesn't fit in memory addressing on this target
    #[error("Image too large: {width}x{height} pixels exceeds addressable memory")]
    TooLarge { width: u32, height: u32 },

    /// The background worker went away before delivering a result.
    #[error("Filter worker disconnected before producing a result")]
    WorkerDisconnected,
}

/// A width × height grid of 8-bit RGBA pixels in row-major order.
///
/// The buffer always satisfies `pixels.len() == width * height * 4` with
/// non-zero dimensions; [`PixelBuffer::new`] rejects anything else, so
/// filters never have to re-check their input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl PixelBuffer {
    /// Create a buffer from raw RGBA bytes.
    ///
    /// # Errors
    ///
    /// Returns `FilterError::InvalidDimensions` if either dimension is zero,
    /// `FilterError::TooLarge` if the byte count overflows `usize` and
    /// `FilterError::InvalidPixelData` if the byte count doesn't match.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, FilterError> {
        let expected = checked_byte_len(width, height)?;
        if pixels.len() != expected {
            return Err(FilterError::InvalidPixelData {
                expected,
                actual: pixels.len(),
            });
        }

        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Create a buffer where every pixel has the same RGBA value.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Result<Self, FilterError> {
        // Validate before allocating
        let len = checked_byte_len(width, height)?;
        let pixels = rgba.repeat(len / CHANNELS);
        Self::new(width, height, pixels)
    }

    /// All-zero buffer with the dimensions of `like`, which already passed
    /// validation.
    pub(crate) fn zeroed_like(like: &PixelBuffer) -> Self {
        Self {
            width: like.width,
            height: like.height,
            pixels: vec![0; like.pixels.len()],
        }
    }

    /// Create a buffer from an `image::RgbaImage`.
    pub fn from_rgba_image(img: image::RgbaImage) -> Result<Self, FilterError> {
        let (width, height) = img.dimensions();
        Self::new(width, height, img.into_raw())
    }

    /// Convert to an `image::RgbaImage` (copies the pixel data).
    pub fn to_rgba_image(&self) -> image::RgbaImage {
        image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
            .unwrap_or_else(|| unreachable!("PixelBuffer invariant guarantees matching length"))
    }

    /// Image width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Image height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, row-major.
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Consume the buffer and return its RGBA bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.pixels
    }

    /// Get the total number of pixels.
    pub fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Number of bytes in one row.
    #[inline]
    pub fn stride(&self) -> usize {
        self.width as usize * CHANNELS
    }

    /// RGBA value at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the buffer.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) out of bounds for {}x{} buffer",
            self.width,
            self.height
        );
        let i = y as usize * self.stride() + x as usize * CHANNELS;
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }

    /// True when every pixel has R == G == B.
    pub fn is_grayscale(&self) -> bool {
        self.pixels
            .chunks_exact(CHANNELS)
            .all(|p| p[0] == p[1] && p[1] == p[2])
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [u8] {
        &mut self.pixels
    }
}

/// Byte length of a `width` × `height` RGBA buffer, rejecting zero sizes and
/// overflow.
fn checked_byte_len(width: u32, height: u32) -> Result<usize, FilterError> {
    if width == 0 || height == 0 {
        return Err(FilterError::InvalidDimensions { width, height });
    }
    (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(CHANNELS))
        .ok_or(FilterError::TooLarge { width, height })
}
