//! Pixel source: decode encoded image bytes into a [`PixelBuffer`].
//!
//! The filters never see encoded data. This adapter turns PNG or JPEG file
//! bytes into RGBA8 pixels and reports decoding failures before any filter
//! runs.

use std::io::Cursor;

use image::ImageReader;
use thiserror::Error;

use crate::buffer::PixelBuffer;

/// Error types for image decoding operations.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The file format is not recognized or supported.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),

    /// The file decoded to an image without pixels.
    #[error("Decoded image has zero width or height")]
    EmptyImage,
}

/// Decode image bytes (format guessed from content) into an RGBA buffer.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` if the format can't be recognized,
/// `DecodeError::CorruptedFile` if decoding fails and
/// `DecodeError::EmptyImage` for a zero-sized result.
pub fn decode_image(bytes: &[u8]) -> Result<PixelBuffer, DecodeError> {
    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let format = reader.format().ok_or(DecodeError::InvalidFormat)?;

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    log::debug!(
        "decoded {:?} image {}x{}",
        format,
        img.width(),
        img.height()
    );

    PixelBuffer::from_rgba_image(img.into_rgba8()).map_err(|_| DecodeError::EmptyImage)
}
