//! Grayscale histogram equalization.
//!
//! ## Steps
//! 1. Gray level per pixel (truncating luma)
//! 2. Histogram of the 256 levels
//! 3. Cumulative histogram
//! 4. LUT: `floor(cumulative * 255 / total)`
//! 5. Remap every pixel through the LUT, write it to R, G and B, alpha 255

use crate::buffer::{PixelBuffer, CHANNELS};
use crate::filters::for_each_row;
use crate::histogram::GrayHistogram;
use crate::luminance::gray_of;
use crate::lut::EqualizationLut;

/// Equalize the gray level histogram of `input`.
///
/// The output is always grayscale (R == G == B) and fully opaque.
pub fn equalize_histogram(input: &PixelBuffer) -> PixelBuffer {
    let (width, height) = (input.width(), input.height());
    log::debug!("histogram equalization on {width}x{height}");

    let hist = GrayHistogram::from_buffer(input);
    let lut = EqualizationLut::from_histogram(&hist);

    let mut output = PixelBuffer::zeroed_like(input);
    let src = input.pixels();
    let stride = input.stride();

    for_each_row(&mut output, |y, row| {
        let start = y as usize * stride;
        let src_row = &src[start..start + stride];

        for (out, pixel) in row
            .chunks_exact_mut(CHANNELS)
            .zip(src_row.chunks_exact(CHANNELS))
        {
            let level = lut.map(gray_of(pixel));
            out.copy_from_slice(&[level, level, level, 255]);
        }
    });

    output
}


// ============================================================================
// Property-Based Tests
// ============================================================================
