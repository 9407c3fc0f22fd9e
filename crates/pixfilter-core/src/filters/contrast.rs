//! Linear (min-max) contrast stretch.

use std::borrow::Cow;

use crate::buffer::{PixelBuffer, CHANNELS};
use crate::filters::for_each_row;
use crate::luminance::gray_of;

/// Stretch the gray range of `input` to fill 0..=255.
///
/// Every pixel is reduced to its truncated gray level, then remapped with
/// `(gray - min) * 255 / (max - min)` in integer division and written to R,
/// G and B with alpha 255.
///
/// A flat image (every gray level equal, including a single pixel) has no
/// range to stretch; the input itself is returned as `Cow::Borrowed`, colors
/// and alpha untouched.
pub fn linear_contrast(input: &PixelBuffer) -> Cow<'_, PixelBuffer> {
    let (width, height) = (input.width(), input.height());

    // Seeded so that any real value replaces them
    let mut min_gray = 255u8;
    let mut max_gray = 0u8;
    let grays: Vec<u8> = input
        .pixels()
        .chunks_exact(CHANNELS)
        .map(|pixel| {
            let gray = gray_of(pixel);
            min_gray = min_gray.min(gray);
            max_gray = max_gray.max(gray);
            gray
        })
        .collect();

    if max_gray == min_gray {
        log::debug!("linear contrast on {width}x{height}: flat image at gray {min_gray}, unchanged");
        return Cow::Borrowed(input);
    }

    log::debug!("linear contrast on {width}x{height}: stretching {min_gray}..={max_gray}");

    let min = min_gray as u32;
    let range = (max_gray - min_gray) as u32;
    let mut output = PixelBuffer::zeroed_like(input);
    let row_len = width as usize;

    for_each_row(&mut output, |y, row| {
        let start = y as usize * row_len;
        let gray_row = &grays[start..start + row_len];

        for (out, &gray) in row.chunks_exact_mut(CHANNELS).zip(gray_row) {
            let level = ((gray as u32 - min) * 255 / range) as u8;
            out.copy_from_slice(&[level, level, level, 255]);
        }
    });

    Cow::Owned(output)
}


// ============================================================================
// Property-Based Tests
// ============================================================================
