//! 3×3 median filter.
//!
//! Each interior pixel takes, per color channel, the median of the nine
//! values in its 3×3 neighborhood. Alpha is forced opaque. Only interior
//! pixels are processed; the 1-pixel border is handled by [`BorderPolicy`].

use serde::{Deserialize, Serialize};

use crate::buffer::{PixelBuffer, CHANNELS};
use crate::filters::for_each_row;

/// What the 1-pixel border of the output contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BorderPolicy {
    /// Border left unprocessed: all four channels zero.
    #[default]
    Zeroed,
    /// Border pixels copied unchanged from the input.
    CopySource,
}

/// Apply the 3×3 median filter with a zeroed border.
///
/// Images narrower or shorter than 3 pixels have no interior and come back
/// all zero.
pub fn median_filter(input: &PixelBuffer) -> PixelBuffer {
    median_filter_with_border(input, BorderPolicy::Zeroed)
}

/// Apply the 3×3 median filter, filling the border according to `border`.
pub fn median_filter_with_border(input: &PixelBuffer, border: BorderPolicy) -> PixelBuffer {
    let (width, height) = (input.width(), input.height());
    log::debug!("median filter on {width}x{height} ({border:?} border)");

    let mut output = PixelBuffer::zeroed_like(input);
    let src = input.pixels();
    let stride = input.stride();

    for_each_row(&mut output, |y, row| {
        let interior_row = y >= 1 && y + 1 < height;

        if border == BorderPolicy::CopySource {
            let start = y as usize * stride;
            if interior_row {
                let last = (width as usize - 1) * CHANNELS;
                row[..CHANNELS].copy_from_slice(&src[start..start + CHANNELS]);
                row[last..].copy_from_slice(&src[start + last..start + stride]);
            } else {
                row.copy_from_slice(&src[start..start + stride]);
            }
        }

        if !interior_row {
            return;
        }

        for x in 1..width.saturating_sub(1) {
            let mut reds = [0u8; 9];
            let mut greens = [0u8; 9];
            let mut blues = [0u8; 9];

            let mut n = 0;
            for ny in y - 1..=y + 1 {
                let row_start = ny as usize * stride;
                for nx in x - 1..=x + 1 {
                    let i = row_start + nx as usize * CHANNELS;
                    reds[n] = src[i];
                    greens[n] = src[i + 1];
                    blues[n] = src[i + 2];
                    n += 1;
                }
            }

            let out = x as usize * CHANNELS;
            row[out] = median_of_9(&mut reds);
            row[out + 1] = median_of_9(&mut greens);
            row[out + 2] = median_of_9(&mut blues);
            row[out + 3] = 255;
        }
    });

    output
}

/// Sorted element at index 4.
#[inline]
fn median_of_9(values: &mut [u8; 9]) -> u8 {
    values.sort_unstable();
    values[4]
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Image whose channels differ per position so medians are non-trivial.
    fn pattern_image(width: u32, height: u32) -> PixelBuffer {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                pixels.push(((x * 37 + y * 11) % 256) as u8);
                pixels.push(((x * 5 + y * 53) % 256) as u8);
                pixels.push(((x * y * 17) % 256) as u8);
                pixels.push(90);
            }
        }
        PixelBuffer::new(width, height, pixels).unwrap()
    }

    #[test]
    fn test_uniform_3x3() {
        let img = PixelBuffer::filled(3, 3, [128, 128, 128, 255]).unwrap();
        let out = median_filter(&img);

        assert_eq!(out.width(), 3);
        assert_eq!(out.height(), 3);
        assert_eq!(out.pixel(1, 1), [128, 128, 128, 255]);

        for (x, y) in [(0, 0), (1, 0), (2, 0), (0, 1), (2, 1), (0, 2), (1, 2), (2, 2)] {
            assert_eq!(out.pixel(x, y), [0, 0, 0, 0], "border ({x}, {y})");
        }
    }

    #[test]
    fn test_removes_salt_noise() {
        let mut pixels = PixelBuffer::filled(3, 3, [10, 20, 30, 255])
            .unwrap()
            .into_raw();
        // Bright outlier in the center
        pixels[16..20].copy_from_slice(&[255, 255, 255, 255]);
        let img = PixelBuffer::new(3, 3, pixels).unwrap();

        assert_eq!(median_filter(&img).pixel(1, 1), [10, 20, 30, 255]);
    }

    #[test]
    fn test_channels_are_sorted_independently() {
        // Red ascends along the row, blue descends, so medians come from
        // different pixels.
        let mut pixels = Vec::new();
        for i in 0..9u8 {
            pixels.extend_from_slice(&[i * 10, 7, 200 - i * 10, 0]);
        }
        let img = PixelBuffer::new(3, 3, pixels).unwrap();

        assert_eq!(median_filter(&img).pixel(1, 1), [40, 7, 160, 255]);
    }

    #[test]
    fn test_alpha_forced_opaque() {
        let img = PixelBuffer::filled(4, 4, [1, 2, 3, 0]).unwrap();
        let out = median_filter(&img);
        assert_eq!(out.pixel(1, 1)[3], 255);
        assert_eq!(out.pixel(2, 2)[3], 255);
    }

    #[test]
    fn test_too_small_images_are_all_zero() {
        for (w, h) in [(1, 1), (2, 2), (1, 5), (5, 2), (2, 7)] {
            let img = PixelBuffer::filled(w, h, [200, 100, 50, 255]).unwrap();
            let out = median_filter(&img);
            assert_eq!((out.width(), out.height()), (w, h));
            assert!(out.pixels().iter().all(|&b| b == 0), "{w}x{h}");
        }
    }

    #[test]
    fn test_input_untouched() {
        let img = pattern_image(6, 5);
        let copy = img.clone();
        let _ = median_filter(&img);
        assert_eq!(img, copy);
    }

    #[test]
    fn test_copy_source_border() {
        let img = pattern_image(5, 4);
        let zeroed = median_filter(&img);
        let copied = median_filter_with_border(&img, BorderPolicy::CopySource);

        for y in 0..4 {
            for x in 0..5 {
                let border = x == 0 || y == 0 || x == 4 || y == 3;
                if border {
                    assert_eq!(copied.pixel(x, y), img.pixel(x, y));
                } else {
                    assert_eq!(copied.pixel(x, y), zeroed.pixel(x, y));
                }
            }
        }
    }

    #[test]
    fn test_copy_source_tiny_image_is_identity() {
        let img = pattern_image(2, 2);
        assert_eq!(median_filter_with_border(&img, BorderPolicy::CopySource), img);
    }

    #[test]
    fn test_default_policy_is_zeroed() {
        assert_eq!(BorderPolicy::default(), BorderPolicy::Zeroed);
        let img = pattern_image(4, 4);
        assert_eq!(
            median_filter_with_border(&img, BorderPolicy::default()),
            median_filter(&img)
        );
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
