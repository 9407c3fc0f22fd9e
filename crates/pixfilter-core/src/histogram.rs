//! Gray level histogram computation.
//!
//! The histogram is built from the truncated gray level of every pixel and
//! feeds the equalization LUT. It is also handed to the UI for display.

use crate::buffer::{PixelBuffer, CHANNELS};
use crate::luminance::gray_of;

/// Number of gray levels (one bin per 8-bit value).
pub const LEVELS: usize = 256;

/// Counts of each gray level across an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayHistogram {
    /// bins[level] = number of pixels with that gray level
    pub bins: [u32; LEVELS],
}

impl Default for GrayHistogram {
    fn default() -> Self {
        Self { bins: [0; LEVELS] }
    }
}

impl GrayHistogram {
    /// Create a new empty histogram
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally the gray level of every pixel in `buffer`.
    ///
    /// Single pass, O(n) in the number of pixels.
    pub fn from_buffer(buffer: &PixelBuffer) -> Self {
        let mut hist = Self::new();
        for pixel in buffer.pixels().chunks_exact(CHANNELS) {
            hist.bins[gray_of(pixel) as usize] += 1;
        }
        hist
    }

    /// Total number of pixels counted.
    pub fn total(&self) -> u64 {
        self.bins.iter().map(|&c| c as u64).sum()
    }

    /// Running prefix sum over the bins.
    pub fn cumulative(&self) -> [u64; LEVELS] {
        let mut cdf = [0u64; LEVELS];
        let mut running = 0u64;
        for (slot, &count) in cdf.iter_mut().zip(self.bins.iter()) {
            running += count as u64;
            *slot = running;
        }
        cdf
    }

    /// Largest bin, for normalizing a display.
    pub fn max_value(&self) -> u32 {
        self.bins.iter().copied().max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_histogram() {
        let hist = GrayHistogram::new();
        assert_eq!(hist.total(), 0);
        assert_eq!(hist.max_value(), 0);
        assert_eq!(hist.cumulative()[255], 0);
    }

    #[test]
    fn test_single_white_pixel() {
        let buf = PixelBuffer::filled(1, 1, [255, 255, 255, 255]).unwrap();
        let hist = GrayHistogram::from_buffer(&buf);
        assert_eq!(hist.bins[254], 1);
        assert_eq!(hist.total(), 1);
    }

    #[test]
    fn test_uniform_image() {
        let buf = PixelBuffer::filled(10, 10, [128, 128, 128, 255]).unwrap();
        let hist = GrayHistogram::from_buffer(&buf);
        assert_eq!(hist.bins[127], 100);
        assert_eq!(hist.max_value(), 100);
    }

    #[test]
    fn test_cumulative_is_prefix_sum() {
        let mut hist = GrayHistogram::new();
        hist.bins[0] = 2;
        hist.bins[10] = 3;
        hist.bins[255] = 5;

        let cdf = hist.cumulative();
        assert_eq!(cdf[0], 2);
        assert_eq!(cdf[9], 2);
        assert_eq!(cdf[10], 5);
        assert_eq!(cdf[254], 5);
        assert_eq!(cdf[255], 10);
        assert_eq!(cdf[255], hist.total());
    }

    #[test]
    fn test_alpha_does_not_matter() {
        let pixels = vec![50, 60, 70, 0, 50, 60, 70, 255];
        let buf = PixelBuffer::new(2, 1, pixels).unwrap();
        let hist = GrayHistogram::from_buffer(&buf);
        assert_eq!(hist.max_value(), 2);
    }
}
