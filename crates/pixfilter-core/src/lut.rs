//! Equalization lookup table derived from a cumulative histogram.

use crate::histogram::{GrayHistogram, LEVELS};

/// Pre-computed 256-entry lookup table: lut[input gray] = output gray.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EqualizationLut {
    /// LUT values: lut[input] = output
    pub lut: [u8; LEVELS],
}

impl EqualizationLut {
    /// Build the LUT for `hist`.
    ///
    /// `lut[i] = floor(cumulative[i] * 255 / total)`, computed in integers.
    /// The scale is `255 / total` rather than `255 / (total - 1)`, which
    /// compresses small images slightly toward the low end.
    ///
    /// The product is formed before the division, in `u64`, so the last
    /// occupied bin always maps to exactly 255. Scaling by a floating
    /// `255.0 / total` factor instead rounds below 255 for totals such as 25
    /// (a 5×5 image) and the top level truncates to 254.
    ///
    /// An empty histogram yields the identity table.
    pub fn from_histogram(hist: &GrayHistogram) -> Self {
        let total = hist.total();
        if total == 0 {
            return Self::identity();
        }

        let cdf = hist.cumulative();
        let mut lut = [0u8; LEVELS];
        for (value, &cum) in lut.iter_mut().zip(cdf.iter()) {
            *value = (cum * 255 / total).min(255) as u8;
        }

        log::trace!("equalization lut built from {total} pixels");
        Self { lut }
    }

    /// Create identity LUT (no change).
    pub fn identity() -> Self {
        let mut lut = [0u8; LEVELS];
        for (i, value) in lut.iter_mut().enumerate() {
            *value = i as u8;
        }
        Self { lut }
    }

    /// Check if this LUT is identity.
    pub fn is_identity(&self) -> bool {
        self.lut.iter().enumerate().all(|(i, &v)| v == i as u8)
    }

    /// Output level for `level`.
    #[inline]
    pub fn map(&self, level: u8) -> u8 {
        self.lut[level as usize]
    }
}

impl Default for EqualizationLut {
    fn default() -> Self {
        Self::identity()
    }
}
