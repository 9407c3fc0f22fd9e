//! The three pixel filters and a single dispatch entry point.
//!
//! Every filter reads an immutable [`PixelBuffer`] and writes a freshly
//! allocated one of the same dimensions. With the `parallel` feature the
//! per-row output loops run on rayon's pool; rows never overlap, so no
//! synchronization is needed.

mod contrast;
mod equalize;
mod median;

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::buffer::PixelBuffer;

pub use contrast::linear_contrast;
pub use equalize::equalize_histogram;
pub use median::{median_filter, median_filter_with_border, BorderPolicy};

/// Which filter to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterKind {
    /// 3×3 per-channel median.
    Median,
    /// Grayscale histogram equalization.
    HistogramEqualization,
    /// Min-max grayscale contrast stretch.
    LinearContrast,
}

impl FilterKind {
    /// Every filter, in menu order.
    pub const ALL: [FilterKind; 3] = [
        FilterKind::Median,
        FilterKind::HistogramEqualization,
        FilterKind::LinearContrast,
    ];

    /// Stable snake_case name, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            FilterKind::Median => "median",
            FilterKind::HistogramEqualization => "histogram_equalization",
            FilterKind::LinearContrast => "linear_contrast",
        }
    }
}

impl fmt::Display for FilterKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown filter name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown filter: {0}")]
pub struct UnknownFilter(pub String);

impl FromStr for FilterKind {
    type Err = UnknownFilter;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "median" | "median_filter" => Ok(FilterKind::Median),
            "equalize" | "histogram_equalization" => Ok(FilterKind::HistogramEqualization),
            "contrast" | "linear_contrast" => Ok(FilterKind::LinearContrast),
            _ => Err(UnknownFilter(s.to_string())),
        }
    }
}

/// Run one filter on `input`.
///
/// Only the flat-image case of [`linear_contrast`] returns the input itself
/// (`Cow::Borrowed`); every other call produces a new buffer.
pub fn apply_filter(kind: FilterKind, input: &PixelBuffer) -> Cow<'_, PixelBuffer> {
    match kind {
        FilterKind::Median => Cow::Owned(median_filter(input)),
        FilterKind::HistogramEqualization => Cow::Owned(equalize_histogram(input)),
        FilterKind::LinearContrast => linear_contrast(input),
    }
}

/// Call `f(y, row)` for every output row, in parallel when enabled.
pub(crate) fn for_each_row<F>(output: &mut PixelBuffer, f: F)
where
    F: Fn(u32, &mut [u8]) + Send + Sync,
{
    let stride = output.stride();

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        output
            .pixels_mut()
            .par_chunks_mut(stride)
            .enumerate()
            .for_each(|(y, row)| f(y as u32, row));
    }

    #[cfg(not(feature = "parallel"))]
    {
        output
            .pixels_mut()
            .chunks_mut(stride)
            .enumerate()
            .for_each(|(y, row)| f(y as u32, row));
    }
}
