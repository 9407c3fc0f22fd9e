//! pixfilter core - pixel filter engine
//!
//! Three pure, stateless filters over an in-memory RGBA [`PixelBuffer`]:
//! a 3×3 median filter, grayscale histogram equalization and a linear
//! (min-max) contrast stretch. Each call reads its input without mutating it
//! and returns a buffer of the same dimensions.
//!
//! Around the engine sit thin adapters for its collaborators:
//! - [`source`] decodes PNG/JPEG bytes into a [`PixelBuffer`]
//! - `worker` (feature `parallel`) runs a filter off the calling thread
//!
//! # Usage
//!
//! ```ignore
//! use pixfilter_core::{apply_filter, source::decode_image, FilterKind};
//!
//! let image = decode_image(&std::fs::read("photo.png")?)?;
//! let processed = apply_filter(FilterKind::LinearContrast, &image);
//! println!("{}x{}", processed.width(), processed.height());
//! ```

pub mod buffer;
pub mod filters;
pub mod histogram;
pub mod luminance;
pub mod lut;
pub mod source;
#[cfg(feature = "parallel")]
pub mod worker;

pub use buffer::{FilterError, PixelBuffer};
pub use filters::{
    apply_filter, equalize_histogram, linear_contrast, median_filter, median_filter_with_border,
    BorderPolicy, FilterKind, UnknownFilter,
};
pub use histogram::GrayHistogram;
pub use lut::EqualizationLut;
#[cfg(feature = "parallel")]
pub use worker::{spawn_filter, FilterJob};
