//! Gray histogram WASM bindings.
//!
//! Exposes the 256-bin gray level histogram the equalization filter works
//! from, so the UI can plot it next to the image.

use crate::types::JsPixelBuffer;
use pixfilter_core::GrayHistogram;
use wasm_bindgen::prelude::*;

/// Histogram result accessible from JavaScript.
#[wasm_bindgen]
pub struct JsGrayHistogram {
    bins: Vec<u32>,
    max_value: u32,
    total: u32,
}

#[wasm_bindgen]
impl JsGrayHistogram {
    /// Get the gray level histogram (256 bins).
    pub fn bins(&self) -> Vec<u32> {
        self.bins.clone()
    }

    /// Get the largest bin, for normalizing the display.
    #[wasm_bindgen(getter)]
    pub fn max_value(&self) -> u32 {
        self.max_value
    }

    /// Get the number of pixels counted.
    #[wasm_bindgen(getter)]
    pub fn total(&self) -> u32 {
        self.total
    }
}

/// Compute the gray level histogram of an image.
///
/// # Example (TypeScript)
/// ```typescript
/// const hist = compute_gray_histogram(image);
/// const bins = hist.bins();   // Uint32Array[256]
/// const max = hist.max_value;
/// hist.free();
/// ```
#[wasm_bindgen]
pub fn compute_gray_histogram(image: &JsPixelBuffer) -> JsGrayHistogram {
    let hist = GrayHistogram::from_buffer(image.buffer());

    JsGrayHistogram {
        bins: hist.bins.to_vec(),
        max_value: hist.max_value(),
        total: hist.total().min(u32::MAX as u64) as u32,
    }
}
