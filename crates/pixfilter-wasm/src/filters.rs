//! Filter WASM bindings.
//!
//! Each function copies the result into a new `JsPixelBuffer`. Run these from
//! a Web Worker to keep the page responsive on large images.
//!
//! # Example (TypeScript)
//!
//! ```typescript
//! const processed = apply_filter(image, 'linear_contrast');
//! ctx.putImageData(new ImageData(processed.image_data(), processed.width, processed.height), 0, 0);
//! ```

use crate::types::JsPixelBuffer;
use pixfilter_core::{filters, BorderPolicy, FilterKind};
use wasm_bindgen::prelude::*;

/// Apply the 3×3 median filter. The 1-pixel border comes back zeroed.
#[wasm_bindgen]
pub fn apply_median_filter(image: &JsPixelBuffer) -> JsPixelBuffer {
    JsPixelBuffer::from_buffer(filters::median_filter(image.buffer()))
}

/// Apply the 3×3 median filter, copying the border from the source when
/// `copy_border` is true.
#[wasm_bindgen]
pub fn apply_median_filter_with_border(image: &JsPixelBuffer, copy_border: bool) -> JsPixelBuffer {
    let border = if copy_border {
        BorderPolicy::CopySource
    } else {
        BorderPolicy::Zeroed
    };
    JsPixelBuffer::from_buffer(filters::median_filter_with_border(image.buffer(), border))
}

/// Apply grayscale histogram equalization.
#[wasm_bindgen]
pub fn apply_histogram_equalization(image: &JsPixelBuffer) -> JsPixelBuffer {
    JsPixelBuffer::from_buffer(filters::equalize_histogram(image.buffer()))
}

/// Apply the linear contrast stretch.
///
/// A flat image comes back with its original pixels, colors and alpha
/// included.
#[wasm_bindgen]
pub fn apply_linear_contrast(image: &JsPixelBuffer) -> JsPixelBuffer {
    JsPixelBuffer::from_buffer(filters::linear_contrast(image.buffer()).into_owned())
}

/// Apply a filter chosen by name.
///
/// # Arguments
/// * `kind` - One of `"median"`, `"histogram_equalization"`, `"linear_contrast"`
///
/// # Errors
/// Returns error if `kind` is not a known filter name
#[wasm_bindgen]
pub fn apply_filter(image: &JsPixelBuffer, kind: JsValue) -> Result<JsPixelBuffer, JsValue> {
    let kind: FilterKind = serde_wasm_bindgen::from_value(kind)
        .map_err(|e| JsValue::from_str(&format!("Invalid filter kind: {}", e)))?;
    Ok(run_filter(image, kind))
}

/// Names accepted by [`apply_filter`], in menu order.
#[wasm_bindgen]
pub fn filter_names() -> Vec<String> {
    FilterKind::ALL.iter().map(|k| k.as_str().to_string()).collect()
}

fn run_filter(image: &JsPixelBuffer, kind: FilterKind) -> JsPixelBuffer {
    JsPixelBuffer::from_buffer(filters::apply_filter(kind, image.buffer()).into_owned())
}
