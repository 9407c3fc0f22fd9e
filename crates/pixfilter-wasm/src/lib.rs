//! pixfilter WASM - WebAssembly bindings for the pixel filter engine
//!
//! This crate exposes pixfilter-core to a browser UI. Decoding, filtering and
//! histogram computation are synchronous; call them from a Web Worker and
//! post the result back to the page that owns the canvas.
//!
//! # Module Structure
//!
//! - `types` - `JsPixelBuffer`, the RGBA image handle
//! - `decode` - PNG/JPEG decoding
//! - `filters` - median, histogram equalization, linear contrast
//! - `histogram` - gray level histogram for display
//!
//! # Usage
//!
//! ```typescript
//! import init, { decode_image, apply_filter } from '@pixfilter/wasm';
//!
//! await init();
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! const processed = apply_filter(image, 'median');
//! ```

use wasm_bindgen::prelude::*;

mod decode;
mod filters;
mod histogram;
mod types;

// Re-export public types
pub use decode::decode_image;
pub use filters::{
    apply_filter, apply_histogram_equalization, apply_linear_contrast, apply_median_filter,
    apply_median_filter_with_border, filter_names,
};
pub use histogram::{compute_gray_histogram, JsGrayHistogram};
pub use types::JsPixelBuffer;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
