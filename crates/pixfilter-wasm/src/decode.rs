//! Image decoding WASM bindings.
//!
//! # Example
//!
//! ```typescript
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const image = decode_image(bytes);
//! console.log(`Decoded ${image.width}x${image.height}`);
//! ```

use crate::types::JsPixelBuffer;
use pixfilter_core::source;
use wasm_bindgen::prelude::*;

/// Decode PNG or JPEG bytes into an RGBA pixel buffer.
///
/// # Errors
///
/// Returns an error if the format is not recognized or the data is corrupted.
#[wasm_bindgen]
pub fn decode_image(bytes: &[u8]) -> Result<JsPixelBuffer, JsValue> {
    source::decode_image(bytes)
        .map(JsPixelBuffer::from_buffer)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}
