//! WASM-compatible wrapper types for image data.
//!
//! This module provides JavaScript-friendly types that wrap the core pixfilter
//! types, handling the conversion between Rust and JavaScript data
//! representations.

use pixfilter_core::PixelBuffer;
use wasm_bindgen::prelude::*;

/// An RGBA pixel buffer wrapper for JavaScript.
///
/// # Memory Management
///
/// The pixel data is stored in WASM memory. `pixels()` and `image_data()`
/// copy it into JavaScript memory. Call `free()` to release a large image
/// early; otherwise wasm-bindgen's finalizer handles cleanup.
#[wasm_bindgen]
pub struct JsPixelBuffer {
    inner: PixelBuffer,
}

#[wasm_bindgen]
impl JsPixelBuffer {
    /// Create a new JsPixelBuffer from dimensions and pixel data.
    ///
    /// # Arguments
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    /// * `pixels` - RGBA pixel data (4 bytes per pixel, row-major order)
    ///
    /// # Errors
    /// Returns an error for zero dimensions or a length mismatch.
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Result<JsPixelBuffer, JsValue> {
        PixelBuffer::new(width, height, pixels)
            .map(Self::from_buffer)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Get the image width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width()
    }

    /// Get the image height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height()
    }

    /// Get the number of bytes in the pixel buffer (width * height * 4)
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.pixels().len()
    }

    /// Returns RGBA pixel data as Uint8Array.
    ///
    /// Note: This creates a copy of the pixel data.
    pub fn pixels(&self) -> Vec<u8> {
        self.inner.pixels().to_vec()
    }

    /// Returns the pixels as a `Uint8ClampedArray`, ready for
    /// `new ImageData(data, width, height)`.
    pub fn image_data(&self) -> js_sys::Uint8ClampedArray {
        js_sys::Uint8ClampedArray::from(self.inner.pixels())
    }

    /// True when every pixel has R == G == B.
    pub fn is_grayscale(&self) -> bool {
        self.inner.is_grayscale()
    }

    /// Explicitly free WASM memory.
    ///
    /// This is optional - wasm-bindgen's finalizer will handle cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsPixelBuffer {
    /// Wrap a core buffer.
    pub(crate) fn from_buffer(inner: PixelBuffer) -> Self {
        Self { inner }
    }

    /// Borrow the core buffer for passing to core functions.
    pub(crate) fn buffer(&self) -> &PixelBuffer {
        &self.inner
    }
}


/// WASM-specific tests that require JsValue.
///
/// Run with `wasm-pack test`.
#[cfg(all(test, target_arch = "wasm32"))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_constructor_valid() {
        let img = JsPixelBuffer::new(2, 2, vec![0u8; 16]).unwrap();
        assert_eq!(img.byte_length(), 16);
    }

    #[wasm_bindgen_test]
    fn test_constructor_rejects_rgb_data() {
        assert!(JsPixelBuffer::new(2, 2, vec![0u8; 12]).is_err());
    }

    #[wasm_bindgen_test]
    fn test_constructor_rejects_zero_size() {
        assert!(JsPixelBuffer::new(0, 2, vec![]).is_err());
    }

    #[wasm_bindgen_test]
    fn test_image_data_length() {
        let img = JsPixelBuffer::new(3, 2, vec![7u8; 24]).unwrap();
        assert_eq!(img.image_data().length(), 24);
    }
}
