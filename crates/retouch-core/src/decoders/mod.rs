//! Image decoders for various formats
//!
//! Support for PNG and TIFF file formats. Every source is normalized to
//! the editor's 8-bit interleaved RGB layout: grayscale expands to three
//! identical channels, alpha is dropped, and 16-bit samples narrow to
//! 8 bits.

mod png;
mod tiff;


use std::path::Path;

use crate::error::EditorError;
use crate::image::Image;

/// Decode an image from a file path
pub fn decode_image<P: AsRef<Path>>(path: P) -> Result<Image, EditorError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .ok_or_else(|| EditorError::Decode("No file extension found".to_string()))?;

    match extension.as_str() {
        "png" => png::decode_png(path),
        "tif" | "tiff" => tiff::decode_tiff(path),
        _ => Err(EditorError::Decode(format!(
            "Unsupported file format: {}",
            extension
        ))),
    }
}

/// Narrow a 16-bit sample to 8 bits.
#[inline]
pub(crate) fn narrow_u16(value: u16) -> u8 {
    (value / 257) as u8
}
