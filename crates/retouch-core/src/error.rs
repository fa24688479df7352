//! Error types for editor operations.

use thiserror::Error;

/// Errors surfaced by [`crate::ImageProcessor`] and the codec layer.
///
/// Every error is local to the operation that produced it; a failed
/// operation never leaves partially mutated editor state behind.
#[derive(Debug, Error)]
pub enum EditorError {
    /// The source could not be interpreted as an image (missing file,
    /// unsupported format, or corrupt data).
    #[error("failed to decode image: {0}")]
    Decode(String),

    /// The image could not be serialized to the requested output.
    #[error("failed to encode image: {0}")]
    Encode(String),

    /// An operation that requires a loaded image was called before any
    /// image was loaded.
    #[error("no image loaded")]
    NoImage,
}
