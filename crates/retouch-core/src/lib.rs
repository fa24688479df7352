//! Retouch Core Library
//!
//! Core functionality for an interactive raster-image editor: an owned RGB
//! image type, a non-destructive preview pipeline driven by slider settings,
//! destructive geometric transforms with linear undo/redo, and PNG/TIFF
//! codecs. The GUI shell lives outside this crate and drives everything
//! through [`ImageProcessor`].

pub mod decoders;
pub mod editor;
pub mod error;
pub mod exporters;
pub mod image;
pub mod models;
pub mod pipeline;
pub mod transforms;

// Re-export commonly used types
pub use editor::ImageProcessor;
pub use error::EditorError;
pub use image::Image;
pub use models::FilterSettings;
pub use transforms::FlipAxis;
