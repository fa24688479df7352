//! Image exporters for various output formats
//!
//! Export the rendered preview to PNG or 8-bit RGB TIFF, chosen by the
//! output path's extension.

use std::path::Path;

use crate::error::EditorError;
use crate::image::Image;

/// Encode an image to the format implied by the path extension
pub fn encode_image<P: AsRef<Path>>(image: &Image, path: P) -> Result<(), EditorError> {
    let path = path.as_ref();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .ok_or_else(|| EditorError::Encode("No file extension found".to_string()))?;

    match extension.as_str() {
        "png" => encode_png(image, path),
        "tif" | "tiff" => encode_tiff(image, path),
        _ => Err(EditorError::Encode(format!(
            "Unsupported output format: {}",
            extension
        ))),
    }
}

/// Write an image as 8-bit RGB PNG
fn encode_png(image: &Image, path: &Path) -> Result<(), EditorError> {
    use std::fs::File;
    use std::io::BufWriter;

    let file = File::create(path)
        .map_err(|e| EditorError::Encode(format!("Failed to create PNG file: {}", e)))?;
    let writer = BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, image.width(), image.height());
    encoder.set_color(png::ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);

    let mut png_writer = encoder
        .write_header()
        .map_err(|e| EditorError::Encode(format!("Failed to write PNG header: {}", e)))?;
    png_writer
        .write_image_data(image.data())
        .map_err(|e| EditorError::Encode(format!("Failed to write PNG image data: {}", e)))?;
    png_writer
        .finish()
        .map_err(|e| EditorError::Encode(format!("Failed to finish PNG stream: {}", e)))?;

    Ok(())
}

/// Write an image as 8-bit RGB TIFF
fn encode_tiff(image: &Image, path: &Path) -> Result<(), EditorError> {
    use std::fs::File;
    use std::io::BufWriter;

    let file = File::create(path)
        .map_err(|e| EditorError::Encode(format!("Failed to create TIFF file: {}", e)))?;
    let writer = BufWriter::new(file);

    let mut encoder = tiff::encoder::TiffEncoder::new(writer)
        .map_err(|e| EditorError::Encode(format!("Failed to create TIFF encoder: {}", e)))?;

    encoder
        .write_image::<tiff::encoder::colortype::RGB8>(image.width(), image.height(), image.data())
        .map_err(|e| EditorError::Encode(format!("Failed to write TIFF image: {}", e)))?;

    Ok(())
}
