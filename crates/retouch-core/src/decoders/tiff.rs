//! TIFF image decoder

use std::path::Path;

use super::narrow_u16;
use crate::error::EditorError;
use crate::image::Image;

/// Decode a TIFF file
pub(crate) fn decode_tiff<P: AsRef<Path>>(path: P) -> Result<Image, EditorError> {
    use std::fs::File;
    use std::io::BufReader;

    let file = File::open(path.as_ref())
        .map_err(|e| EditorError::Decode(format!("Failed to open TIFF file: {}", e)))?;

    let mut decoder = tiff::decoder::Decoder::new(BufReader::new(file))
        .map_err(|e| EditorError::Decode(format!("Failed to create TIFF decoder: {}", e)))?;

    // Get image dimensions
    let (width, height) = decoder
        .dimensions()
        .map_err(|e| EditorError::Decode(format!("Failed to get TIFF dimensions: {}", e)))?;

    // Get color type
    let color_type = decoder
        .colortype()
        .map_err(|e| EditorError::Decode(format!("Failed to get TIFF color type: {}", e)))?;

    let channels = match color_type {
        tiff::ColorType::Gray(_) => 1,
        tiff::ColorType::RGB(_) => 3,
        tiff::ColorType::RGBA(_) => 4,
        other => {
            return Err(EditorError::Decode(format!(
                "Unsupported TIFF color type: {:?}",
                other
            )));
        }
    };

    // Read the image data
    let image_data = decoder
        .read_image()
        .map_err(|e| EditorError::Decode(format!("Failed to read TIFF image data: {}", e)))?;

    // Convert to interleaved 8-bit RGB based on sample type
    let data = match image_data {
        tiff::decoder::DecodingResult::U8(buf) => {
            decode_tiff_buffer(&buf, width, height, channels)?
        }
        tiff::decoder::DecodingResult::U16(buf) => {
            decode_tiff_buffer(&buf, width, height, channels)?
        }
        _ => {
            return Err(EditorError::Decode(
                "Unsupported TIFF sample format (only 8-bit and 16-bit unsigned)".to_string(),
            ));
        }
    };

    Image::from_raw(width, height, data)
        .ok_or_else(|| EditorError::Decode("TIFF pixel data has unexpected length".to_string()))
}

/// Trait for TIFF sample types that can be narrowed to 8-bit
trait TiffSample: Copy {
    fn to_u8(self) -> u8;
}

impl TiffSample for u8 {
    #[inline]
    fn to_u8(self) -> u8 {
        self
    }
}

impl TiffSample for u16 {
    #[inline]
    fn to_u8(self) -> u8 {
        narrow_u16(self)
    }
}

/// Normalize a decoded TIFF sample buffer to interleaved 8-bit RGB.
///
/// Grayscale sources expand to three identical channels; RGBA sources drop
/// the alpha channel.
fn decode_tiff_buffer<T: TiffSample>(
    buf: &[T],
    width: u32,
    height: u32,
    channels: usize,
) -> Result<Vec<u8>, EditorError> {
    let expected_len = width as usize * height as usize * channels;
    if buf.len() != expected_len {
        return Err(EditorError::Decode(format!(
            "TIFF buffer size mismatch: expected {}, got {}",
            expected_len,
            buf.len()
        )));
    }

    let mut rgb_data = Vec::with_capacity(width as usize * height as usize * 3);
    match channels {
        1 => {
            for &sample in buf {
                let val = sample.to_u8();
                rgb_data.push(val);
                rgb_data.push(val);
                rgb_data.push(val);
            }
        }
        _ => {
            for pixel in buf.chunks_exact(channels) {
                rgb_data.push(pixel[0].to_u8());
                rgb_data.push(pixel[1].to_u8());
                rgb_data.push(pixel[2].to_u8());
            }
        }
    }
    Ok(rgb_data)
}
