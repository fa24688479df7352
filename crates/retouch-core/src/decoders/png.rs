//! PNG image decoder

use std::path::Path;

use super::narrow_u16;
use crate::error::EditorError;
use crate::image::Image;

/// Decode a PNG file
pub(crate) fn decode_png<P: AsRef<Path>>(path: P) -> Result<Image, EditorError> {
    use std::fs::File;
    use std::io::BufReader;

    let file = File::open(path.as_ref())
        .map_err(|e| EditorError::Decode(format!("Failed to open PNG file: {}", e)))?;
    let decoder = png::Decoder::new(BufReader::new(file));
    let mut reader = decoder
        .read_info()
        .map_err(|e| EditorError::Decode(format!("Failed to read PNG info: {}", e)))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;

    // Allocate buffer for image data
    let buffer_size = reader
        .output_buffer_size()
        .ok_or_else(|| EditorError::Decode("Failed to determine PNG buffer size".to_string()))?;
    let mut buf = vec![0u8; buffer_size];
    let frame_info = reader
        .next_frame(&mut buf)
        .map_err(|e| EditorError::Decode(format!("Failed to read PNG frame: {}", e)))?;

    // Get the actual bytes used
    let bytes = &buf[..frame_info.buffer_size()];

    // Convert to interleaved 8-bit RGB
    let data = match (color_type, bit_depth) {
        (png::ColorType::Grayscale, png::BitDepth::Eight) => {
            expand_samples(bytes, width, height, 1, |b| b[0])?
        }
        (png::ColorType::Grayscale, png::BitDepth::Sixteen) => {
            expand_samples(bytes, width, height, 2, |b| {
                narrow_u16(u16::from_be_bytes([b[0], b[1]]))
            })?
        }
        (png::ColorType::Rgb, png::BitDepth::Eight) => {
            interleave_samples(bytes, width, height, 1, 3, |b| b[0])?
        }
        (png::ColorType::Rgb, png::BitDepth::Sixteen) => {
            interleave_samples(bytes, width, height, 2, 3, |b| {
                narrow_u16(u16::from_be_bytes([b[0], b[1]]))
            })?
        }
        (png::ColorType::Rgba, png::BitDepth::Eight) => {
            interleave_samples(bytes, width, height, 1, 4, |b| b[0])?
        }
        (png::ColorType::Rgba, png::BitDepth::Sixteen) => {
            interleave_samples(bytes, width, height, 2, 4, |b| {
                narrow_u16(u16::from_be_bytes([b[0], b[1]]))
            })?
        }
        _ => {
            return Err(EditorError::Decode(format!(
                "Unsupported PNG format: {:?} with bit depth {:?}",
                color_type, bit_depth
            )));
        }
    };

    Image::from_raw(width, height, data)
        .ok_or_else(|| EditorError::Decode("PNG pixel data has unexpected length".to_string()))
}

/// Expand single-channel samples to three identical RGB channels.
fn expand_samples(
    bytes: &[u8],
    width: u32,
    height: u32,
    sample_bytes: usize,
    to_u8: impl Fn(&[u8]) -> u8,
) -> Result<Vec<u8>, EditorError> {
    let expected_len = width as usize * height as usize * sample_bytes;
    if bytes.len() != expected_len {
        return Err(EditorError::Decode(format!(
            "PNG buffer size mismatch: expected {}, got {}",
            expected_len,
            bytes.len()
        )));
    }

    let mut rgb_data = Vec::with_capacity(width as usize * height as usize * 3);
    for sample in bytes.chunks_exact(sample_bytes) {
        let val = to_u8(sample);
        rgb_data.push(val);
        rgb_data.push(val);
        rgb_data.push(val);
    }
    Ok(rgb_data)
}

/// Re-interleave multi-channel samples as RGB, dropping any alpha channel.
fn interleave_samples(
    bytes: &[u8],
    width: u32,
    height: u32,
    sample_bytes: usize,
    channels: usize,
    to_u8: impl Fn(&[u8]) -> u8,
) -> Result<Vec<u8>, EditorError> {
    let expected_len = width as usize * height as usize * channels * sample_bytes;
    if bytes.len() != expected_len {
        return Err(EditorError::Decode(format!(
            "PNG buffer size mismatch: expected {}, got {}",
            expected_len,
            bytes.len()
        )));
    }

    let mut rgb_data = Vec::with_capacity(width as usize * height as usize * 3);
    for pixel in bytes.chunks_exact(channels * sample_bytes) {
        for c in 0..3 {
            rgb_data.push(to_u8(&pixel[c * sample_bytes..]));
        }
    }
    Ok(rgb_data)
}
