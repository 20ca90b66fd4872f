//! SDR raster pass-through module
//!
//! Non-HDR formats (PNG, JPEG, BMP, TIFF) load and save the display bitmap
//! directly through the `image` crate, with no tone mapping.

use std::io::{Cursor, Write};

use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::common::format::StorageFormat;
use crate::image_pipeline::tonemap::types::DisplayBitmap;

/// Decodes an SDR raster image straight into a display bitmap.
///
/// The format is sniffed from the byte content. Non-RGB8 sources (gray,
/// RGBA) are converted to RGB8.
pub fn decode_raster(data: &[u8]) -> Result<DisplayBitmap> {
    debug!("Decoding raster image, {} bytes", data.len());

    let decoded = image::load_from_memory(data)
        .map_err(|e| ConversionError::GenericDecodeError(e.to_string()))?;
    let rgb = decoded.to_rgb8();

    Ok(DisplayBitmap {
        width: rgb.width() as usize,
        height: rgb.height() as usize,
        data: rgb.into_raw(),
    })
}

/// Encodes a display bitmap as-is into the given SDR raster format.
pub fn encode_raster(
    bitmap: &DisplayBitmap,
    output: &mut dyn Write,
    format: StorageFormat,
) -> Result<()> {
    debug!("Encoding raster image: {}x{} as {:?}", bitmap.width, bitmap.height, format);

    let raster_format = format
        .raster_format()
        .ok_or_else(|| ConversionError::UnsupportedFormat(format!("{format:?}")))?;

    let rgb: image::RgbImage = image::ImageBuffer::from_raw(
        bitmap.width as u32,
        bitmap.height as u32,
        bitmap.data.clone(),
    )
    .ok_or_else(|| {
        ConversionError::GenericSaveError(format!(
            "pixel buffer has {} bytes, expected {}x{}x3",
            bitmap.data.len(),
            bitmap.width,
            bitmap.height
        ))
    })?;

    let mut buffer = Cursor::new(Vec::new());
    rgb.write_to(&mut buffer, raster_format)
        .map_err(|e| ConversionError::GenericSaveError(e.to_string()))?;

    output
        .write_all(buffer.get_ref())
        .map_err(|e| ConversionError::GenericSaveError(e.to_string()))?;

    Ok(())
}
