//! HDR image reader implementation using the `exr` library.
//!
//! This module decodes OpenEXR files into a 3-channel linear float image.
//! Any flat single-part layer with at least 3 channels is accepted; deep
//! data and multi-resolution levels beyond the largest are ignored.

use std::io::Cursor;

use exr::prelude::*;
use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::hdr::reader::HdrImageReader;
use crate::image_pipeline::hdr::types::HdrImageData;

/// HDR image reader that uses the `exr` library for decoding.
///
/// Samples are converted to f32 regardless of the stored precision
/// (f16, f32 or u32).
pub struct ExrsReader;

impl HdrImageReader for ExrsReader {
    /// Reads and decodes an OpenEXR image from a byte array.
    ///
    /// This method:
    /// 1. Parses the container and the first valid flat layer
    /// 2. Validates that the layer carries usable pixel data
    /// 3. Selects 3 channels and interleaves them as RGB
    ///
    /// # Returns
    ///
    /// * `Ok(HdrImageData)` - Successfully decoded 3-channel linear image
    /// * `Err(ConversionError)` - `OpenError` when the container cannot be
    ///   parsed, `ReadError` when it holds no pixel data, `ChannelError`
    ///   when fewer than 3 channels are present, `LayoutError` when a
    ///   channel's sample count disagrees with the declared dimensions
    fn read_hdr(&self, data: &[u8]) -> Result<HdrImageData> {
        debug!("Decoding EXR image, {} bytes", data.len());

        let image = read()
            .no_deep_data()
            .largest_resolution_level()
            .all_channels()
            .first_valid_layer()
            .all_attributes()
            .from_buffered(Cursor::new(data))
            .map_err(|e| ConversionError::OpenError(e.to_string()))?;

        let layer = &image.layer_data;
        let width = layer.size.width();
        let height = layer.size.height();
        let channels = &layer.channel_data.list;

        debug!("Decoded image: {}x{}, {} channels", width, height, channels.len());

        if channels.is_empty() || width == 0 || height == 0 {
            return Err(ConversionError::ReadError(
                "container holds no pixel data".to_string(),
            ));
        }

        if channels.len() < 3 {
            return Err(ConversionError::ChannelError(channels.len()));
        }

        // The exr library reports channels in alphabetical file order, so a
        // plain RGB image arrives as B, G, R. Pick channels by name when the
        // standard ones are present, otherwise fall back to the first three
        // in file order. Excess channels (alpha, AOVs) are dropped.
        let (ri, gi, bi) = select_rgb_channels(channels);
        debug!(
            "Selected channels: {} {} {}",
            channels[ri].name, channels[gi].name, channels[bi].name
        );

        let expected = width * height;
        for &index in &[ri, gi, bi] {
            let actual = channels[index].sample_data.len();
            if actual != expected {
                return Err(ConversionError::LayoutError(format!(
                    "channel {} has {} samples, expected {}x{} = {}",
                    channels[index].name, actual, width, height, expected
                )));
            }
        }

        let mut data = Vec::with_capacity(expected * 3);
        let reds = channels[ri].sample_data.values_as_f32();
        let greens = channels[gi].sample_data.values_as_f32();
        let blues = channels[bi].sample_data.values_as_f32();
        for ((r, g), b) in reds.zip(greens).zip(blues) {
            data.push(r);
            data.push(g);
            data.push(b);
        }

        Ok(HdrImageData {
            width,
            height,
            data,
        })
    }
}

/// Indices of the R, G and B channels within the layer's channel list.
fn select_rgb_channels(channels: &[AnyChannel<FlatSamples>]) -> (usize, usize, usize) {
    let find = |name: &str| channels.iter().position(|ch| ch.name.eq(&name));
    match (find("R"), find("G"), find("B")) {
        (Some(r), Some(g), Some(b)) => (r, g, b),
        _ => (0, 1, 2),
    }
}
