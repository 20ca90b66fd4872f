use std::io::{Cursor, Write};

use exr::prelude::*;
use tracing::debug;

use crate::image_pipeline::common::error::{ConversionError, Result};
use crate::image_pipeline::hdr::types::{ConversionConfig, ExrCompression, HdrImageData};
use crate::image_pipeline::hdr::writer::HdrImageWriter;

pub struct ExrsWriter;

impl HdrImageWriter for ExrsWriter {
    fn write_hdr(&self, image: &HdrImageData, output: &mut dyn Write, config: &ConversionConfig) -> Result<()> {
        debug!("Encoding EXR image: {}x{}", image.width, image.height);

        if image.data.len() != image.expected_len() {
            return Err(ConversionError::LayoutError(format!(
                "pixel buffer has {} samples, expected {}x{}x3 = {}",
                image.data.len(),
                image.width,
                image.height,
                image.expected_len()
            )));
        }

        let compression = match config.compression {
            ExrCompression::Uncompressed => exr::compression::Compression::Uncompressed,
            ExrCompression::Rle => exr::compression::Compression::RLE,
            ExrCompression::Zip => exr::compression::Compression::ZIP16,
            ExrCompression::Piz => exr::compression::Compression::PIZ,
        };

        let width = image.width;
        let pixels = &image.data;
        let layer = Layer::new(
            (image.width, image.height),
            LayerAttributes::default(),
            Encoding {
                compression,
                ..Encoding::UNCOMPRESSED
            },
            // 3 float channels named R, G, B at full f32 precision
            SpecificChannels::rgb(|pos: Vec2<usize>| {
                let index = (pos.y() * width + pos.x()) * 3;
                (pixels[index], pixels[index + 1], pixels[index + 2])
            }),
        );

        let mut buffer = Vec::new();
        Image::from_layer(layer)
            .write()
            .to_buffered(Cursor::new(&mut buffer))
            .map_err(|e| ConversionError::WriteError(e.to_string()))?;

        output.write_all(&buffer)
            .map_err(|e| ConversionError::WriteError(e.to_string()))?;

        debug!("EXR encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}
