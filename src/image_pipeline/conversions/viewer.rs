use tracing::{info, instrument};
use std::io::Write;
use std::path::Path;

use crate::image_pipeline::{
    common::error::{ConversionError, Result},
    common::format::StorageFormat,
    hdr::{ConversionConfig, ExrsReader, ExrsWriter, HdrImageReader, HdrImageWriter},
    raster,
    tonemap::{DisplayBitmap, DisplayDecoder, DisplayEncoder},
};

/// Load/export pipeline behind the viewer shell.
///
/// `load` produces a fresh display bitmap or fails without touching caller
/// state; `export` reads the bitmap without mutating it. Both run to
/// completion on the calling thread. The shell owns the bitmap between
/// calls and is expected to serialize access to it.
pub struct ViewerPipeline<R: HdrImageReader, W: HdrImageWriter> {
    reader: R,
    writer: W,
    encoder: DisplayEncoder,
    decoder: DisplayDecoder,
    config: ConversionConfig,
}

impl ViewerPipeline<ExrsReader, ExrsWriter> {
    pub fn new(config: ConversionConfig) -> Self {
        Self {
            reader: ExrsReader,
            writer: ExrsWriter,
            encoder: DisplayEncoder::new(),
            decoder: DisplayDecoder::new(),
            config,
        }
    }
}

impl<R: HdrImageReader, W: HdrImageWriter> ViewerPipeline<R, W> {
    pub fn with_custom(reader: R, writer: W, config: ConversionConfig) -> Self {
        Self {
            reader,
            writer,
            encoder: DisplayEncoder::new(),
            decoder: DisplayDecoder::new(),
            config,
        }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(ConversionError::InvalidDimensions(width, height));
        }

        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                return Err(ConversionError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    #[instrument(skip(self, data), fields(input_size = data.len()))]
    pub fn load(&self, data: &[u8], format: StorageFormat) -> Result<DisplayBitmap> {
        info!("Loading {:?} image", format);

        let bitmap = if format.is_hdr() {
            let hdr_image = {
                let _span = tracing::info_span!("decode_hdr").entered();
                self.reader.read_hdr(data)?
            };

            {
                let _span = tracing::info_span!("validate_dimensions",
                    width = hdr_image.width,
                    height = hdr_image.height
                ).entered();
                self.validate_dimensions(hdr_image.width, hdr_image.height)?;
            }

            let _span = tracing::info_span!("tone_map").entered();
            self.encoder.encode(&hdr_image)
        } else {
            let bitmap = {
                let _span = tracing::info_span!("decode_raster").entered();
                raster::decode_raster(data)?
            };
            self.validate_dimensions(bitmap.width, bitmap.height)?;
            bitmap
        };

        info!(
            width = bitmap.width,
            height = bitmap.height,
            "Load complete"
        );
        Ok(bitmap)
    }

    #[instrument(skip(self, path))]
    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<DisplayBitmap> {
        let path = path.as_ref();
        let format = StorageFormat::from_path(path)?;

        info!(input = %path.display(), ?format, "Loading file");

        let data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(path).map_err(|e| {
                let message = format!("{}: {}", path.display(), e);
                if format.is_hdr() {
                    ConversionError::OpenError(message)
                } else {
                    ConversionError::GenericDecodeError(message)
                }
            })?
        };

        self.load(&data, format)
    }

    #[instrument(skip(self, bitmap, output), fields(width = bitmap.width, height = bitmap.height))]
    pub fn export(&self, bitmap: &DisplayBitmap, output: &mut dyn Write, format: StorageFormat) -> Result<()> {
        info!("Exporting {:?} image", format);

        if format.is_hdr() {
            let hdr_image = {
                let _span = tracing::info_span!("invert_tone_map").entered();
                self.decoder.decode(bitmap)
            };

            let _span = tracing::info_span!("encode_hdr").entered();
            self.writer.write_hdr(&hdr_image, output, &self.config)?;
        } else {
            let _span = tracing::info_span!("encode_raster").entered();
            raster::encode_raster(bitmap, output, format)?;
        }

        info!("Export complete");
        Ok(())
    }

    #[instrument(skip(self, bitmap, path))]
    pub fn export_file<P: AsRef<Path>>(&self, bitmap: &DisplayBitmap, path: P) -> Result<()> {
        let path = path.as_ref();
        let format = StorageFormat::from_path(path)?;

        info!(output = %path.display(), ?format, "Exporting file");

        let mut output_file = {
            let _span = tracing::info_span!("create_output_file").entered();
            std::fs::File::create(path).map_err(|e| {
                let message = format!("{}: {}", path.display(), e);
                if format.is_hdr() {
                    ConversionError::CreateError(message)
                } else {
                    ConversionError::GenericSaveError(message)
                }
            })?
        };

        self.export(bitmap, &mut output_file, format)
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ConversionConfig) {
        self.config = config;
    }
}
