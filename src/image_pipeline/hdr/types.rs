//! HDR image data and conversion configuration types

/// Decoded linear HDR image data.
///
/// Always carries exactly 3 channels; excess channels (alpha, AOVs) are
/// dropped by the reader. Values are linear light, conceptually `[0, inf)`.
#[derive(Debug, Clone)]
pub struct HdrImageData {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// Linear RGB pixel data interleaved [R, G, B, R, G, B, ...]
    pub data: Vec<f32>,
}

impl HdrImageData {
    /// Expected sample count for the declared dimensions.
    pub fn expected_len(&self) -> usize {
        self.width * self.height * 3
    }
}

/// EXR compression methods
#[derive(Debug, Clone, Copy)]
pub enum ExrCompression {
    /// No compression (fastest, largest file)
    Uncompressed,
    /// Run-length encoding (fast, poor compression)
    Rle,
    /// Deflate per scanline block (default, good speed/size balance)
    Zip,
    /// Wavelet compression (slower, best for noisy renders)
    Piz,
}

/// Configuration for HDR load/export conversion
#[derive(Debug, Clone)]
pub struct ConversionConfig {
    /// Compression method used when writing EXR output
    pub compression: ExrCompression,
    /// Whether to validate image dimensions before conversion
    pub validate_dimensions: bool,
    /// Optional ceiling on width/height, rejected when exceeded
    pub max_dimension: Option<usize>,
}

impl Default for ConversionConfig {
    fn default() -> Self {
        Self {
            compression: ExrCompression::Zip,
            validate_dimensions: true,
            max_dimension: None,
        }
    }
}

impl ConversionConfig {
    pub fn builder() -> ConversionConfigBuilder {
        ConversionConfigBuilder::default()
    }
}

/// Builder for ConversionConfig
#[derive(Default)]
pub struct ConversionConfigBuilder {
    compression: Option<ExrCompression>,
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<usize>>,
}

impl ConversionConfigBuilder {
    pub fn compression(mut self, compression: ExrCompression) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<usize>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn build(self) -> ConversionConfig {
        let default = ConversionConfig::default();
        ConversionConfig {
            compression: self.compression.unwrap_or(default.compression),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
        }
    }
}
