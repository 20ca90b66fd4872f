//! Image processing pipeline module
//!
//! This module provides a structured approach to HDR/SDR image conversions,
//! with separate modules for EXR reading and writing, tone mapping, SDR
//! raster pass-through, and conversion orchestration.

pub mod hdr;
pub mod tonemap;
pub mod raster;
pub mod conversions;
pub mod common;

pub use common::{
    ConversionError,
    Result,
    StorageFormat,
};

pub use hdr::{
    HdrImageData,
    HdrImageReader,
    HdrImageWriter,
    ExrsReader,
    ExrsWriter,
    ExrCompression,
    ConversionConfig,
    ConversionConfigBuilder,
};

pub use tonemap::{
    DisplayBitmap,
    DisplayEncoder,
    DisplayDecoder,
};

pub use conversions::{
    ViewerPipeline,
};
