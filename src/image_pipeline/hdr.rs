//! HDR container I/O module
//!
//! This module provides reading and writing of linear float HDR images
//! (OpenEXR), independent of the tone-mapping stages.

mod reader;
mod writer;
mod exrs_reader;
mod exrs_writer;
pub mod types;

pub use reader::HdrImageReader;
pub use writer::HdrImageWriter;
pub use exrs_reader::ExrsReader;
pub use exrs_writer::ExrsWriter;
pub use types::{HdrImageData, ExrCompression, ConversionConfig, ConversionConfigBuilder};
