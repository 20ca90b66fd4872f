use std::io::Write;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::hdr::types::{ConversionConfig, HdrImageData};

pub trait HdrImageWriter {
    fn write_hdr(&self, image: &HdrImageData, output: &mut dyn Write, config: &ConversionConfig) -> Result<()>;
}
