use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::hdr::types::HdrImageData;

pub trait HdrImageReader {
    fn read_hdr(&self, data: &[u8]) -> Result<HdrImageData>;
}
