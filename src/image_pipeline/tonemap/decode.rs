use tracing::debug;

use crate::image_pipeline::hdr::types::HdrImageData;
use crate::image_pipeline::tonemap::types::DisplayBitmap;
use crate::image_pipeline::tonemap::{GAMMA, INVERSE_REINHARD_CEILING};

/// Inverse tone-mapping stage: 8-bit display bitmap in, linear HDR out.
///
/// Algebraic inverse of the forward stage minus the quantization, which is
/// unrecoverable. The inverse Reinhard input is capped at 0.95 so the
/// division can never blow up; reconstructed brightness therefore tops out
/// at 19. That ceiling is a contract of the format round trip, not a bug.
pub struct DisplayDecoder;

impl DisplayDecoder {
    pub fn new() -> Self {
        Self
    }

    pub fn decode(&self, bitmap: &DisplayBitmap) -> HdrImageData {
        debug!("Inverting tone map for {}x{} bitmap", bitmap.width, bitmap.height);

        let data = bitmap.data.iter().map(|&v| decode_channel(v)).collect();

        HdrImageData {
            width: bitmap.width,
            height: bitmap.height,
            data,
        }
    }
}

impl Default for DisplayDecoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Full inverse transform for one channel value: normalize, inverse gamma,
/// clamped inverse Reinhard.
pub fn decode_channel(v: u8) -> f32 {
    let normalized = v as f32 / 255.0;
    let linear = normalized.powf(GAMMA);
    let capped = linear.clamp(0.0, INVERSE_REINHARD_CEILING);
    capped / (1.0 - capped)
}
