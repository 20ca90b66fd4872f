use tracing::debug;

use crate::image_pipeline::hdr::types::HdrImageData;
use crate::image_pipeline::tonemap::types::DisplayBitmap;
use crate::image_pipeline::tonemap::GAMMA;

/// Forward tone-mapping stage: linear HDR in, 8-bit display bitmap out.
///
/// Applies per channel, per pixel, in order: Reinhard, clamp to [0,1],
/// gamma encode, quantize. No dithering, no exposure control. Lossy by
/// construction; the inverse stage only approximates the original values.
pub struct DisplayEncoder;

impl DisplayEncoder {
    pub fn new() -> Self {
        Self
    }

    pub fn encode(&self, image: &HdrImageData) -> DisplayBitmap {
        debug!("Tone mapping {}x{} image to display range", image.width, image.height);

        let data = image.data.iter().map(|&x| encode_channel(x)).collect();

        DisplayBitmap {
            width: image.width,
            height: image.height,
            data,
        }
    }
}

impl Default for DisplayEncoder {
    fn default() -> Self {
        Self::new()
    }
}

/// Reinhard operator, `x / (1 + x)`. Maps [0, inf) onto [0, 1) while
/// preserving brightness ordering.
pub fn reinhard(x: f32) -> f32 {
    x / (1.0 + x)
}

/// Composed forward transfer before quantization: Reinhard, clamp, gamma.
///
/// The clamp also absorbs NaN and negative inputs from upstream data,
/// mapping both to 0.
pub fn encode_value(x: f32) -> f32 {
    let mapped = reinhard(x);
    let clamped = if mapped.is_nan() {
        0.0
    } else {
        mapped.clamp(0.0, 1.0)
    };
    clamped.powf(1.0 / GAMMA)
}

/// Full forward transform for one channel value, quantized to u8.
pub fn encode_channel(x: f32) -> u8 {
    (encode_value(x) * 255.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reinhard_range() {
        assert_eq!(reinhard(0.0), 0.0);
        assert_eq!(reinhard(1.0), 0.5);
        assert!(reinhard(1000.0) < 1.0);
        assert!(reinhard(1000.0) > 0.99);
    }

    #[test]
    fn test_flat_value_maps_to_186() {
        // 1/(1+1) = 0.5, 0.5^(1/2.2) = 0.7297, round(186.08) = 186
        assert_eq!(encode_channel(1.0), 186);
    }

    #[test]
    fn test_extremes() {
        assert_eq!(encode_channel(0.0), 0);
        assert_eq!(encode_channel(1.0e9), 255);
    }

    #[test]
    fn test_nan_and_negative_inputs_are_absorbed() {
        assert_eq!(encode_channel(f32::NAN), 0);
        assert_eq!(encode_channel(-0.5), 0);
        // Reinhard pole at x = -1 lands on the clamp, not in the output
        assert_eq!(encode_channel(-1.0), 0);
    }

    #[test]
    fn test_forward_transfer_is_strictly_monotone() {
        let mut previous = encode_value(0.0);
        let mut x = 0.001f32;
        while x < 100.0 {
            let current = encode_value(x);
            assert!(
                current > previous,
                "transfer not increasing at x = {}: {} <= {}",
                x,
                current,
                previous
            );
            previous = current;
            x *= 1.1;
        }
    }

    #[test]
    fn test_encode_preserves_dimensions() {
        let image = HdrImageData {
            width: 3,
            height: 2,
            data: vec![1.0; 18],
        };
        let bitmap = DisplayEncoder::new().encode(&image);
        assert_eq!(bitmap.width, 3);
        assert_eq!(bitmap.height, 2);
        assert_eq!(bitmap.data.len(), 18);
        assert!(bitmap.data.iter().all(|&v| v == 186));
    }
}
