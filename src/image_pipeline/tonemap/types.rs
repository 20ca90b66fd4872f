//! Display bitmap types

/// 8-bit display image data, gamma-encoded.
///
/// This is the only representation the viewer shell is allowed to mutate.
/// It is replaced wholesale on every load and read wholesale on export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayBitmap {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
    /// RGB pixel data interleaved [R, G, B, R, G, B, ...]
    pub data: Vec<u8>,
}

impl DisplayBitmap {
    /// Expected sample count for the declared dimensions.
    pub fn expected_len(&self) -> usize {
        self.width * self.height * 3
    }
}
