//! Tone-mapping module for converting between linear HDR and display SDR
//!
//! The forward path (Reinhard + gamma encode) turns unbounded linear light
//! into an 8-bit display bitmap. The inverse path undoes both transforms on
//! export. Quantization and the inverse clamp make the round trip
//! approximate, never exact.

pub mod encode;
pub mod decode;
pub mod types;

pub use encode::DisplayEncoder;
pub use decode::DisplayDecoder;
pub use types::DisplayBitmap;

/// Gamma exponent for both encode and decode. A fixed power curve, not the
/// piecewise sRGB transfer function, so the two directions invert exactly.
pub const GAMMA: f32 = 2.2;

/// Ceiling applied before the inverse Reinhard division. Guards against the
/// blow-up as the forward map approaches 1; must stay below 1.0.
pub const INVERSE_REINHARD_CEILING: f32 = 0.95;

/// Brightest linear value the inverse path can reconstruct,
/// `0.95 / (1 - 0.95) = 19`. Anything brighter was lost at encode time.
pub const MAX_RECONSTRUCTED: f32 = INVERSE_REINHARD_CEILING / (1.0 - INVERSE_REINHARD_CEILING);
