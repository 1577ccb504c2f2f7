//! Extracted feature types

use serde::Serialize;

/// Number of rows in the texture thumbnail, and so the length of the
/// texture descriptor.
pub const TEXTURE_BINS: usize = 32;

/// Fixed-length color/texture feature record over the canonical image.
///
/// Channel statistics are in the 0..255 pixel scale. Never mutated after
/// extraction.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureVector {
    /// Per-channel mean [r, g, b]
    pub mean: [f64; 3],
    /// Per-channel population standard deviation [r, g, b]
    pub std: [f64; 3],
    /// Row-wise means of the 32x32 grayscale thumbnail
    pub texture: [f64; TEXTURE_BINS],
}

/// Full extractor output for one image
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorFeatures {
    /// Fraction of pixels classified as vegetation green, in [0, 1]
    pub green_ratio: f64,
    /// Mean red channel normalized to [0, 1], a crude visible-light proxy
    /// for near-infrared reflectance (not a sensor reading)
    pub nir_estimate: f64,
    /// Color-moment and texture features
    pub features: FeatureVector,
}
