//! Color feature extraction over the canonical RGB buffer.
//!
//! Vegetation masking happens in HSV space using the OpenCV-style scaling
//! (hue in 0..180, saturation/value in 0..255) so the green band thresholds
//! keep their conventional values. Texture is summarized by downsampling
//! the grayscale image to a small thumbnail and taking row-wise means.

use image::GrayImage;
use image::imageops::{self, FilterType};
use tracing::debug;

use crate::analysis::common::error::{AnalysisError, Result};
use crate::analysis::config::AnalysisConfig;
use crate::analysis::decode::types::ImageBuffer;
use crate::analysis::features::types::{ColorFeatures, FeatureVector, TEXTURE_BINS};

/// Edge length of the grayscale texture thumbnail.
const TEXTURE_EDGE: u32 = TEXTURE_BINS as u32;

/// Extracts green-pixel ratio, NIR estimate, color moments, and a texture
/// profile from a canonical image.
///
/// Pure function of the input buffer; freely instantiable, no state is
/// carried between calls.
pub struct ColorFeatureExtractor {
    green_hue_min: u8,
    green_hue_max: u8,
    min_saturation: u8,
    min_value: u8,
}

impl ColorFeatureExtractor {
    pub fn new(config: &AnalysisConfig) -> Self {
        Self {
            green_hue_min: config.green_hue_min,
            green_hue_max: config.green_hue_max,
            min_saturation: config.min_saturation,
            min_value: config.min_value,
        }
    }

    /// Extracts all color and texture features in a single pass over the
    /// pixel data, plus one downsample for the texture profile.
    ///
    /// # Returns
    ///
    /// * `Ok(ColorFeatures)` - green ratio and NIR estimate clamped to
    ///   [0, 1] by construction, alongside the feature vector
    /// * `Err(AnalysisError::EmptyImage)` - the buffer holds no pixels
    pub fn extract(&self, image: &ImageBuffer) -> Result<ColorFeatures> {
        let total = image.pixel_count();
        if total == 0 {
            return Err(AnalysisError::EmptyImage);
        }

        let mut green_pixels = 0usize;
        let mut sum = [0f64; 3];
        let mut sum_sq = [0f64; 3];

        for pixel in image.pixels() {
            let (hue, saturation, value) = rgb_to_hsv(pixel[0], pixel[1], pixel[2]);
            if self.is_vegetation(hue, saturation, value) {
                green_pixels += 1;
            }
            for channel in 0..3 {
                let v = pixel[channel] as f64;
                sum[channel] += v;
                sum_sq[channel] += v * v;
            }
        }

        let n = total as f64;
        let mut mean = [0f64; 3];
        let mut std = [0f64; 3];
        for channel in 0..3 {
            mean[channel] = sum[channel] / n;
            let variance = sum_sq[channel] / n - mean[channel] * mean[channel];
            std[channel] = variance.max(0.0).sqrt();
        }

        let green_ratio = green_pixels as f64 / n;
        let nir_estimate = mean[0] / 255.0;

        debug!(
            green_ratio,
            nir_estimate,
            "Extracted color features from {} pixels", total
        );

        Ok(ColorFeatures {
            green_ratio,
            nir_estimate,
            features: FeatureVector {
                mean,
                std,
                texture: texture_profile(image),
            },
        })
    }

    fn is_vegetation(&self, hue: u8, saturation: u8, value: u8) -> bool {
        hue >= self.green_hue_min
            && hue <= self.green_hue_max
            && saturation >= self.min_saturation
            && value >= self.min_value
    }
}

/// Grayscale texture profile: downsample the luma image to a 32x32
/// thumbnail and take the mean of each row. A cheap stand-in for a true
/// co-occurrence texture matrix.
fn texture_profile(image: &ImageBuffer) -> [f64; TEXTURE_BINS] {
    let gray = GrayImage::from_fn(image.width, image.height, |x, y| {
        let [r, g, b] = image.pixel(x, y);
        image::Luma([luma(r, g, b)])
    });
    let thumb = imageops::resize(&gray, TEXTURE_EDGE, TEXTURE_EDGE, FilterType::Triangle);

    let mut profile = [0f64; TEXTURE_BINS];
    for (y, row) in thumb.as_raw().chunks_exact(TEXTURE_EDGE as usize).enumerate() {
        let row_sum: f64 = row.iter().map(|&v| v as f64).sum();
        profile[y] = row_sum / TEXTURE_EDGE as f64;
    }
    profile
}

/// BT.601 luma, the conventional RGB-to-grayscale weighting.
fn luma(r: u8, g: u8, b: u8) -> u8 {
    let y = 0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32;
    y.round().clamp(0.0, 255.0) as u8
}

/// Converts an RGB pixel to HSV with OpenCV scaling: hue in 0..180,
/// saturation and value in 0..255.
fn rgb_to_hsv(r: u8, g: u8, b: u8) -> (u8, u8, u8) {
    let rf = r as f32 / 255.0;
    let gf = g as f32 / 255.0;
    let bf = b as f32 / 255.0;

    let max = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let delta = max - min;

    let hue_degrees = if delta < f32::EPSILON {
        0.0
    } else if (max - rf).abs() < f32::EPSILON {
        60.0 * (((gf - bf) / delta) % 6.0)
    } else if (max - gf).abs() < f32::EPSILON {
        60.0 * ((bf - rf) / delta + 2.0)
    } else {
        60.0 * ((rf - gf) / delta + 4.0)
    };
    let hue_degrees = if hue_degrees < 0.0 {
        hue_degrees + 360.0
    } else {
        hue_degrees
    };

    let saturation = if max < f32::EPSILON { 0.0 } else { delta / max };

    let hue = ((hue_degrees / 2.0).round() as u16 % 180) as u8;
    (
        hue,
        (saturation * 255.0).round() as u8,
        (max * 255.0).round() as u8,
    )
}
