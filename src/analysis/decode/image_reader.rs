//! Image reader implementation using the `image` library.
//!
//! This module decodes ordinary photograph formats (PNG, JPEG, BMP, GIF)
//! and canonicalizes them to the configured square size so that downstream
//! thresholds are independent of the source resolution.

use image::imageops::FilterType;
use tracing::debug;

use crate::analysis::common::error::{AnalysisError, Result};
use crate::analysis::config::AnalysisConfig;
use crate::analysis::decode::reader::ImageReader;
use crate::analysis::decode::types::ImageBuffer;

/// Image reader that decodes with the `image` library and resizes to the
/// canonical analysis size.
///
/// Any format the `image` crate can decode is accepted; the output is
/// always interleaved 8-bit RGB at `canonical_size` × `canonical_size`.
pub struct CanonicalImageReader;

impl ImageReader for CanonicalImageReader {
    /// Decodes and canonicalizes crop photograph bytes.
    ///
    /// This method:
    /// 1. Decodes the input with `image::load_from_memory`
    /// 2. Optionally validates the source dimensions
    /// 3. Resizes to the canonical square size and converts to RGB8
    ///
    /// # Arguments
    ///
    /// * `data` - Raw bytes of the photograph file
    /// * `config` - Analysis configuration (canonical size, validation flag)
    ///
    /// # Returns
    ///
    /// * `Ok(ImageBuffer)` - Canonical RGB buffer ready for feature extraction
    /// * `Err(AnalysisError)` - The bytes could not be decoded as an image
    fn read_image(&self, data: &[u8], config: &AnalysisConfig) -> Result<ImageBuffer> {
        debug!("Decoding crop image, {} bytes", data.len());

        let decoded = image::load_from_memory(data)
            .map_err(|e| AnalysisError::DecodeError(e.to_string()))?;

        let (source_width, source_height) = (decoded.width(), decoded.height());
        debug!("Decoded image: {}x{}", source_width, source_height);

        if config.validate_dimensions && (source_width == 0 || source_height == 0) {
            return Err(AnalysisError::InvalidDimensions(source_width, source_height));
        }

        let edge = config.canonical_size;
        let canonical = decoded
            .resize_exact(edge, edge, FilterType::Lanczos3)
            .to_rgb8();

        debug!("Canonicalized to {}x{}", edge, edge);

        Ok(ImageBuffer {
            width: edge,
            height: edge,
            data: canonical.into_raw(),
        })
    }
}
