//! Color and texture feature extraction module
//!
//! This module turns a canonical RGB buffer into the color-moment and
//! texture features the disease classifier and vegetation index consume.

mod extractor;
pub mod types;

pub use extractor::ColorFeatureExtractor;
pub use types::{ColorFeatures, FeatureVector};
