//! Crop image analysis module
//!
//! This module provides a structured approach to crop-photo analysis,
//! with separate modules for image decoding, color/texture feature
//! extraction, vegetation indexing, disease classification, and
//! pipeline orchestration.

pub mod classify;
pub mod common;
pub mod config;
pub mod decode;
pub mod features;
pub mod index;
pub mod pipeline;

pub use common::{
    AnalysisError,
    Result,
};

pub use config::{
    AnalysisConfig,
    AnalysisConfigBuilder,
};

pub use decode::{
    CanonicalImageReader,
    ImageBuffer,
    ImageReader,
};

pub use features::{
    ColorFeatureExtractor,
    ColorFeatures,
    FeatureVector,
};

pub use index::{
    health_score,
    StressLevel,
};

pub use classify::{
    ConditionLabel,
    Diagnosis,
    HeuristicDiseaseClassifier,
    Severity,
};

pub use pipeline::{
    AnalysisPipeline,
    AnalysisRecord,
    AnalysisReport,
    AnalysisResult,
};
