//! Pipeline orchestration module
//!
//! This module wires decoding, feature extraction, classification, and
//! vegetation indexing into one synchronous analysis call.

mod analyze;
pub mod types;


pub use analyze::AnalysisPipeline;
pub use types::{AnalysisRecord, AnalysisReport, AnalysisResult};
