//! Disease classification module
//!
//! This module maps extracted color features to a closed set of crop
//! condition labels with a confidence estimate and treatment
//! recommendations.

mod classifier;
pub mod types;

pub use classifier::HeuristicDiseaseClassifier;
pub use types::{ConditionLabel, Diagnosis, Severity};
