//! Analysis result and collaborator-facing record types

use serde::Serialize;

use crate::analysis::classify::types::{ConditionLabel, Severity};
use crate::analysis::common::error::Result;
use crate::analysis::features::types::FeatureVector;
use crate::analysis::index::StressLevel;

/// Complete outcome of one image analysis.
///
/// Constructed once per call and immutable afterwards; persistence and
/// display lifetimes are the caller's concern.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisResult {
    /// Fraction of pixels classified as vegetation green, in [0, 1]
    pub green_ratio: f64,
    /// Red-channel NIR proxy, in [0, 1]
    pub nir_estimate: f64,
    /// Normalized vegetation health score, in [0, 1]
    pub health_score: f64,
    /// Qualitative stress band derived from the health score
    pub stress: StressLevel,
    /// Detected crop condition
    pub condition: ConditionLabel,
    /// Severity tier of the detected condition
    pub severity: Severity,
    /// Classifier confidence, in [0, 1]
    pub confidence: f64,
    /// Ordered treatment recommendations
    pub recommendations: Vec<String>,
    /// Raw color/texture features, for detailed-metrics collaborators
    pub features: FeatureVector,
}

impl AnalysisResult {
    /// Builds the flat record shape the persistence collaborator appends,
    /// one row per analysis.
    pub fn to_record(&self, date: impl Into<String>) -> AnalysisRecord {
        AnalysisRecord {
            date: date.into(),
            ndvi: self.health_score,
            green_ratio: self.green_ratio,
            stress_level: self.stress.as_str().to_string(),
            disease_name: self.condition.name().to_string(),
        }
    }
}

/// Flat, append-only record handed to the persistence collaborator.
/// No schema versioning.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisRecord {
    pub date: String,
    pub ndvi: f64,
    pub green_ratio: f64,
    pub stress_level: String,
    pub disease_name: String,
}

/// Boundary payload that never fails: either the analysis result or the
/// error message, with an explicit success flag.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub success: bool,
    #[serde(flatten)]
    pub result: Option<AnalysisResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AnalysisReport {
    pub fn from_outcome(outcome: Result<AnalysisResult>) -> Self {
        match outcome {
            Ok(result) => Self {
                success: true,
                result: Some(result),
                error: None,
            },
            Err(e) => Self {
                success: false,
                result: None,
                error: Some(e.to_string()),
            },
        }
    }

    /// Condition name for record building, or a placeholder when the
    /// analysis failed.
    pub fn disease_name(&self) -> &str {
        self.result
            .as_ref()
            .map(|r| r.condition.name())
            .unwrap_or("Not detected")
    }
}
