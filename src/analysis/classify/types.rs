//! Condition label and diagnosis types

use serde::Serialize;

/// Severity tier of a crop condition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Severity {
    None,
    Medium,
    High,
}

/// Closed set of crop conditions the classifier can report.
///
/// Labels carry their static description, severity tier, and treatment
/// recommendations; there is no dynamic registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConditionLabel {
    Healthy,
    LeafBlight,
    LeafSpot,
    Rust,
}

impl ConditionLabel {
    pub fn name(&self) -> &'static str {
        match self {
            ConditionLabel::Healthy => "Healthy",
            ConditionLabel::LeafBlight => "Leaf Blight",
            ConditionLabel::LeafSpot => "Leaf Spot",
            ConditionLabel::Rust => "Rust",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ConditionLabel::Healthy => "No disease detected",
            ConditionLabel::LeafBlight => "Fungal infection causing brown lesions",
            ConditionLabel::LeafSpot => "Small, circular spots on leaves",
            ConditionLabel::Rust => "Orange-brown pustules on leaves",
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            ConditionLabel::Healthy => Severity::None,
            ConditionLabel::LeafBlight => Severity::High,
            ConditionLabel::LeafSpot => Severity::Medium,
            ConditionLabel::Rust => Severity::Medium,
        }
    }

    /// Static treatment recommendation table, one entry per condition.
    pub fn recommendations(&self) -> &'static [&'static str] {
        match self {
            ConditionLabel::Healthy => &[
                "Continue regular monitoring",
                "Maintain current agricultural practices",
                "Regular watering and fertilization",
            ],
            ConditionLabel::LeafBlight => &[
                "Apply appropriate fungicide",
                "Improve air circulation",
                "Remove infected leaves",
                "Reduce overhead watering",
            ],
            ConditionLabel::LeafSpot => &[
                "Apply copper-based fungicide",
                "Maintain proper plant spacing",
                "Avoid water splashing on leaves",
            ],
            ConditionLabel::Rust => &[
                "Apply rust-specific fungicide",
                "Remove infected plant debris",
                "Improve air circulation",
                "Consider resistant varieties for next season",
            ],
        }
    }
}

/// Classifier output for one image
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Diagnosis {
    pub condition: ConditionLabel,
    /// Confidence estimate in [0, 1]
    pub confidence: f64,
    /// Ordered treatment recommendations for the detected condition
    pub recommendations: &'static [&'static str],
}
