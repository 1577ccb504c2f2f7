//! Threshold decision table over extracted color features.
//!
//! Despite the name, there is no trained model and no fitting step; the
//! classification is a fixed sequence of comparisons on channel means.

use tracing::debug;

use crate::analysis::classify::types::{ConditionLabel, Diagnosis};
use crate::analysis::features::types::FeatureVector;

/// Normalized mean brightness above which the image is treated as
/// washed-out and reported Healthy without inspecting channel balance.
const BRIGHTNESS_CUTOFF: f64 = 0.7;

/// Green share of the channel-mean sum below which the image reads as Rust.
const RUST_GREEN_CUTOFF: f64 = 0.3;

/// Confidence formula terms: base plus a green-content-scaled span. The
/// result is not renormalized per branch taken.
const CONFIDENCE_BASE: f64 = 0.7;
const CONFIDENCE_SPAN: f64 = 0.2;

/// Fixed confidence for the washed-out Healthy branch, which never
/// computes green content.
const WASHED_OUT_CONFIDENCE: f64 = 0.9;

/// Deterministic, stateless disease classifier.
///
/// Identical feature vectors always produce identical diagnoses; instances
/// are free to construct per call since nothing is learned or cached.
#[derive(Default)]
pub struct HeuristicDiseaseClassifier;

impl HeuristicDiseaseClassifier {
    pub fn new() -> Self {
        Self
    }

    pub fn classify(&self, features: &FeatureVector) -> Diagnosis {
        let [mean_r, mean_g, mean_b] = features.mean;

        let mean_brightness = (mean_r + mean_g + mean_b) / 3.0 / 255.0;
        if mean_brightness > BRIGHTNESS_CUTOFF {
            debug!(mean_brightness, "Image washed out, reporting Healthy");
            return Diagnosis {
                condition: ConditionLabel::Healthy,
                confidence: WASHED_OUT_CONFIDENCE,
                recommendations: ConditionLabel::Healthy.recommendations(),
            };
        }

        let channel_sum = mean_r + mean_g + mean_b;
        let green_content = if channel_sum > 0.0 {
            mean_g / channel_sum
        } else {
            0.0
        };

        let condition = if green_content < RUST_GREEN_CUTOFF {
            ConditionLabel::Rust
        } else if mean_r > mean_g {
            ConditionLabel::LeafBlight
        } else if mean_b > mean_g {
            ConditionLabel::LeafSpot
        } else {
            ConditionLabel::Healthy
        };

        let confidence = CONFIDENCE_BASE + CONFIDENCE_SPAN * green_content;

        debug!(
            green_content,
            confidence,
            "Classified condition: {}", condition.name()
        );

        Diagnosis {
            condition,
            confidence,
            recommendations: condition.recommendations(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::features::types::TEXTURE_BINS;

    fn features_with_means(mean: [f64; 3]) -> FeatureVector {
        FeatureVector {
            mean,
            std: [0.0; 3],
            texture: [0.0; TEXTURE_BINS],
        }
    }

    #[test]
    fn test_washed_out_image_is_healthy() {
        let diagnosis =
            HeuristicDiseaseClassifier::new().classify(&features_with_means([255.0, 255.0, 255.0]));
        assert_eq!(diagnosis.condition, ConditionLabel::Healthy);
        assert_eq!(diagnosis.confidence, WASHED_OUT_CONFIDENCE);
        assert_eq!(
            diagnosis.recommendations,
            ConditionLabel::Healthy.recommendations()
        );
    }

    #[test]
    fn test_green_dominant_fallthrough_is_healthy() {
        // green content 0.4, red and blue both below green
        let diagnosis =
            HeuristicDiseaseClassifier::new().classify(&features_with_means([60.0, 80.0, 60.0]));
        assert_eq!(diagnosis.condition, ConditionLabel::Healthy);
        assert!((diagnosis.confidence - 0.78).abs() < 1e-9);
    }

    #[test]
    fn test_low_green_content_is_rust() {
        // green content exactly 0.2 -> Rust at confidence 0.74
        let diagnosis =
            HeuristicDiseaseClassifier::new().classify(&features_with_means([100.0, 50.0, 100.0]));
        assert_eq!(diagnosis.condition, ConditionLabel::Rust);
        assert!((diagnosis.confidence - 0.74).abs() < 1e-9);
    }

    #[test]
    fn test_red_dominant_is_leaf_blight() {
        let diagnosis =
            HeuristicDiseaseClassifier::new().classify(&features_with_means([120.0, 90.0, 30.0]));
        assert_eq!(diagnosis.condition, ConditionLabel::LeafBlight);
    }

    #[test]
    fn test_blue_dominant_is_leaf_spot() {
        let diagnosis =
            HeuristicDiseaseClassifier::new().classify(&features_with_means([80.0, 90.0, 120.0]));
        assert_eq!(diagnosis.condition, ConditionLabel::LeafSpot);
    }

    #[test]
    fn test_black_image_does_not_divide_by_zero() {
        let diagnosis =
            HeuristicDiseaseClassifier::new().classify(&features_with_means([0.0, 0.0, 0.0]));
        assert_eq!(diagnosis.condition, ConditionLabel::Rust);
        assert!((diagnosis.confidence - CONFIDENCE_BASE).abs() < 1e-9);
    }

    #[test]
    fn test_deterministic() {
        let features = features_with_means([70.0, 95.0, 50.0]);
        let classifier = HeuristicDiseaseClassifier::new();
        let first = classifier.classify(&features);
        let second = classifier.classify(&features);
        assert_eq!(first, second);
    }
}
