//! Simplified vegetation index
//!
//! Derives a bounded health score from the green-pixel ratio and the
//! red-channel NIR proxy. The raw index mirrors the NDVI shape
//! `(nir - deficit) / (nir + deficit)` with the vegetation deficit
//! `1 - green_ratio` standing in for the red band, then is normalized
//! from [-1, 1] into [0, 1].

use serde::Serialize;

/// Computes the normalized vegetation health score in [0, 1].
///
/// The denominator degenerates only when `nir_estimate` is 0 and
/// `green_ratio` is 1; that point returns 1.0, the one-sided limit of the
/// index as the NIR proxy approaches zero at full vegetation cover.
pub fn health_score(green_ratio: f64, nir_estimate: f64) -> f64 {
    let veg_deficit = 1.0 - green_ratio;
    let denominator = nir_estimate + veg_deficit;
    if denominator == 0.0 {
        return 1.0;
    }
    let raw_index = (nir_estimate - veg_deficit) / denominator;
    ((raw_index + 1.0) / 2.0).clamp(0.0, 1.0)
}

/// Qualitative stress band derived from the health score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum StressLevel {
    Low,
    Medium,
    High,
}

impl StressLevel {
    /// Band thresholds: score above 0.6 is Low, above 0.4 is Medium,
    /// everything else High.
    pub fn from_score(score: f64) -> Self {
        if score > 0.6 {
            StressLevel::Low
        } else if score > 0.4 {
            StressLevel::Medium
        } else {
            StressLevel::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StressLevel::Low => "Low",
            StressLevel::Medium => "Medium",
            StressLevel::High => "High",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_cover_closed_form() {
        // Zero deficit and positive NIR: raw index is exactly 1
        assert!((health_score(1.0, 0.5) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_degenerate_denominator() {
        assert_eq!(health_score(1.0, 0.0), 1.0);
    }

    #[test]
    fn test_balanced_point() {
        // nir equals deficit: raw index 0, normalized 0.5
        assert!((health_score(0.5, 0.5) - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_score_bounded() {
        for green in [0.0, 0.1, 0.35, 0.5, 0.8, 1.0] {
            for nir in [0.0, 0.2, 0.5, 0.9, 1.0] {
                let score = health_score(green, nir);
                assert!((0.0..=1.0).contains(&score), "score {score} out of range");
            }
        }
    }

    #[test]
    fn test_monotonic_in_green_ratio() {
        let nir = 0.5;
        let mut previous = health_score(0.0, nir);
        for green in [0.2, 0.4, 0.6, 0.8, 0.95] {
            let score = health_score(green, nir);
            assert!(score > previous, "score not increasing at green={green}");
            previous = score;
        }
    }

    #[test]
    fn test_stress_bands() {
        assert_eq!(StressLevel::from_score(0.9), StressLevel::Low);
        assert_eq!(StressLevel::from_score(0.5), StressLevel::Medium);
        assert_eq!(StressLevel::from_score(0.2), StressLevel::High);
        // Band edges fall into the lower band
        assert_eq!(StressLevel::from_score(0.6), StressLevel::Medium);
        assert_eq!(StressLevel::from_score(0.4), StressLevel::High);
    }
}
