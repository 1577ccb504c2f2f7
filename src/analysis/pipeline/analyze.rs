use std::path::Path;

use tracing::{info, instrument};

use crate::analysis::{
    classify::HeuristicDiseaseClassifier,
    common::error::{AnalysisError, Result},
    config::AnalysisConfig,
    decode::{CanonicalImageReader, ImageReader},
    features::ColorFeatureExtractor,
    index::{StressLevel, health_score},
    pipeline::types::{AnalysisReport, AnalysisResult},
};

/// One-image-in, one-result-out analysis pipeline.
///
/// Strict sequence: decode, extract features, classify, compute the
/// vegetation index, assemble the result. Synchronous with no shared
/// mutable state, so independent invocations may run on parallel threads.
pub struct AnalysisPipeline<R: ImageReader> {
    reader: R,
    extractor: ColorFeatureExtractor,
    classifier: HeuristicDiseaseClassifier,
    config: AnalysisConfig,
}

impl AnalysisPipeline<CanonicalImageReader> {
    pub fn new(config: AnalysisConfig) -> Self {
        Self::with_reader(CanonicalImageReader, config)
    }
}

impl<R: ImageReader> AnalysisPipeline<R> {
    pub fn with_reader(reader: R, config: AnalysisConfig) -> Self {
        Self {
            reader,
            extractor: ColorFeatureExtractor::new(&config),
            classifier: HeuristicDiseaseClassifier::new(),
            config,
        }
    }

    #[instrument(skip(self, data), fields(input_size = data.len()))]
    pub fn analyze(&self, data: &[u8]) -> Result<AnalysisResult> {
        info!("Starting crop image analysis");

        let buffer = {
            let _span = tracing::info_span!("decode").entered();
            self.reader.read_image(data, &self.config)?
        };

        let color_features = {
            let _span = tracing::info_span!("extract_features",
                width = buffer.width,
                height = buffer.height
            )
            .entered();
            self.extractor.extract(&buffer)?
        };

        let diagnosis = {
            let _span = tracing::info_span!("classify").entered();
            self.classifier.classify(&color_features.features)
        };

        let (score, stress) = {
            let _span = tracing::info_span!("vegetation_index").entered();
            let score = health_score(color_features.green_ratio, color_features.nir_estimate);
            (score, StressLevel::from_score(score))
        };

        info!(
            health_score = score,
            stress = stress.as_str(),
            condition = diagnosis.condition.name(),
            "Analysis complete"
        );

        Ok(AnalysisResult {
            green_ratio: color_features.green_ratio,
            nir_estimate: color_features.nir_estimate,
            health_score: score,
            stress,
            condition: diagnosis.condition,
            severity: diagnosis.condition.severity(),
            confidence: diagnosis.confidence,
            recommendations: diagnosis
                .recommendations
                .iter()
                .map(|r| r.to_string())
                .collect(),
            features: color_features.features,
        })
    }

    /// Analyzes an image file on disk.
    #[instrument(skip(self, path))]
    pub fn analyze_file<P: AsRef<Path>>(&self, path: P) -> Result<AnalysisResult> {
        let path = path.as_ref();

        info!(input = %path.display(), "Analyzing file");

        let data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(path).map_err(|e| {
                AnalysisError::InputReadError(format!("{}: {}", path.display(), e))
            })?
        };

        self.analyze(&data)
    }

    /// Non-failing boundary: every error is converted into a
    /// `{success: false, error}` report so a single bad image never aborts
    /// a batch.
    pub fn report(&self, data: &[u8]) -> AnalysisReport {
        AnalysisReport::from_outcome(self.analyze(data))
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: AnalysisConfig) {
        self.extractor = ColorFeatureExtractor::new(&config);
        self.config = config;
    }
}
