//! Analysis configuration types

/// Configuration for crop image analysis
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Edge length of the canonical square image all inputs are resized to.
    /// Downstream thresholds are calibrated against this size.
    pub canonical_size: u32,
    /// Lower bound of the vegetation-green hue band (0..180 hue scale)
    pub green_hue_min: u8,
    /// Upper bound of the vegetation-green hue band (0..180 hue scale)
    pub green_hue_max: u8,
    /// Minimum saturation (0..255) for a pixel to count as vegetation
    pub min_saturation: u8,
    /// Minimum value/brightness (0..255) for a pixel to count as vegetation
    pub min_value: u8,
    /// Whether to validate source image dimensions before canonicalization
    pub validate_dimensions: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            canonical_size: 224,
            green_hue_min: 35,
            green_hue_max: 85,
            min_saturation: 40,
            min_value: 40,
            validate_dimensions: true,
        }
    }
}

impl AnalysisConfig {
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder::default()
    }
}

/// Builder for AnalysisConfig
#[derive(Default)]
pub struct AnalysisConfigBuilder {
    canonical_size: Option<u32>,
    green_hue_min: Option<u8>,
    green_hue_max: Option<u8>,
    min_saturation: Option<u8>,
    min_value: Option<u8>,
    validate_dimensions: Option<bool>,
}

impl AnalysisConfigBuilder {
    pub fn canonical_size(mut self, size: u32) -> Self {
        self.canonical_size = Some(size);
        self
    }

    pub fn green_hue_band(mut self, min: u8, max: u8) -> Self {
        self.green_hue_min = Some(min);
        self.green_hue_max = Some(max);
        self
    }

    pub fn min_saturation(mut self, saturation: u8) -> Self {
        self.min_saturation = Some(saturation);
        self
    }

    pub fn min_value(mut self, value: u8) -> Self {
        self.min_value = Some(value);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn build(self) -> AnalysisConfig {
        let default = AnalysisConfig::default();
        AnalysisConfig {
            canonical_size: self.canonical_size.unwrap_or(default.canonical_size),
            green_hue_min: self.green_hue_min.unwrap_or(default.green_hue_min),
            green_hue_max: self.green_hue_max.unwrap_or(default.green_hue_max),
            min_saturation: self.min_saturation.unwrap_or(default.min_saturation),
            min_value: self.min_value.unwrap_or(default.min_value),
            validate_dimensions: self.validate_dimensions.unwrap_or(default.validate_dimensions),
        }
    }
}
