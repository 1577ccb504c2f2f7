use crate::analysis::common::error::Result;
use crate::analysis::config::AnalysisConfig;
use crate::analysis::decode::types::ImageBuffer;

pub trait ImageReader {
    fn read_image(&self, data: &[u8], config: &AnalysisConfig) -> Result<ImageBuffer>;
}
