use anyhow::{Context, Result};
use cropsight::analysis::{AnalysisConfig, AnalysisPipeline};
use cropsight::logger;

use tracing::{error, info};

fn main() -> Result<()> {
    logger::init();

    info!("Starting cropsight...");

    let path = std::env::args()
        .nth(1)
        .context("usage: cropsight <image-path>")?;

    let config = AnalysisConfig::builder().build();
    let pipeline = AnalysisPipeline::new(config);

    info!("Crop analysis pipeline initialized");
    info!("Canonical size: {}px", pipeline.config().canonical_size);

    match pipeline.analyze_file(&path) {
        Ok(result) => {
            info!("Analysis successful!");
            info!("Overall health score: {:.2}", result.health_score);
            info!("Stress level: {}", result.stress.as_str());
            info!(
                "Condition: {} ({:.1}% confidence, severity {:?})",
                result.condition.name(),
                result.confidence * 100.0,
                result.severity
            );
            info!("Vegetation coverage: {:.1}%", result.green_ratio * 100.0);
            info!("NIR reflection: {:.2}", result.nir_estimate);
            for recommendation in &result.recommendations {
                info!("Recommendation: {}", recommendation);
            }

            let date = chrono::Local::now().format("%Y-%m-%d").to_string();
            let record = result.to_record(date);
            println!(
                "{}",
                serde_json::to_string_pretty(&record).context("serializing record")?
            );
        }
        Err(e) => error!("Analysis failed: {}", e),
    }

    Ok(())
}
