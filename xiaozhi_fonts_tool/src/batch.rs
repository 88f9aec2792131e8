use log::{error, info};
use std::path::PathBuf;
use xiaozhi_fonts::{
    ArtifactType, CommandRunner, FontFamily, FontGenError, GenerationRequest, ToolConfig,
};

/// The result of generating one configuration of a batch.
#[derive(Debug)]
pub struct BatchOutcome {
    pub font_size: u32,
    pub bpp: u32,
    pub result: Result<PathBuf, FontGenError>,
}

/// Generates the text font bitmap source for every configured `(size, bpp)` pair.
///
/// A failing configuration is reported and the remaining ones still run.
pub fn run_batch(config: &ToolConfig, runner: &dyn CommandRunner) -> Vec<BatchOutcome> {
    let mut outcomes = Vec::new();
    for &(font_size, bpp) in &config.batch {
        info!("Generating {font_size}px font, {bpp} bpp...");
        let result = GenerationRequest::new(FontFamily::Text, ArtifactType::BitmapSource)
            .map(|x| x.font_size(font_size).bpp(bpp))
            .and_then(|request| xiaozhi_fonts::generate(config, &request, runner));
        match &result {
            Ok(_) => info!("Generated {font_size}px font."),
            Err(e) => error!("Failed to generate {font_size}px font: {e}"),
        }
        outcomes.push(BatchOutcome { font_size, bpp, result });
    }
    outcomes
}

/// The `(size, bpp)` pairs that failed to generate, in batch order.
pub fn failed_configurations(outcomes: &[BatchOutcome]) -> Vec<(u32, u32)> {
    outcomes
        .iter()
        .filter(|x| x.result.is_err())
        .map(|x| (x.font_size, x.bpp))
        .collect()
}
