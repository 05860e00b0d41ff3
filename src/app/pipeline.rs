//! Shared analysis pipeline used by both CLI and TUI front-ends.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! weights resolution -> engine -> composition
//!
//! The CLI and the TUI can then focus on presentation (printing vs widgets).

use std::path::PathBuf;

use crate::data::{DEMO_WEIGHTS, generate_sample};
use crate::domain::{AnalysisResult, CLASS_COUNT, Composition, SampleConfig};
use crate::error::AppError;

/// Where a run's retained weights come from.
#[derive(Debug, Clone)]
pub enum WeightSource {
    File(PathBuf),
    Inline([f64; CLASS_COUNT]),
    Demo,
    Random(SampleConfig),
}

/// All computed outputs of a single analysis run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub weights: [f64; CLASS_COUNT],
    pub result: AnalysisResult,
    pub composition: Composition,
}

/// Resolve a weight source to concrete retained weights.
pub fn resolve_weights(source: &WeightSource) -> Result<[f64; CLASS_COUNT], AppError> {
    match source {
        WeightSource::File(path) => crate::io::read_weights_csv(path),
        WeightSource::Inline(weights) => Ok(*weights),
        WeightSource::Demo => Ok(DEMO_WEIGHTS),
        WeightSource::Random(config) => generate_sample(config),
    }
}

/// Execute the full analysis pipeline and return the computed outputs.
pub fn run_analysis(source: &WeightSource) -> Result<RunOutput, AppError> {
    let weights = resolve_weights(source)?;
    run_analysis_with_weights(weights)
}

/// Execute the pipeline with already-resolved weights.
///
/// This is what the TUI calls on every edit, where the entry panel is the
/// source.
pub fn run_analysis_with_weights(weights: [f64; CLASS_COUNT]) -> Result<RunOutput, AppError> {
    let result = crate::engine::analyze(&weights)?;
    let composition = result.composition();
    Ok(RunOutput {
        weights,
        result,
        composition,
    })
}
