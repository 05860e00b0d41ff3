//! Read/write analysis JSON files.
//!
//! Analysis JSON is the "portable" representation of one run:
//! - the raw retained weights
//! - the full engine result
//! - a date stamp
//!
//! `gsat plot` reloads these files to re-render charts without re-entering
//! the weights.

use std::fs::File;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::{AnalysisResult, CLASS_COUNT};
use crate::error::AppError;

/// A saved analysis file (JSON).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisFile {
    pub tool: String,
    pub date: NaiveDate,
    pub weights: [f64; CLASS_COUNT],
    pub result: AnalysisResult,
}

/// Write an analysis JSON file.
pub fn write_analysis_json(
    path: &Path,
    weights: &[f64; CLASS_COUNT],
    result: &AnalysisResult,
) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::input(format!("Failed to create analysis JSON '{}': {e}", path.display())))?;

    let analysis = AnalysisFile {
        tool: "gsat".to_string(),
        date: chrono::Local::now().date_naive(),
        weights: *weights,
        result: result.clone(),
    };

    serde_json::to_writer_pretty(file, &analysis)
        .map_err(|e| AppError::input(format!("Failed to write analysis JSON: {e}")))?;

    Ok(())
}

/// Read an analysis JSON file.
pub fn read_analysis_json(path: &Path) -> Result<AnalysisFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::input(format!("Failed to open analysis JSON '{}': {e}", path.display())))?;
    let analysis: AnalysisFile = serde_json::from_reader(file)
        .map_err(|e| AppError::input(format!("Invalid analysis JSON: {e}")))?;
    Ok(analysis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DEMO_WEIGHTS;
    use crate::engine::analyze;

    #[test]
    fn analysis_json_round_trip() {
        let result = analyze(&DEMO_WEIGHTS).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("analysis.json");

        write_analysis_json(&path, &DEMO_WEIGHTS, &result).unwrap();
        let loaded = read_analysis_json(&path).unwrap();

        assert_eq!(loaded.tool, "gsat");
        assert_eq!(loaded.weights, DEMO_WEIGHTS);
        assert_eq!(loaded.result, result);
    }
}
