//! Export per-class results to CSV.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::domain::{AnalysisResult, CLASS_COUNT, SIEVE_CLASSES};
use crate::error::AppError;

/// Write the per-class distribution table to a CSV file.
pub fn write_results_csv(
    path: &Path,
    weights: &[f64; CLASS_COUNT],
    result: &AnalysisResult,
) -> Result<(), AppError> {
    let mut file = File::create(path)
        .map_err(|e| AppError::input(format!("Failed to create export CSV '{}': {e}", path.display())))?;

    writeln!(
        file,
        "class,opening_mm,phi,retained,weight_pct,cumulative_passing_pct"
    )
    .map_err(|e| AppError::input(format!("Failed to write export CSV header: {e}")))?;

    for (i, class) in SIEVE_CLASSES.iter().enumerate() {
        writeln!(
            file,
            "{},{},{},{:.4},{:.4},{:.4}",
            class.label(),
            class
                .opening_mm
                .map(|mm| mm.to_string())
                .unwrap_or_default(),
            class.phi,
            weights[i],
            result.weight_percent[i],
            result.cumulative_passing_percent[i],
        )
        .map_err(|e| AppError::input(format!("Failed to write export CSV row: {e}")))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DEMO_WEIGHTS;
    use crate::engine::analyze;

    #[test]
    fn export_writes_one_row_per_class() {
        let result = analyze(&DEMO_WEIGHTS).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");

        write_results_csv(&path, &DEMO_WEIGHTS, &result).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 1 + CLASS_COUNT);
        assert!(lines[0].starts_with("class,"));
        assert!(lines[1].starts_with("8 mm,8,-3,"));
        assert!(lines[CLASS_COUNT].starts_with("Pan,,5,"));
    }
}
