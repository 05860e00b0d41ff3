//! Weight parsing and CSV ingest.
//!
//! Parsing is the data-entry surface's job, not the engine's: whatever the
//! user types or pastes is reduced to non-negative numbers here (unparsable,
//! empty, or negative entries become 0), and the engine only ever sees
//! already-numeric input.

use std::fs;
use std::path::Path;

use crate::domain::CLASS_COUNT;
use crate::error::AppError;

/// Parse one weight entry; anything that is not a non-negative finite
/// number becomes 0.
pub fn parse_weight(raw: &str) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() && v >= 0.0 => v,
        _ => 0.0,
    }
}

/// Split bulk-pasted text (a spreadsheet column or row) into entries.
///
/// Splits on newlines and tabs, drops empty fragments.
pub fn split_bulk(text: &str) -> Vec<&str> {
    text.split(['\n', '\r', '\t'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

/// Read exactly nine weights from a CSV/text file.
///
/// Accepts values separated by newlines, commas, or tabs. The value count
/// is validated strictly (a file is deliberate input, unlike a paste), but
/// individual values still follow the entry rule above.
pub fn read_weights_csv(path: &Path) -> Result<[f64; CLASS_COUNT], AppError> {
    let text = fs::read_to_string(path)
        .map_err(|e| AppError::input(format!("Failed to read weights file '{}': {e}", path.display())))?;

    let tokens: Vec<&str> = text
        .split(['\n', '\r', '\t', ','])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();

    if tokens.len() != CLASS_COUNT {
        return Err(AppError::input(format!(
            "Expected {CLASS_COUNT} weights in '{}' (coarse to fine, pan last), found {}.",
            path.display(),
            tokens.len()
        )));
    }

    let mut weights = [0.0; CLASS_COUNT];
    for (i, token) in tokens.iter().enumerate() {
        weights[i] = parse_weight(token);
    }
    Ok(weights)
}

/// Validate an inline weight list (e.g. from `--weights`).
///
/// Unlike keyed/pasted entry, explicit values are checked strictly.
pub fn weights_from_list(values: &[f64]) -> Result<[f64; CLASS_COUNT], AppError> {
    if values.len() != CLASS_COUNT {
        return Err(AppError::input(format!(
            "Expected {CLASS_COUNT} weights (coarse to fine, pan last), got {}.",
            values.len()
        )));
    }
    let mut weights = [0.0; CLASS_COUNT];
    for (i, &v) in values.iter().enumerate() {
        if !v.is_finite() || v < 0.0 {
            return Err(AppError::input(format!(
                "Weight {} must be a non-negative number (got {v}).",
                i + 1
            )));
        }
        weights[i] = v;
    }
    Ok(weights)
}
