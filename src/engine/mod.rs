//! Grain-size statistical engine.
//!
//! Pure function of its input: sieve retained weights in, particle-size
//! distribution plus Folk & Ward (1957) statistics out. No I/O, no caching,
//! no shared state; safe to call from any number of threads.

pub mod distribution;
pub mod folk;
pub mod percentile;

pub use distribution::Distribution;
pub use folk::{FolkStatistics, folk_statistics};

use crate::domain::{AnalysisResult, CLASS_COUNT, phi_points};
use crate::error::AppError;

/// Run the full analysis for one sample of retained weights (coarse to fine,
/// index-aligned to the sieve catalog).
///
/// Rejects the sample when the total weight is zero; degenerate statistics
/// (unbracketable percentile, zero-width denominator) degrade to non-finite
/// values in the result instead of failing the whole analysis.
pub fn analyze(weights: &[f64; CLASS_COUNT]) -> Result<AnalysisResult, AppError> {
    let dist = Distribution::from_weights(weights)?;
    let stats = folk_statistics(&dist);

    Ok(AnalysisResult {
        mz: format!("{:.2}", stats.mz),
        sd: format!("{:.2}", stats.sd),
        sk: format!("{:.2}", stats.sk),
        kg: format!("{:.2}", stats.kg),
        d50_mm: format!("{:.3}", stats.d50_mm),
        p50: stats.p50,
        mode: stats.mode,
        weight_percent: dist.weight_percent,
        cumulative_passing_percent: dist.cumulative_passing,
        phi_points: phi_points(),
        p5: stats.p5,
        p16: stats.p16,
        p84: stats.p84,
        p95: stats.p95,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DEMO_WEIGHTS;
    use crate::domain::ModalClass;

    #[test]
    fn analyze_known_sample() {
        let result = analyze(&DEMO_WEIGHTS).unwrap();

        assert_eq!(result.mz, "0.65");
        assert_eq!(result.sd, "1.39");
        assert_eq!(result.sk, "0.03");
        assert_eq!(result.kg, "1.16");
        assert_eq!(result.d50_mm, "0.659");
        assert!((result.p50 - 0.6015).abs() < 1e-3);
        assert_eq!(result.mode, ModalClass::Phi(1.0));
    }

    #[test]
    fn analyze_rejects_empty_sample() {
        let err = analyze(&[0.0; CLASS_COUNT]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn analyze_is_idempotent() {
        let a = analyze(&DEMO_WEIGHTS).unwrap();
        let b = analyze(&DEMO_WEIGHTS).unwrap();
        // Bit-identical output: pure function, no hidden state.
        assert_eq!(a, b);
    }

    #[test]
    fn modal_tie_breaks_on_first_class() {
        let mut weights = [0.0; CLASS_COUNT];
        weights[0] = 10.0;
        weights[1] = 10.0;
        weights[4] = 5.0;
        let result = analyze(&weights).unwrap();
        assert_eq!(result.mode, ModalClass::Phi(-3.0));
    }

    #[test]
    fn modal_pan_reports_open_label() {
        let mut weights = [1.0; CLASS_COUNT];
        weights[8] = 50.0;
        let result = analyze(&weights).unwrap();
        assert_eq!(result.mode, ModalClass::OpenFines);
        assert_eq!(result.mode.to_string(), ">4");
    }

    #[test]
    fn d50_matches_inverse_phi_transform() {
        let result = analyze(&DEMO_WEIGHTS).unwrap();
        let expected = format!("{:.3}", 2f64.powf(-result.p50));
        assert_eq!(result.d50_mm, expected);
    }
}
