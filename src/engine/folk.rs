//! Folk & Ward (1957) inclusive graphic statistics.
//!
//! The four formulas are closed-form in the percentile phis. Their
//! denominators are deliberately unguarded: a degenerate sample yields an
//! infinite or NaN statistic that flows through to the result, where
//! presentation decides how to show it. Only the empty-sample case is a
//! hard rejection, and that happens before this module runs.

use crate::domain::{CLASS_COUNT, ModalClass, SIEVE_CLASSES};
use crate::engine::Distribution;

/// All derived statistics for one distribution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FolkStatistics {
    pub p5: f64,
    pub p16: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub p84: f64,
    pub p95: f64,

    /// Graphic mean Mz (phi).
    pub mz: f64,
    /// Inclusive graphic standard deviation / sorting (phi).
    pub sd: f64,
    /// Inclusive graphic skewness.
    pub sk: f64,
    /// Graphic kurtosis.
    pub kg: f64,
    /// Median diameter in millimeters.
    pub d50_mm: f64,

    pub mode: ModalClass,
}

/// Compute the Folk & Ward set for a distribution.
///
/// Missing percentiles enter the formulas as NaN so every dependent
/// statistic degrades to NaN while the rest stay valid.
pub fn folk_statistics(dist: &Distribution) -> FolkStatistics {
    let p = |q: f64| dist.percentile_phi(q).unwrap_or(f64::NAN);

    let p5 = p(5.0);
    let p16 = p(16.0);
    let p25 = p(25.0);
    let p50 = p(50.0);
    let p75 = p(75.0);
    let p84 = p(84.0);
    let p95 = p(95.0);

    FolkStatistics {
        p5,
        p16,
        p25,
        p50,
        p75,
        p84,
        p95,
        mz: graphic_mean(p16, p50, p84),
        sd: inclusive_sorting(p5, p16, p84, p95),
        sk: inclusive_skewness(p5, p16, p50, p84, p95),
        kg: graphic_kurtosis(p5, p25, p75, p95),
        d50_mm: phi_to_mm(p50),
        mode: modal_class(&dist.weight_percent),
    }
}

/// `Mz = (p16 + p50 + p84) / 3`
pub fn graphic_mean(p16: f64, p50: f64, p84: f64) -> f64 {
    (p16 + p50 + p84) / 3.0
}

/// `Sd = (p84 - p16)/4 + (p95 - p5)/6.6`
pub fn inclusive_sorting(p5: f64, p16: f64, p84: f64, p95: f64) -> f64 {
    (p84 - p16) / 4.0 + (p95 - p5) / 6.6
}

/// `Sk = (p16 + p84 - 2*p50)/(2*(p84 - p16)) + (p5 + p95 - 2*p50)/(2*(p95 - p5))`
pub fn inclusive_skewness(p5: f64, p16: f64, p50: f64, p84: f64, p95: f64) -> f64 {
    (p16 + p84 - 2.0 * p50) / (2.0 * (p84 - p16)) + (p5 + p95 - 2.0 * p50) / (2.0 * (p95 - p5))
}

/// `Kg = (p95 - p5)/(2.44*(p75 - p25))`
pub fn graphic_kurtosis(p5: f64, p25: f64, p75: f64, p95: f64) -> f64 {
    (p95 - p5) / (2.44 * (p75 - p25))
}

/// Phi-to-millimeter inverse transform, `size_mm = 2^(-phi)`.
pub fn phi_to_mm(phi: f64) -> f64 {
    2f64.powf(-phi)
}

/// Class holding the single largest weight percent (first index on ties).
///
/// The pan reports the open-ended ">4" label instead of its numeric phi.
fn modal_class(weight_percent: &[f64; CLASS_COUNT]) -> ModalClass {
    let mut max_idx = 0;
    for (i, &wp) in weight_percent.iter().enumerate() {
        if wp > weight_percent[max_idx] {
            max_idx = i;
        }
    }
    if max_idx == CLASS_COUNT - 1 {
        ModalClass::OpenFines
    } else {
        ModalClass::Phi(SIEVE_CLASSES[max_idx].phi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DEMO_WEIGHTS;

    #[test]
    fn known_sample_statistics() {
        let dist = Distribution::from_weights(&DEMO_WEIGHTS).unwrap();
        let stats = folk_statistics(&dist);

        assert!((stats.mz - 0.6459).abs() < 1e-3);
        assert!((stats.sd - 1.3933).abs() < 1e-3);
        assert!((stats.sk - 0.0262).abs() < 1e-3);
        assert!((stats.kg - 1.1568).abs() < 1e-3);
        assert!((stats.d50_mm - 0.6591).abs() < 1e-3);
        assert_eq!(stats.mode, ModalClass::Phi(1.0));
    }

    #[test]
    fn equal_spread_percentiles_blow_up_only_their_own_statistic() {
        // p84 == p16: the skewness denominator is zero. The mean shares the
        // same percentiles but has no such denominator and must stay finite.
        let sk = inclusive_skewness(-1.0, 0.5, 0.5, 0.5, 2.0);
        assert!(!sk.is_finite());
        let mz = graphic_mean(0.5, 0.5, 0.5);
        assert!(mz.is_finite());
        assert!((mz - 0.5).abs() < 1e-12);

        // p75 == p25 breaks kurtosis the same way.
        let kg = graphic_kurtosis(-1.0, 0.3, 0.3, 2.0);
        assert!(!kg.is_finite());
    }

    #[test]
    fn missing_percentile_propagates_as_nan() {
        let sd = inclusive_sorting(f64::NAN, -0.5, 1.5, 2.5);
        assert!(sd.is_nan());
        let sk = inclusive_skewness(f64::NAN, -0.5, 0.5, 1.5, 2.5);
        assert!(sk.is_nan());
    }

    #[test]
    fn phi_to_mm_round_trips_the_scale() {
        assert!((phi_to_mm(0.0) - 1.0).abs() < 1e-12);
        assert!((phi_to_mm(1.0) - 0.5).abs() < 1e-12);
        assert!((phi_to_mm(-3.0) - 8.0).abs() < 1e-12);
    }

    #[test]
    fn sorting_is_scale_symmetric() {
        // A symmetric widening of the percentile spread doubles Sd.
        let narrow = inclusive_sorting(-1.0, -0.5, 0.5, 1.0);
        let wide = inclusive_sorting(-2.0, -1.0, 1.0, 2.0);
        assert!((wide - 2.0 * narrow).abs() < 1e-12);
    }
}
