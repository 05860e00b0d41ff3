//! Percentile-to-phi interpolation.
//!
//! A linear scan over the 10-element anchored cumulative-retained table is
//! all this needs; the table is tiny and monotone, so binary search or a
//! numeric library would buy nothing.

use crate::domain::{CLASS_COUNT, PHI_ANCHOR, SIEVE_CLASSES};

/// Phi scale aligned to the anchored cumulative table: the -4 anchor
/// followed by the nine class phis.
pub(crate) fn anchored_phi_scale() -> [f64; CLASS_COUNT + 1] {
    let mut out = [PHI_ANCHOR; CLASS_COUNT + 1];
    for (i, class) in SIEVE_CLASSES.iter().enumerate() {
        out[i + 1] = class.phi;
    }
    out
}

/// Interpolate the phi value at cumulative-retained percentile `p`.
///
/// Scans for the first adjacent pair bracketing `p` and interpolates
/// linearly between the matching phi values. Returns `None` when no pair
/// brackets `p`, or when the first bracketing pair has zero width (the
/// division would be undefined); callers treat `None` as a missing
/// statistic, never as an error.
pub fn percentile_phi(anchored_retained: &[f64; CLASS_COUNT + 1], p: f64) -> Option<f64> {
    let phi = anchored_phi_scale();
    for i in 0..CLASS_COUNT {
        let lo = anchored_retained[i];
        let hi = anchored_retained[i + 1];
        if lo <= p && p <= hi {
            if hi <= lo {
                return None;
            }
            return Some(phi[i] + (p - lo) * (phi[i + 1] - phi[i]) / (hi - lo));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DEMO_WEIGHTS;
    use crate::engine::Distribution;

    #[test]
    fn known_percentiles() {
        let dist = Distribution::from_weights(&DEMO_WEIGHTS).unwrap();
        let cases = [
            (5.0, -1.7960),
            (16.0, -0.6620),
            (25.0, -0.1667),
            (50.0, 0.6015),
            (75.0, 1.5361),
            (84.0, 1.9982),
            (95.0, 3.0103),
        ];
        for (p, want) in cases {
            let got = dist.percentile_phi(p).unwrap();
            assert!((got - want).abs() < 1e-3, "p{p}: got {got}, want {want}");
        }
    }

    #[test]
    fn interpolation_stays_within_bracketing_phis() {
        let dist = Distribution::from_weights(&DEMO_WEIGHTS).unwrap();
        for p in 1..100 {
            let phi = dist.percentile_phi(p as f64).unwrap();
            assert!((PHI_ANCHOR..=5.0).contains(&phi));
        }
    }

    #[test]
    fn percentile_zero_maps_to_anchor() {
        let dist = Distribution::from_weights(&DEMO_WEIGHTS).unwrap();
        let phi = dist.percentile_phi(0.0).unwrap();
        assert!((phi - PHI_ANCHOR).abs() < 1e-12);
    }

    #[test]
    fn out_of_range_percentile_is_missing() {
        let dist = Distribution::from_weights(&DEMO_WEIGHTS).unwrap();
        assert!(dist.percentile_phi(100.5).is_none());
        assert!(dist.percentile_phi(-1.0).is_none());
    }

    #[test]
    fn zero_width_first_bracket_is_missing() {
        // A table whose first match for p = 0 is the degenerate (0, 0) pair.
        let table = [0.0, 0.0, 20.0, 40.0, 60.0, 80.0, 100.0, 100.0, 100.0, 100.0];
        assert!(percentile_phi(&table, 0.0).is_none());
        // A later, well-formed bracket still interpolates.
        assert!(percentile_phi(&table, 30.0).is_some());
    }

    #[test]
    fn single_loaded_class_interpolates_inside_it() {
        // All weight on the 0.5 mm sieve: the cumulative curve jumps from 0
        // to 100 across phi 0..1, so every percentile lands in that class.
        let mut weights = [0.0; CLASS_COUNT];
        weights[4] = 100.0;
        let dist = Distribution::from_weights(&weights).unwrap();
        let p50 = dist.percentile_phi(50.0).unwrap();
        assert!((p50 - 0.5).abs() < 1e-12);
        let p16 = dist.percentile_phi(16.0).unwrap();
        assert!((p16 - 0.16).abs() < 1e-12);
    }
}
