//! Particle-size distribution derived from retained weights.

use crate::domain::CLASS_COUNT;
use crate::engine::percentile;
use crate::error::AppError;

/// Derived distribution for one sample.
///
/// Recomputed from scratch on every analysis; never mutated after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    /// Sum of all retained weights (same unit as the input).
    pub total_weight: f64,
    /// Retained weight per class as a percent of the total.
    pub weight_percent: [f64; CLASS_COUNT],
    /// Percent retained in classes `0..=i` (non-decreasing, ends at 100).
    pub cumulative_retained: [f64; CLASS_COUNT],
    /// `100 - cumulative_retained[i]`; the "% finer" values callers chart.
    pub cumulative_passing: [f64; CLASS_COUNT],
    /// Cumulative retained prefixed with 0, aligned to the phi scale
    /// prefixed with the -4 anchor. Used only for percentile interpolation.
    anchored_retained: [f64; CLASS_COUNT + 1],
}

impl Distribution {
    /// Build the distribution, rejecting empty or malformed samples.
    pub fn from_weights(weights: &[f64; CLASS_COUNT]) -> Result<Self, AppError> {
        for (i, &w) in weights.iter().enumerate() {
            if !w.is_finite() || w < 0.0 {
                return Err(AppError::input(format!(
                    "Retained weight for class {} must be a non-negative number (got {w}).",
                    i + 1
                )));
            }
        }

        let total_weight: f64 = weights.iter().sum();
        if total_weight <= 0.0 {
            return Err(AppError::input(
                "Empty sample: at least one retained weight must be greater than zero.",
            ));
        }

        let mut weight_percent = [0.0; CLASS_COUNT];
        let mut cumulative_retained = [0.0; CLASS_COUNT];
        let mut anchored_retained = [0.0; CLASS_COUNT + 1];
        let mut running = 0.0;
        for i in 0..CLASS_COUNT {
            weight_percent[i] = 100.0 * weights[i] / total_weight;
            running += weights[i];
            cumulative_retained[i] = 100.0 * running / total_weight;
            anchored_retained[i + 1] = cumulative_retained[i];
        }

        let mut cumulative_passing = [0.0; CLASS_COUNT];
        for i in 0..CLASS_COUNT {
            cumulative_passing[i] = 100.0 - cumulative_retained[i];
        }

        Ok(Self {
            total_weight,
            weight_percent,
            cumulative_retained,
            cumulative_passing,
            anchored_retained,
        })
    }

    /// Phi value at which the cumulative curve crosses percentile `p`.
    ///
    /// `None` when `p` cannot be bracketed (outside the observed range or a
    /// zero-width bracket); downstream formulas map this to NaN.
    pub fn percentile_phi(&self, p: f64) -> Option<f64> {
        percentile::percentile_phi(&self.anchored_retained, p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DEMO_WEIGHTS;

    #[test]
    fn conservation() {
        let dist = Distribution::from_weights(&DEMO_WEIGHTS).unwrap();
        let sum: f64 = dist.weight_percent.iter().sum();
        assert!((sum - 100.0).abs() < 1e-9);
        assert!((dist.cumulative_retained[CLASS_COUNT - 1] - 100.0).abs() < 1e-9);
        assert!((dist.total_weight - 412.8).abs() < 1e-9);
    }

    #[test]
    fn monotonicity() {
        let dist = Distribution::from_weights(&DEMO_WEIGHTS).unwrap();
        for pair in dist.cumulative_retained.windows(2) {
            assert!(pair[0] <= pair[1]);
        }
        for pair in dist.cumulative_passing.windows(2) {
            assert!(pair[0] >= pair[1]);
        }
    }

    #[test]
    fn known_weight_percents() {
        let dist = Distribution::from_weights(&DEMO_WEIGHTS).unwrap();
        let expected = [
            1.2112, 2.5436, 6.1047, 18.1686, 36.5310, 19.4767, 10.9254, 3.7791, 1.2597,
        ];
        for (got, want) in dist.weight_percent.iter().zip(expected.iter()) {
            assert!((got - want).abs() < 1e-3, "got {got}, want {want}");
        }
    }

    #[test]
    fn rejects_all_zero_sample() {
        let err = Distribution::from_weights(&[0.0; CLASS_COUNT]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn rejects_negative_weight() {
        let mut weights = DEMO_WEIGHTS;
        weights[3] = -1.0;
        assert!(Distribution::from_weights(&weights).is_err());
    }

    #[test]
    fn rejects_non_finite_weight() {
        let mut weights = DEMO_WEIGHTS;
        weights[0] = f64::NAN;
        assert!(Distribution::from_weights(&weights).is_err());
    }

    #[test]
    fn passing_complements_retained() {
        let dist = Distribution::from_weights(&DEMO_WEIGHTS).unwrap();
        for i in 0..CLASS_COUNT {
            let sum = dist.cumulative_retained[i] + dist.cumulative_passing[i];
            assert!((sum - 100.0).abs() < 1e-9);
        }
    }
}
