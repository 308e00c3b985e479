//! Shadow sync rate: the headline 47-99.7% display figure.
//!
//! ```text
//! base = sigmoid((top - center) / scale) * 100
//! raw  = base * (base_weight + polarization * polarization_weight) + noise
//! ```
//!
//! where polarization is `(top - bottom) / 100` and the noise term is a fixed
//! function of the score sum in [-3.5, +3.4]. The result is clamped to the
//! configured bounds and rounded to one decimal. It is a presentation metric,
//! not a statistical confidence.

use crate::classifier::RankedDimension;
use crate::config::SyncRateConfig;

fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

/// Deterministic perturbation derived from the sum of normalized scores
pub fn noise(normalized_sum: u32) -> f64 {
    let bucket = (u64::from(normalized_sum) * 17) % 70;
    bucket as f64 / 10.0 - 3.5
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub struct SyncRateEstimator {
    config: SyncRateConfig,
}

impl SyncRateEstimator {
    pub fn new(config: SyncRateConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SyncRateConfig {
        &self.config
    }

    /// Estimate from a descending ranking and the sum of all normalized scores
    pub fn estimate(&self, ranking: &[RankedDimension], normalized_sum: u32) -> f64 {
        let c = &self.config;
        let top = ranking.first().map_or(0, |r| r.score);
        let bottom = ranking.last().map_or(0, |r| r.score);

        let base = sigmoid((f64::from(top) - c.sigmoid_center) / c.sigmoid_scale) * 100.0;
        let polarization = f64::from(top.saturating_sub(bottom)) / 100.0;

        let raw = base * (c.base_weight + polarization * c.polarization_weight)
            + noise(normalized_sum);

        round_one_decimal(raw.clamp(c.floor, c.ceiling))
    }
}

impl Default for SyncRateEstimator {
    fn default() -> Self {
        Self::new(SyncRateConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::rank;
    use shadow_core::DimensionScores;

    fn estimate(scores: [u32; 6]) -> f64 {
        let normalized = DimensionScores::from_array(scores);
        SyncRateEstimator::default().estimate(&rank(&normalized), normalized.sum())
    }

    #[test]
    fn test_noise_range() {
        assert_eq!(noise(0), -3.5);
        // 239 * 17 = 4063, 4063 mod 70 = 3
        assert!((noise(239) - (-3.2)).abs() < 1e-12);
        for sum in 0..=600 {
            let n = noise(sum);
            assert!((-3.5..=3.4 + 1e-9).contains(&n), "sum={sum} noise={n}");
        }
    }

    #[test]
    fn test_sigmoid_center() {
        assert_eq!(sigmoid(0.0), 0.5);
        assert!(sigmoid(4.0) > 0.98);
    }

    #[test]
    fn test_empty_profile_hits_floor() {
        assert_eq!(estimate([0; 6]), 47.0);
    }

    #[test]
    fn test_known_profiles() {
        assert_eq!(estimate([50, 0, 31, 83, 0, 23]), 89.2);
        assert_eq!(estimate([46, 67, 23, 8, 55, 27]), 78.0);
        assert_eq!(estimate([17, 60, 54, 21, 64, 23]), 66.8);
    }

    #[test]
    fn test_saturated_profile_hits_ceiling() {
        // 98.2 * 1.0 - 1.5 noise stays below the ceiling
        assert_eq!(estimate([100, 0, 0, 0, 0, 0]), 96.7);
        // sum 102 gives +1.9 noise, pushing past 99.7
        assert_eq!(estimate([100, 2, 0, 0, 0, 0]), 99.7);
    }

    #[test]
    fn test_empty_ranking_is_floor() {
        assert_eq!(SyncRateEstimator::default().estimate(&[], 0), 47.0);
    }

    #[test]
    fn test_custom_bounds() {
        let estimator = SyncRateEstimator::new(SyncRateConfig {
            floor: 10.0,
            ceiling: 20.0,
            ..SyncRateConfig::default()
        });
        let normalized = DimensionScores::from_array([100, 0, 0, 0, 0, 0]);
        assert_eq!(estimator.estimate(&rank(&normalized), normalized.sum()), 20.0);
        assert_eq!(estimator.estimate(&[], 0), 10.0);
    }
}
