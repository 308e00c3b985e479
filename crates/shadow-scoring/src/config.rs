//! Scoring engine configuration.

use serde::{Deserialize, Serialize};
use shadow_core::{Error, Result};

/// Complete scoring configuration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Special-state and ambiguity thresholds
    pub classifier: ClassifierThresholds,

    /// Sync rate curve parameters
    pub sync_rate: SyncRateConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierThresholds {
    /// Barrier state when every normalized score is below this
    pub barrier_below: u32,

    /// Chaos state when the population std-dev of the scores is below this
    pub chaos_std_dev_below: f64,

    /// Double-shadow state when |top1 - top2| is below this
    pub double_shadow_gap_below: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncRateConfig {
    /// Lowest reported sync rate (percent)
    pub floor: f64,

    /// Highest reported sync rate (percent)
    pub ceiling: f64,

    /// Top score at which the sigmoid crosses 50%
    pub sigmoid_center: f64,

    /// Top-score distance per sigmoid unit
    pub sigmoid_scale: f64,

    /// Share of the base kept for a flat profile
    pub base_weight: f64,

    /// Extra share added at full polarization
    pub polarization_weight: f64,
}

impl Default for ClassifierThresholds {
    fn default() -> Self {
        Self {
            barrier_below: 30,
            chaos_std_dev_below: 8.0,
            double_shadow_gap_below: 5,
        }
    }
}

impl Default for SyncRateConfig {
    fn default() -> Self {
        Self {
            floor: 47.0,
            ceiling: 99.7,
            sigmoid_center: 40.0,
            sigmoid_scale: 15.0,
            base_weight: 0.7,
            polarization_weight: 0.3,
        }
    }
}

impl ScoringConfig {
    /// Load configuration from file, with `SHADOW_*` environment overrides
    pub fn from_file(path: &str) -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name(path))
            .add_source(Self::environment())
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load from environment variables only
    pub fn from_env() -> Result<Self> {
        let settings = config::Config::builder()
            .add_source(Self::environment())
            .build()?;

        let config: Self = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn environment() -> config::Environment {
        // SHADOW_CLASSIFIER__CHAOS_STD_DEV_BELOW -> classifier.chaos_std_dev_below
        config::Environment::with_prefix("SHADOW")
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    pub fn validate(&self) -> Result<()> {
        let c = &self.classifier;
        if !c.chaos_std_dev_below.is_finite() || c.chaos_std_dev_below < 0.0 {
            return Err(Error::Config(format!(
                "chaos_std_dev_below must be a non-negative number, got {}",
                c.chaos_std_dev_below
            )));
        }

        let s = &self.sync_rate;
        let finite = [
            s.floor,
            s.ceiling,
            s.sigmoid_center,
            s.sigmoid_scale,
            s.base_weight,
            s.polarization_weight,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !finite {
            return Err(Error::Config("sync_rate values must be finite".to_string()));
        }
        if !(0.0..=100.0).contains(&s.floor) || !(0.0..=100.0).contains(&s.ceiling) {
            return Err(Error::Config(format!(
                "sync_rate bounds must lie within 0..=100, got {}..={}",
                s.floor, s.ceiling
            )));
        }
        if s.floor > s.ceiling {
            return Err(Error::Config(format!(
                "sync_rate floor {} exceeds ceiling {}",
                s.floor, s.ceiling
            )));
        }
        if s.sigmoid_scale <= 0.0 {
            return Err(Error::Config(format!(
                "sigmoid_scale must be positive, got {}",
                s.sigmoid_scale
            )));
        }

        Ok(())
    }
}
