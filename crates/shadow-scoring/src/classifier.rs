//! Profile classification: ranking, special states and archetype resolution.
//!
//! ## Resolution order
//!
//! 1. Rank dimensions by normalized score, descending. Ties keep dimension
//!    declaration order.
//! 2. **Barrier**: every score below the barrier threshold. Reported as a
//!    flag only; resolution continues.
//! 3. **Chaos**: population std-dev below the chaos threshold. Resolves to
//!    the chaos sentinel and stops.
//! 4. Exact `(top1, top2)` match, else best fit rooted at `top1`.
//! 5. **Double shadow**: `|top1 - top2|` below the gap threshold adds a
//!    second archetype, best fit rooted at `top2`, unless it equals the first.
//!
//! Best fit among archetypes sharing a primary picks the one whose own
//! secondary scores highest in the respondent's profile; equal scores go to
//! the earlier catalog entry.

use std::cmp::Reverse;

use serde::Serialize;
use shadow_core::{
    archetypes_for_primary, Archetype, Dimension, DimensionScores, ARCHETYPES, CHAOS_ARCHETYPE,
};

use crate::config::ClassifierThresholds;

/// A dimension with its normalized score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RankedDimension {
    pub dimension: Dimension,
    pub score: u32,
}

/// Outcome of classifying one normalized profile
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub primary: &'static Archetype,
    pub secondary: Option<&'static Archetype>,
    pub is_chaos: bool,
    pub is_barrier: bool,
    /// All six dimensions, highest score first
    pub ranking: Vec<RankedDimension>,
}

impl Classification {
    pub fn top(&self) -> RankedDimension {
        self.ranking[0]
    }

    pub fn runner_up(&self) -> RankedDimension {
        self.ranking[1]
    }

    pub fn bottom(&self) -> RankedDimension {
        self.ranking[self.ranking.len() - 1]
    }

    /// True when two archetypes were resolved
    pub fn is_double_shadow(&self) -> bool {
        self.secondary.is_some()
    }
}

/// Sort dimensions by score, descending, keeping declaration order on ties
pub fn rank(normalized: &DimensionScores) -> Vec<RankedDimension> {
    let mut ranking: Vec<RankedDimension> = normalized
        .iter()
        .map(|(dimension, score)| RankedDimension { dimension, score })
        .collect();

    // stable: equal scores stay in declaration order
    ranking.sort_by_key(|r| Reverse(r.score));
    ranking
}

/// Population standard deviation of the six scores
pub fn std_dev(normalized: &DimensionScores) -> f64 {
    let values = normalized.to_array().map(f64::from);
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    variance.sqrt()
}

/// Among archetypes with primary `root`, the one whose secondary scores
/// highest in `normalized`. First catalog entry wins ties.
pub fn best_fit(
    archetypes: &'static [Archetype],
    root: Dimension,
    normalized: &DimensionScores,
) -> Option<&'static Archetype> {
    archetypes_for_primary(archetypes, root)
        .min_by_key(|a| Reverse(normalized.get(a.secondary)))
}

pub struct ProfileClassifier {
    thresholds: ClassifierThresholds,
    archetypes: &'static [Archetype],
}

impl ProfileClassifier {
    pub fn new(thresholds: ClassifierThresholds) -> Self {
        Self::with_catalog(thresholds, ARCHETYPES)
    }

    /// Classify against a catalog other than the built-in one
    pub fn with_catalog(
        thresholds: ClassifierThresholds,
        archetypes: &'static [Archetype],
    ) -> Self {
        Self {
            thresholds,
            archetypes,
        }
    }

    pub fn thresholds(&self) -> &ClassifierThresholds {
        &self.thresholds
    }

    pub fn classify(&self, normalized: &DimensionScores) -> Classification {
        let ranking = rank(normalized);
        let top1 = ranking[0];
        let top2 = ranking[1];

        let is_barrier = ranking
            .iter()
            .all(|r| r.score < self.thresholds.barrier_below);
        let is_chaos = std_dev(normalized) < self.thresholds.chaos_std_dev_below;

        if is_chaos {
            return Classification {
                primary: &CHAOS_ARCHETYPE,
                secondary: None,
                is_chaos,
                is_barrier,
                ranking,
            };
        }

        let primary = self
            .exact_match(top1.dimension, top2.dimension)
            .or_else(|| best_fit(self.archetypes, top1.dimension, normalized))
            .unwrap_or_else(|| self.fallback());

        let gap = top1.score.abs_diff(top2.score);
        let secondary = if gap < self.thresholds.double_shadow_gap_below {
            best_fit(self.archetypes, top2.dimension, normalized)
                .filter(|a| a.id != primary.id)
        } else {
            None
        };

        Classification {
            primary,
            secondary,
            is_chaos,
            is_barrier,
            ranking,
        }
    }

    fn exact_match(&self, primary: Dimension, secondary: Dimension) -> Option<&'static Archetype> {
        self.archetypes
            .iter()
            .find(|a| a.primary == primary && a.secondary == secondary)
    }

    fn fallback(&self) -> &'static Archetype {
        tracing::warn!("No archetype covers the top dimension; using first catalog entry");
        self.archetypes.first().unwrap_or(&CHAOS_ARCHETYPE)
    }
}

impl Default for ProfileClassifier {
    fn default() -> Self {
        Self::new(ClassifierThresholds::default())
    }
}
