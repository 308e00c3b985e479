//! Dimension ceilings and 0-100 normalization.
//!
//! The ceiling of a dimension is the best score a respondent could reach on
//! it: each question contributes the largest weight any one of its options
//! gives that dimension.

use std::sync::OnceLock;

use shadow_core::{Dimension, DimensionScores, Question, QUESTIONS};

/// Upper end of the normalized scale
pub const NORMALIZED_MAX: u32 = 100;

static CEILINGS: OnceLock<DimensionScores> = OnceLock::new();

/// Best attainable raw score per dimension for `questions`
pub fn compute_dimension_ceilings(questions: &[Question]) -> DimensionScores {
    let mut ceilings = DimensionScores::zero();

    for q in questions {
        for dimension in Dimension::ALL {
            let best = q
                .options
                .iter()
                .map(|o| o.weight(dimension))
                .max()
                .unwrap_or(0);
            *ceilings.get_mut(dimension) += best;
        }
    }

    ceilings
}

/// Ceilings of the static question catalog, computed once per process
pub fn dimension_ceilings() -> &'static DimensionScores {
    CEILINGS.get_or_init(|| compute_dimension_ceilings(QUESTIONS))
}

/// Map raw totals onto 0..=100.
///
/// A zero ceiling is treated as 1. Results are clamped to 100 because the
/// per-question ceiling does not bound raw totals built from other catalogs.
pub fn normalize(raw: &DimensionScores, ceilings: &DimensionScores) -> DimensionScores {
    let mut normalized = DimensionScores::zero();

    for (dimension, value) in raw.iter() {
        let ceiling = ceilings.get(dimension).max(1);
        let scaled = (f64::from(value) / f64::from(ceiling) * 100.0).round() as u32;
        normalized.set(dimension, scaled.min(NORMALIZED_MAX));
    }

    normalized
}
