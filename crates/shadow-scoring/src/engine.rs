//! Scoring engine: answers in, archetype classification out.

use serde::Serialize;
use shadow_core::{AnswerSet, Archetype, DimensionScores, Question, Result, QUESTIONS};

use crate::classifier::{ProfileClassifier, RankedDimension};
use crate::config::ScoringConfig;
use crate::normalizer::{compute_dimension_ceilings, dimension_ceilings, normalize};
use crate::sync_rate::SyncRateEstimator;

/// Complete result of scoring one answer set
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreResult {
    /// Summed option weights per dimension
    pub raw_scores: DimensionScores,
    /// Raw scores mapped onto 0..=100
    pub normalized_scores: DimensionScores,
    /// Dimensions by normalized score, highest first
    pub dimensions: Vec<RankedDimension>,
    pub primary_archetype: &'static Archetype,
    /// Second archetype of a double-shadow profile
    pub secondary_archetype: Option<&'static Archetype>,
    pub is_chaos: bool,
    pub is_barrier: bool,
    /// Percent, one decimal place
    pub shadow_sync_rate: f64,
}

/// Sum the weights of every chosen option.
///
/// Unanswered questions and labels that match no option add nothing.
pub fn accumulate_raw(questions: &[Question], answers: &AnswerSet) -> DimensionScores {
    let mut raw = DimensionScores::zero();

    for q in questions {
        let Some(label) = answers.get(q.id) else {
            continue;
        };
        let Some(option) = q.option(label) else {
            tracing::trace!(question = q.id, label, "Ignoring unknown option label");
            continue;
        };
        for &(dimension, weight) in option.weights {
            *raw.get_mut(dimension) += weight;
        }
    }

    for (id, label) in answers.iter() {
        if !questions.iter().any(|q| q.id == id) {
            tracing::trace!(question = id, label, "Ignoring answer to unknown question");
        }
    }

    raw
}

/// Pure, deterministic scorer. Cheap to construct; safe to share across
/// threads.
pub struct ScoringEngine {
    questions: &'static [Question],
    ceilings: DimensionScores,
    classifier: ProfileClassifier,
    estimator: SyncRateEstimator,
}

impl ScoringEngine {
    /// Engine over the built-in catalogs with validated configuration
    pub fn with_config(config: ScoringConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(
            QUESTIONS,
            *dimension_ceilings(),
            ProfileClassifier::new(config.classifier),
            SyncRateEstimator::new(config.sync_rate),
        ))
    }

    /// Engine over a custom question catalog and classifier
    pub fn with_questions(
        questions: &'static [Question],
        classifier: ProfileClassifier,
        estimator: SyncRateEstimator,
    ) -> Self {
        let ceilings = compute_dimension_ceilings(questions);
        Self::from_parts(questions, ceilings, classifier, estimator)
    }

    fn from_parts(
        questions: &'static [Question],
        ceilings: DimensionScores,
        classifier: ProfileClassifier,
        estimator: SyncRateEstimator,
    ) -> Self {
        Self {
            questions,
            ceilings,
            classifier,
            estimator,
        }
    }

    pub fn questions(&self) -> &'static [Question] {
        self.questions
    }

    pub fn ceilings(&self) -> &DimensionScores {
        &self.ceilings
    }

    pub fn score(&self, answers: &AnswerSet) -> ScoreResult {
        let raw_scores = accumulate_raw(self.questions, answers);
        let normalized_scores = normalize(&raw_scores, &self.ceilings);
        let classification = self.classifier.classify(&normalized_scores);
        let shadow_sync_rate = self
            .estimator
            .estimate(&classification.ranking, normalized_scores.sum());

        tracing::debug!(
            answered = answers.len(),
            primary = classification.primary.id,
            secondary = ?classification.secondary.map(|a| a.id),
            chaos = classification.is_chaos,
            barrier = classification.is_barrier,
            sync_rate = shadow_sync_rate,
            "Scored answer set"
        );

        ScoreResult {
            raw_scores,
            normalized_scores,
            dimensions: classification.ranking,
            primary_archetype: classification.primary,
            secondary_archetype: classification.secondary,
            is_chaos: classification.is_chaos,
            is_barrier: classification.is_barrier,
            shadow_sync_rate,
        }
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::from_parts(
            QUESTIONS,
            *dimension_ceilings(),
            ProfileClassifier::default(),
            SyncRateEstimator::default(),
        )
    }
}

/// Score against the built-in catalogs and default configuration
pub fn score(answers: &AnswerSet) -> ScoreResult {
    ScoringEngine::default().score(answers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use shadow_core::{AnswerOption, Category, Dimension, Stage};

    // Envy is never weighted, so its ceiling is zero
    static NO_ENVY: [Question; 2] = [
        Question {
            id: 1,
            stage: Stage::Low,
            category: Category::Workplace,
            scenario: "",
            options: &[
                AnswerOption {
                    label: "A",
                    text: "",
                    weights: &[(Dimension::Control, 2)],
                },
                AnswerOption {
                    label: "B",
                    text: "",
                    weights: &[(Dimension::Aggression, 2)],
                },
                AnswerOption {
                    label: "C",
                    text: "",
                    weights: &[(Dimension::Masking, 1), (Dimension::Detachment, 1)],
                },
                AnswerOption {
                    label: "D",
                    text: "",
                    weights: &[(Dimension::Destruction, 3)],
                },
            ],
        },
        Question {
            id: 2,
            stage: Stage::Low,
            category: Category::Social,
            scenario: "",
            options: &[
                AnswerOption {
                    label: "A",
                    text: "",
                    weights: &[(Dimension::Control, 1), (Dimension::Masking, 2)],
                },
                AnswerOption {
                    label: "B",
                    text: "",
                    weights: &[(Dimension::Detachment, 2)],
                },
                AnswerOption {
                    label: "C",
                    text: "",
                    weights: &[(Dimension::Aggression, 1)],
                },
                AnswerOption {
                    label: "D",
                    text: "",
                    weights: &[(Dimension::Destruction, 1)],
                },
            ],
        },
    ];

    fn all(label: &str) -> AnswerSet {
        QUESTIONS.iter().map(|q| (q.id, label)).collect()
    }

    #[test]
    fn test_empty_answers() {
        let result = score(&AnswerSet::new());

        assert_eq!(result.raw_scores, DimensionScores::zero());
        assert_eq!(result.normalized_scores, DimensionScores::zero());
        assert!(result.is_barrier);
        assert!(result.is_chaos);
        assert!(result.primary_archetype.is_chaos());
        assert!(result.secondary_archetype.is_none());
        assert_eq!(result.shadow_sync_rate, 47.0);
    }

    #[test]
    fn test_all_a() {
        let result = score(&all("A"));

        assert_eq!(result.raw_scores, DimensionScores::new(12, 0, 4, 20, 0, 5));
        assert_eq!(result.normalized_scores, DimensionScores::new(50, 0, 31, 83, 0, 23));
        assert_eq!(result.dimensions[0].dimension, Dimension::Masking);
        assert_eq!(result.primary_archetype.id, "flawless-counterfeit");
        assert!(result.secondary_archetype.is_none());
        assert!(!result.is_chaos);
        assert!(!result.is_barrier);
        assert_eq!(result.shadow_sync_rate, 89.2);
    }

    #[test]
    fn test_all_b() {
        let result = score(&all("B"));

        assert_eq!(result.normalized_scores, DimensionScores::new(46, 67, 23, 8, 55, 27));
        assert_eq!(result.primary_archetype.id, "sweet-avenger");
        assert_eq!(result.shadow_sync_rate, 78.0);
    }

    #[test]
    fn test_all_c() {
        let result = score(&all("C"));

        assert_eq!(result.normalized_scores, DimensionScores::new(38, 27, 62, 21, 0, 41));
        assert_eq!(result.primary_archetype.id, "mirror-gazer");
        assert_eq!(result.shadow_sync_rate, 74.8);
    }

    #[test]
    fn test_all_d_is_double_shadow() {
        let result = score(&all("D"));

        assert_eq!(result.raw_scores, DimensionScores::new(4, 9, 7, 5, 7, 5));
        assert_eq!(result.primary_archetype.id, "beautiful-martyr");
        assert_eq!(result.secondary_archetype.map(|a| a.id), Some("sweet-avenger"));
        assert_eq!(result.shadow_sync_rate, 66.8);
    }

    #[test]
    fn test_mixed_answers() {
        let answers: AnswerSet = (1u32..=9).zip("ABCDABCDA".chars().map(String::from)).collect();
        let result = score(&answers);

        assert_eq!(result.normalized_scores, DimensionScores::new(33, 20, 38, 33, 9, 55));
        assert_eq!(result.primary_archetype.id, "island-keeper");
        assert_eq!(result.shadow_sync_rate, 62.4);
    }

    #[test]
    fn test_unknown_labels_and_ids_are_ignored() {
        let answers = AnswerSet::new()
            .with_answer(1, "A")
            .with_answer(2, "Z")
            .with_answer(99, "A");
        let result = score(&answers);

        assert_eq!(result.raw_scores, DimensionScores::new(2, 0, 0, 3, 0, 0));
        assert!(result.is_barrier);
        assert!(result.is_chaos);
        assert_eq!(result.shadow_sync_rate, 47.0);
    }

    #[test]
    fn test_deterministic() {
        let engine = ScoringEngine::default();
        let answers = all("D");
        assert_eq!(engine.score(&answers), engine.score(&answers));
    }

    #[test]
    fn test_with_config_validates() {
        let mut config = ScoringConfig::default();
        config.sync_rate.floor = 150.0;
        assert!(ScoringEngine::with_config(config).is_err());

        let engine = ScoringEngine::with_config(ScoringConfig::default()).unwrap();
        assert_eq!(engine.ceilings(), dimension_ceilings());
    }

    #[test]
    fn test_custom_catalog_with_zero_ceiling() {
        let engine = ScoringEngine::with_questions(
            &NO_ENVY,
            ProfileClassifier::default(),
            SyncRateEstimator::default(),
        );
        assert_eq!(engine.questions().len(), 2);
        assert_eq!(engine.ceilings(), &DimensionScores::new(3, 3, 0, 3, 4, 3));

        let answers = AnswerSet::new().with_answer(1, "A").with_answer(2, "A");
        let result = engine.score(&answers);

        assert_eq!(result.raw_scores, DimensionScores::new(3, 0, 0, 2, 0, 0));
        // 2/3 rounds to 67; envy divides by 1, not 0
        assert_eq!(result.normalized_scores, DimensionScores::new(100, 0, 0, 67, 0, 0));
        assert_eq!(result.primary_archetype.id, "patient-puppeteer");
        assert!(result.secondary_archetype.is_none());
        assert!((47.0..=99.7).contains(&result.shadow_sync_rate));
    }

    #[test]
    fn test_custom_catalog_empty_answers() {
        let engine = ScoringEngine::with_questions(
            &NO_ENVY,
            ProfileClassifier::default(),
            SyncRateEstimator::default(),
        );
        let result = engine.score(&AnswerSet::new());

        assert_eq!(result.normalized_scores, DimensionScores::zero());
        assert!(result.is_chaos);
        assert!(result.is_barrier);
        assert_eq!(result.shadow_sync_rate, 47.0);
    }

    #[test]
    fn test_result_serializes() {
        let result = score(&all("A"));
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["primary_archetype"]["id"], "flawless-counterfeit");
        assert_eq!(json["normalized_scores"]["masking"], 83);
        assert_eq!(json["dimensions"][0]["dimension"], "masking");
        assert!(json["secondary_archetype"].is_null());
        assert_eq!(json["shadow_sync_rate"], 89.2);
    }
}
