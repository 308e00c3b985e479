//! Catalog lookups and invariant checks.
//!
//! A validation failure on the built-in catalogs is a data defect, not a
//! runtime condition.

use std::collections::HashSet;

use crate::archetype::{Archetype, ARCHETYPES};
use crate::dimension::Dimension;
use crate::error::{Error, Result};
use crate::question::{Question, OPTIONS_PER_QUESTION, QUESTIONS};

pub fn question(id: u32) -> Option<&'static Question> {
    QUESTIONS.iter().find(|q| q.id == id)
}

pub fn archetype_by_id(id: &str) -> Option<&'static Archetype> {
    ARCHETYPES.iter().find(|a| a.id == id)
}

/// Archetypes whose primary is `primary`, in catalog order
pub fn archetypes_for_primary(
    archetypes: &'static [Archetype],
    primary: Dimension,
) -> impl Iterator<Item = &'static Archetype> {
    archetypes.iter().filter(move |a| a.primary == primary)
}

/// Check both static catalogs
pub fn validate_catalog() -> Result<()> {
    validate_questions(QUESTIONS)?;
    validate_archetypes(ARCHETYPES)
}

pub fn validate_questions(questions: &[Question]) -> Result<()> {
    let mut ids = HashSet::new();

    for q in questions {
        if !ids.insert(q.id) {
            return Err(Error::DuplicateQuestion { id: q.id });
        }

        if q.options.len() != OPTIONS_PER_QUESTION {
            return Err(Error::OptionCount {
                question: q.id,
                expected: OPTIONS_PER_QUESTION,
                actual: q.options.len(),
            });
        }

        let mut labels = HashSet::new();
        for opt in q.options {
            if !labels.insert(opt.label) {
                return Err(Error::DuplicateOptionLabel {
                    question: q.id,
                    label: opt.label.to_string(),
                });
            }

            if let Some(&(dimension, _)) = opt.weights.iter().find(|(_, w)| *w == 0) {
                return Err(Error::EmptyWeight {
                    question: q.id,
                    label: opt.label.to_string(),
                    dimension,
                });
            }
        }
    }

    Ok(())
}

pub fn validate_archetypes(archetypes: &[Archetype]) -> Result<()> {
    let mut ids = HashSet::new();

    for a in archetypes {
        if !ids.insert(a.id) {
            return Err(Error::DuplicateArchetype(a.id.to_string()));
        }
        if a.primary == a.secondary {
            return Err(Error::SelfPairedArchetype(a.id.to_string()));
        }
    }

    for dimension in Dimension::ALL {
        if !archetypes.iter().any(|a| a.primary == dimension) {
            return Err(Error::UncoveredPrimary(dimension));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::{AnswerOption, Category, Stage};

    #[test]
    fn test_static_catalog_is_valid() {
        validate_catalog().unwrap();
    }

    #[test]
    fn test_lookups() {
        assert_eq!(question(5).map(|q| q.id), Some(5));
        assert!(question(10).is_none());

        let judge = archetype_by_id("silent-judge").unwrap();
        assert_eq!(judge.key(), (Dimension::Control, Dimension::Detachment));
        assert!(archetype_by_id("chaos-shadow").is_none());
    }

    #[test]
    fn test_archetypes_for_primary() {
        let control: Vec<_> = archetypes_for_primary(ARCHETYPES, Dimension::Control)
            .map(|a| a.id)
            .collect();
        assert_eq!(
            control,
            vec![
                "silent-judge",
                "patient-puppeteer",
                "undercurrent",
                "cracked-perfectionist"
            ]
        );

        assert_eq!(archetypes_for_primary(ARCHETYPES, Dimension::Envy).count(), 1);
    }

    const OPT: AnswerOption = AnswerOption {
        label: "A",
        text: "",
        weights: &[(Dimension::Envy, 1)],
    };

    fn question_with(id: u32, options: &'static [AnswerOption]) -> Question {
        Question {
            id,
            stage: Stage::Low,
            category: Category::Social,
            scenario: "",
            options,
        }
    }

    #[test]
    fn test_rejects_bad_questions() {
        let short = [question_with(1, &[OPT])];
        assert!(matches!(
            validate_questions(&short),
            Err(Error::OptionCount { question: 1, expected: 4, actual: 1 })
        ));

        let dup_labels = [question_with(2, &[OPT, OPT, OPT, OPT])];
        assert!(matches!(
            validate_questions(&dup_labels),
            Err(Error::DuplicateOptionLabel { question: 2, .. })
        ));

        let dup_ids = [QUESTIONS[0], QUESTIONS[0]];
        assert!(matches!(
            validate_questions(&dup_ids),
            Err(Error::DuplicateQuestion { id: 1 })
        ));
    }

    #[test]
    fn test_rejects_zero_weight() {
        const ZERO: [AnswerOption; 4] = [
            AnswerOption {
                label: "A",
                text: "",
                weights: &[(Dimension::Control, 0)],
            },
            AnswerOption {
                label: "B",
                text: "",
                weights: &[],
            },
            AnswerOption {
                label: "C",
                text: "",
                weights: &[],
            },
            AnswerOption {
                label: "D",
                text: "",
                weights: &[],
            },
        ];
        let qs = [question_with(3, &ZERO)];
        assert!(matches!(
            validate_questions(&qs),
            Err(Error::EmptyWeight { question: 3, dimension: Dimension::Control, .. })
        ));
    }

    #[test]
    fn test_rejects_bad_archetypes() {
        let mut twin = ARCHETYPES[0];
        twin.secondary = twin.primary;
        assert!(matches!(
            validate_archetypes(&[twin]),
            Err(Error::SelfPairedArchetype(_))
        ));

        let dup = [ARCHETYPES[0], ARCHETYPES[0]];
        assert!(matches!(
            validate_archetypes(&dup),
            Err(Error::DuplicateArchetype(_))
        ));

        let only_control: Vec<_> = ARCHETYPES
            .iter()
            .copied()
            .filter(|a| a.primary == Dimension::Control)
            .collect();
        assert!(matches!(
            validate_archetypes(&only_control),
            Err(Error::UncoveredPrimary(Dimension::Aggression))
        ));
    }
}
