//! Respondent answer sets.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::Result;
use crate::question::Question;

/// Question id → chosen option label.
///
/// Supplied once per quiz session. Partial sets are allowed: unanswered
/// questions simply contribute nothing to the score.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnswerSet(BTreeMap<u32, String>);

impl AnswerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode from a JSON object such as `{"1": "A", "2": "C"}`
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and decode a JSON answer file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Builder-style insert
    pub fn with_answer(mut self, question_id: u32, label: impl Into<String>) -> Self {
        self.insert(question_id, label);
        self
    }

    /// Record an answer, replacing any earlier choice for the same question
    pub fn insert(&mut self, question_id: u32, label: impl Into<String>) -> Option<String> {
        self.0.insert(question_id, label.into())
    }

    pub fn get(&self, question_id: u32) -> Option<&str> {
        self.0.get(&question_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, &str)> {
        self.0.iter().map(|(id, label)| (*id, label.as_str()))
    }

    /// True when every question of the catalog has an entry
    pub fn is_complete(&self, questions: &[Question]) -> bool {
        questions.iter().all(|q| self.0.contains_key(&q.id))
    }

    /// Ids of catalog questions without an entry, in catalog order
    pub fn missing(&self, questions: &[Question]) -> Vec<u32> {
        questions
            .iter()
            .map(|q| q.id)
            .filter(|id| !self.0.contains_key(id))
            .collect()
    }
}

impl<L: Into<String>> FromIterator<(u32, L)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (u32, L)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(id, l)| (id, l.into())).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::question::QUESTIONS;

    #[test]
    fn test_json_object_keys_decode_as_ids() {
        let answers: AnswerSet = serde_json::from_str(r#"{"1": "A", "7": "C"}"#).unwrap();
        assert_eq!(answers.len(), 2);
        assert_eq!(answers.get(1), Some("A"));
        assert_eq!(answers.get(7), Some("C"));
        assert_eq!(answers.get(2), None);
    }

    #[test]
    fn test_from_json() {
        let answers = AnswerSet::from_json(r#"{"2": "D"}"#).unwrap();
        assert_eq!(answers, AnswerSet::new().with_answer(2, "D"));
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        assert!(matches!(
            AnswerSet::from_json(r#"{"1": 5}"#),
            Err(Error::Serialization(_))
        ));
        assert!(matches!(
            AnswerSet::from_json("not json"),
            Err(Error::Serialization(_))
        ));
        // keys must be question ids
        assert!(matches!(
            AnswerSet::from_json(r#"{"one": "A"}"#),
            Err(Error::Serialization(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = std::env::temp_dir().join("shadow-core-no-such-answers.json");
        assert!(matches!(AnswerSet::from_path(&path), Err(Error::Io(_))));
    }

    #[test]
    fn test_completeness() {
        let partial = AnswerSet::new().with_answer(1, "A").with_answer(3, "B");
        assert!(!partial.is_complete(QUESTIONS));
        assert_eq!(partial.missing(QUESTIONS), vec![2, 4, 5, 6, 7, 8, 9]);

        let full: AnswerSet = QUESTIONS.iter().map(|q| (q.id, "D")).collect();
        assert!(full.is_complete(QUESTIONS));
        assert!(full.missing(QUESTIONS).is_empty());
    }

    #[test]
    fn test_insert_replaces() {
        let mut answers = AnswerSet::new();
        assert_eq!(answers.insert(4, "A"), None);
        assert_eq!(answers.insert(4, "B"), Some("A".to_string()));
        assert_eq!(answers.get(4), Some("B"));
    }
}
