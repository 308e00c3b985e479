//! Error types for the shadow archetype system.
//!
//! Scoring itself is infallible. These errors surface only at the edges:
//! catalog validation, configuration loading and input decoding.

use thiserror::Error;

use crate::dimension::Dimension;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Duplicate question id {id}")]
    DuplicateQuestion { id: u32 },

    #[error("Question {question}: expected {expected} options, got {actual}")]
    OptionCount {
        question: u32,
        expected: usize,
        actual: usize,
    },

    #[error("Question {question}: option label {label:?} appears more than once")]
    DuplicateOptionLabel { question: u32, label: String },

    #[error("Question {question}, option {label}: zero weight for {dimension}")]
    EmptyWeight {
        question: u32,
        label: String,
        dimension: Dimension,
    },

    #[error("No archetype has {0} as its primary dimension")]
    UncoveredPrimary(Dimension),

    #[error("Duplicate archetype id {0:?}")]
    DuplicateArchetype(String),

    #[error("Archetype {0:?} pairs a dimension with itself")]
    SelfPairedArchetype(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("I/O error: {0}")]
    Io(String),
}

pub type Result<T> = std::result::Result<T, Error>;

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<config::ConfigError> for Error {
    fn from(e: config::ConfigError) -> Self {
        Error::Config(e.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}
