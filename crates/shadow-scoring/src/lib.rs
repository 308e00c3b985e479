//! # Shadow-Scoring
//!
//! Turns a sparse answer set into per-dimension scores, an archetype
//! classification and a shadow sync rate.
//!
//! ## Pipeline
//!
//! ```text
//! AnswerSet
//!     ↓ accumulate option weights
//! raw DimensionScores
//!     ↓ [normalizer] divide by per-dimension ceilings
//! normalized 0..=100
//!     ↓ [classifier] rank, barrier/chaos flags, archetype match
//! Classification
//!     ↓ [sync_rate] sigmoid magnitude × polarization + noise
//! ScoreResult
//! ```
//!
//! Every stage is a pure function of its inputs. The only shared state is
//! the dimension ceilings of the static catalog, computed once on first use.

pub mod classifier;
pub mod config;
pub mod engine;
pub mod normalizer;
pub mod sync_rate;

pub use classifier::*;
pub use config::*;
pub use engine::*;
pub use normalizer::*;
pub use sync_rate::*;
