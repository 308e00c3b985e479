//! # Shadow-Core
//!
//! Data contracts and static catalogs for the shadow archetype
//! questionnaire: the six dimensions, the scenario questions with their
//! weighted options, and the archetype catalog including the chaos sentinel.

pub mod answers;
pub mod archetype;
pub mod catalog;
pub mod dimension;
pub mod error;
pub mod question;

pub use answers::*;
pub use archetype::*;
pub use catalog::*;
pub use dimension::*;
pub use error::{Error, Result};
pub use question::*;
