//! Core types: identifiers, configuration, and load errors.

pub mod config;
pub mod error;
pub mod ids;

pub use config::{EvaluatorConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use error::GuideError;
pub use ids::{CardCode, StepId};
