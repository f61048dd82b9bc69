//! Errors raised while loading guide and card data.
//!
//! Evaluation itself never fails; see [`crate::evaluator::EvalIssue`] for
//! the problems it recovers from.

use thiserror::Error;

use super::{CardCode, StepId};

/// Failure while building a [`CampaignGuide`](crate::guide::CampaignGuide)
/// or [`CardRegistry`](crate::cards::CardRegistry).
#[derive(Debug, Error)]
pub enum GuideError {
    /// The document is not valid JSON or doesn't match the expected shape.
    #[error("invalid guide document: {0}")]
    Json(#[from] serde_json::Error),

    /// Two scenarios share a code.
    #[error("scenario {0} defined twice")]
    DuplicateScenario(String),

    /// Two campaign log entries share a section and id.
    #[error("campaign log entry {section}.{id} defined twice")]
    DuplicateLogEntry { section: String, id: String },

    /// Two steps share an id.
    #[error("step {0} defined twice")]
    DuplicateStep(StepId),

    /// Two cards share a code and taboo list.
    #[error("card {0} defined twice")]
    DuplicateCard(CardCode),
}
