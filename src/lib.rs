//! # arkham-guide
//!
//! Branch-step evaluation for campaign scenario guides.
//!
//! A scenario guide is a sequence of steps. Branch steps ask the players
//! to check something (a campaign log entry, a completed scenario, the
//! player count, a card in someone's deck) and continue down one of
//! several options. This crate decides how each branch step is presented.
//!
//! ## Design Principles
//!
//! 1. **Total**: Evaluation always produces a prompt. Broken references
//!    degrade to informational text and are reported as issues.
//!
//! 2. **Explicit services**: The campaign guide and card database are
//!    passed in through [`EvalContext`], never looked up globally.
//!
//! 3. **Non-blocking cards**: Card lookups may report "still loading";
//!    the step renders as [`PromptDescriptor::Pending`] and the caller
//!    re-evaluates when ready.
//!
//! ## Modules
//!
//! - `core`: Identifiers, configuration, load errors
//! - `cards`: Card records, the card lookup service, an in-memory registry
//! - `guide`: Scenario and campaign log lookup, an in-memory guide
//! - `steps`: Branch steps, options, and conditions
//! - `evaluator`: Condition dispatch, prompt descriptors, answer resolution

pub mod core;
pub mod cards;
pub mod guide;
pub mod steps;
pub mod evaluator;

// Re-export commonly used types
pub use crate::core::{CardCode, EvaluatorConfig, GuideError, StepId, MAX_PLAYERS, MIN_PLAYERS};

pub use crate::cards::{Card, CardKind, CardLookup, CardRegistry, CardResolution};

pub use crate::guide::{CampaignGuide, CampaignGuideLookup, LogEntry, ScenarioInfo};

pub use crate::steps::{
    BranchOption, BranchStep, CampaignDataCondition, CampaignLogCondition, CardCondition,
    Condition, InvestigatorSelector, ScenarioDataCondition, ScenarioDataKind,
};

pub use crate::evaluator::{
    Answer, BranchEvaluator, EvalContext, EvalIssue, Evaluation, PromptDescriptor,
};
