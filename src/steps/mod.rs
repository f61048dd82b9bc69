//! Scenario steps: branch steps, their options, and their conditions.
//!
//! Steps are loaded once from the campaign guide definition and never
//! mutated afterwards. Evaluation only reads them.

mod condition;
mod step;

pub use condition::{
    CampaignDataCondition, CampaignLogCondition, CardCondition, Condition, InvestigatorSelector,
    ScenarioDataCondition, ScenarioDataKind,
};
pub use step::{BranchOption, BranchStep};
