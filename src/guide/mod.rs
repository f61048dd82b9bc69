//! Campaign guide data: scenarios, campaign log entries, and steps.
//!
//! ## Key Types
//!
//! - [`CampaignGuideLookup`]: Lookup service the evaluator depends on
//! - [`CampaignGuide`]: In-memory guide loaded from JSON
//! - [`ScenarioInfo`], [`LogEntry`]: Records returned by lookups

mod campaign;
mod entry;
mod lookup;

pub use campaign::CampaignGuide;
pub use entry::{LogEntry, ScenarioInfo};
pub use lookup::CampaignGuideLookup;
