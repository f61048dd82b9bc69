//! Campaign guide lookup service.

use super::entry::{LogEntry, ScenarioInfo};

/// Lookup trait for scenario and campaign log definitions.
///
/// The evaluator receives this explicitly rather than reading it from any
/// shared context, so a caller can evaluate against any guide snapshot.
pub trait CampaignGuideLookup {
    /// Find a scenario by code.
    fn scenario(&self, code: &str) -> Option<&ScenarioInfo>;

    /// Find a campaign log entry by section and id.
    fn log_entry(&self, section: &str, id: &str) -> Option<&LogEntry>;
}

impl<T: CampaignGuideLookup + ?Sized> CampaignGuideLookup for &T {
    fn scenario(&self, code: &str) -> Option<&ScenarioInfo> {
        (**self).scenario(code)
    }

    fn log_entry(&self, section: &str, id: &str) -> Option<&LogEntry> {
        (**self).log_entry(section, id)
    }
}
