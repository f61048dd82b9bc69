//! In-memory campaign guide.
//!
//! Holds the static guide definition: scenarios, campaign log entries, and
//! branch steps. Storage uses persistent maps so a guide can be cloned in
//! O(1) and handed to each evaluation as its own snapshot.

use im::{HashMap as ImHashMap, Vector};
use log::debug;
use serde::Deserialize;

use crate::core::{GuideError, StepId};
use crate::steps::BranchStep;

use super::entry::{LogEntry, ScenarioInfo};
use super::lookup::CampaignGuideLookup;

/// JSON layout of a guide file.
#[derive(Deserialize)]
struct GuideDocument {
    #[serde(default)]
    scenarios: Vec<ScenarioInfo>,
    #[serde(default)]
    campaign_log: Vec<LogEntry>,
    #[serde(default)]
    steps: Vec<BranchStep>,
}

/// A campaign guide definition.
///
/// ## Example
///
/// ```
/// use arkham_guide::guide::{CampaignGuide, CampaignGuideLookup, ScenarioInfo};
///
/// let guide = CampaignGuide::new()
///     .with_scenario(ScenarioInfo::new("the_gathering", "The Gathering"))
///     .unwrap();
///
/// let scenario = guide.scenario("the_gathering").unwrap();
/// assert_eq!(scenario.scenario_name, "The Gathering");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CampaignGuide {
    scenarios: ImHashMap<String, ScenarioInfo>,
    log_entries: ImHashMap<(String, String), LogEntry>,
    steps: Vector<BranchStep>,
    step_index: ImHashMap<StepId, usize>,
}

impl CampaignGuide {
    /// Create an empty guide.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a guide from a JSON document.
    ///
    /// The document has optional `scenarios`, `campaign_log`, and `steps`
    /// arrays.
    pub fn from_json(json: &str) -> Result<Self, GuideError> {
        let document: GuideDocument = serde_json::from_str(json)?;
        let mut guide = Self::new();

        for scenario in document.scenarios {
            guide.add_scenario(scenario)?;
        }
        for entry in document.campaign_log {
            guide.add_log_entry(entry)?;
        }
        for step in document.steps {
            guide.add_step(step)?;
        }

        debug!(
            "loaded guide: {} scenarios, {} log entries, {} steps",
            guide.scenarios.len(),
            guide.log_entries.len(),
            guide.steps.len()
        );
        Ok(guide)
    }

    /// Add a scenario.
    pub fn add_scenario(&mut self, scenario: ScenarioInfo) -> Result<(), GuideError> {
        if self.scenarios.contains_key(&scenario.code) {
            return Err(GuideError::DuplicateScenario(scenario.code));
        }
        self.scenarios.insert(scenario.code.clone(), scenario);
        Ok(())
    }

    /// Add a campaign log entry.
    pub fn add_log_entry(&mut self, entry: LogEntry) -> Result<(), GuideError> {
        let key = (entry.section().to_string(), entry.id().to_string());
        if self.log_entries.contains_key(&key) {
            let (section, id) = key;
            return Err(GuideError::DuplicateLogEntry { section, id });
        }
        self.log_entries.insert(key, entry);
        Ok(())
    }

    /// Add a branch step. Steps keep the order they were added in.
    pub fn add_step(&mut self, step: BranchStep) -> Result<(), GuideError> {
        if self.step_index.contains_key(&step.id) {
            return Err(GuideError::DuplicateStep(step.id));
        }
        self.step_index.insert(step.id.clone(), self.steps.len());
        self.steps.push_back(step);
        Ok(())
    }

    /// Add a scenario (builder pattern).
    pub fn with_scenario(mut self, scenario: ScenarioInfo) -> Result<Self, GuideError> {
        self.add_scenario(scenario)?;
        Ok(self)
    }

    /// Add a campaign log entry (builder pattern).
    pub fn with_log_entry(mut self, entry: LogEntry) -> Result<Self, GuideError> {
        self.add_log_entry(entry)?;
        Ok(self)
    }

    /// Add a branch step (builder pattern).
    pub fn with_step(mut self, step: BranchStep) -> Result<Self, GuideError> {
        self.add_step(step)?;
        Ok(self)
    }

    /// Get a step by id.
    #[must_use]
    pub fn step(&self, id: &StepId) -> Option<&BranchStep> {
        self.step_index.get(id).and_then(|&index| self.steps.get(index))
    }

    /// Iterate over steps in guide order.
    pub fn steps(&self) -> impl Iterator<Item = &BranchStep> {
        self.steps.iter()
    }

    /// Get the number of steps.
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }
}

impl CampaignGuideLookup for CampaignGuide {
    fn scenario(&self, code: &str) -> Option<&ScenarioInfo> {
        self.scenarios.get(code)
    }

    fn log_entry(&self, section: &str, id: &str) -> Option<&LogEntry> {
        self.log_entries.get(&(section.to_string(), id.to_string()))
    }
}
