//! Branch steps and their options.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{CardCode, StepId};

use super::condition::Condition;

/// One possible outcome of a branch step.
///
/// An option is tagged with the condition value it matches: a yes/no
/// answer, a card code, or a number. Options with `default` set apply
/// when nothing else matches.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchOption {
    /// Matches a yes/no answer.
    #[serde(default, alias = "boolCondition", skip_serializing_if = "Option::is_none")]
    pub bool_condition: Option<bool>,

    /// Matches a card code.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<CardCode>,

    /// Matches a numeric answer.
    #[serde(default, alias = "numCondition", skip_serializing_if = "Option::is_none")]
    pub num_condition: Option<u32>,

    /// Applies when no other option matches.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub default: bool,

    /// Steps to run when this option is taken. Never interpreted here.
    #[serde(default, skip_serializing_if = "SmallVec::is_empty")]
    pub steps: SmallVec<[StepId; 2]>,
}

impl BranchOption {
    /// Create an option matching a yes/no answer.
    #[must_use]
    pub fn when(value: bool) -> Self {
        Self {
            bool_condition: Some(value),
            ..Self::default()
        }
    }

    /// Create an option matching a card code.
    #[must_use]
    pub fn for_card(code: impl Into<String>) -> Self {
        Self {
            condition: Some(CardCode::new(code)),
            ..Self::default()
        }
    }

    /// Create an option matching a number.
    #[must_use]
    pub fn for_count(value: u32) -> Self {
        Self {
            num_condition: Some(value),
            ..Self::default()
        }
    }

    /// Create a default option.
    #[must_use]
    pub fn fallback() -> Self {
        Self {
            default: true,
            ..Self::default()
        }
    }

    /// Mark this option as the default (builder pattern).
    #[must_use]
    pub fn as_default(mut self) -> Self {
        self.default = true;
        self
    }

    /// Add a downstream step (builder pattern).
    #[must_use]
    pub fn then(mut self, step: impl Into<String>) -> Self {
        self.steps.push(StepId::new(step));
        self
    }
}

/// A decision point in a scenario guide.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BranchStep {
    /// Step identifier.
    pub id: StepId,

    /// Text shown instead of the generated prompt, when present.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// What the players have to check.
    pub condition: Condition,

    /// Candidate outcomes, in guide order.
    #[serde(default)]
    pub options: Vec<BranchOption>,
}

impl BranchStep {
    /// Create a step with no options.
    pub fn new(id: impl Into<String>, condition: Condition) -> Self {
        Self {
            id: StepId::new(id),
            text: None,
            condition,
            options: Vec::new(),
        }
    }

    /// Set the display text (builder pattern).
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Add an option (builder pattern).
    #[must_use]
    pub fn with_option(mut self, option: BranchOption) -> Self {
        self.options.push(option);
        self
    }

    /// Add several options (builder pattern).
    #[must_use]
    pub fn with_options(mut self, options: impl IntoIterator<Item = BranchOption>) -> Self {
        self.options.extend(options);
        self
    }

    /// Check if every option carries a yes/no value.
    ///
    /// True for an empty option list.
    #[must_use]
    pub fn has_binary_options(&self) -> bool {
        self.options.iter().all(|o| o.bool_condition.is_some())
    }

    /// First option matching a yes/no value.
    #[must_use]
    pub fn bool_option(&self, value: bool) -> Option<&BranchOption> {
        self.options.iter().find(|o| o.bool_condition == Some(value))
    }

    /// First option matching a card code.
    #[must_use]
    pub fn card_option(&self, code: &CardCode) -> Option<&BranchOption> {
        self.options
            .iter()
            .find(|o| o.condition.as_ref() == Some(code))
    }

    /// First default option.
    #[must_use]
    pub fn default_option(&self) -> Option<&BranchOption> {
        self.options.iter().find(|o| o.default)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steps::condition::ScenarioDataKind;

    #[test]
    fn test_option_builders() {
        let yes = BranchOption::when(true).then("resolution_1");
        assert_eq!(yes.bool_condition, Some(true));
        assert_eq!(yes.steps.as_slice(), &[StepId::new("resolution_1")]);

        let card = BranchOption::for_card("01117");
        assert_eq!(card.condition, Some(CardCode::new("01117")));
        assert!(!card.default);

        assert!(BranchOption::fallback().default);
        assert!(BranchOption::for_count(3).as_default().default);
    }

    #[test]
    fn test_binary_option_set() {
        let step = BranchStep::new("check", Condition::campaign_log("notes", "a"))
            .with_option(BranchOption::when(true))
            .with_option(BranchOption::when(false));
        assert!(step.has_binary_options());

        let mixed = step.clone().with_option(BranchOption::fallback());
        assert!(!mixed.has_binary_options());

        let empty = BranchStep::new("empty", Condition::campaign_log("notes", "a"));
        assert!(empty.has_binary_options());
    }

    #[test]
    fn test_first_match_wins() {
        let step = BranchStep::new("check", Condition::campaign_log("notes", "a")).with_options([
            BranchOption::when(true).then("first"),
            BranchOption::when(true).then("second"),
            BranchOption::when(false).then("third"),
        ]);

        assert_eq!(
            step.bool_option(true).unwrap().steps[0],
            StepId::new("first")
        );
        assert_eq!(
            step.bool_option(false).unwrap().steps[0],
            StepId::new("third")
        );
    }

    #[test]
    fn test_card_and_default_lookup() {
        let step = BranchStep::new("who", Condition::scenario_data(ScenarioDataKind::Investigator))
            .with_option(BranchOption::for_card("01117").then("lita"))
            .with_option(BranchOption::fallback().then("nobody"));

        assert_eq!(
            step.card_option(&CardCode::new("01117")).unwrap().steps[0],
            StepId::new("lita")
        );
        assert!(step.card_option(&CardCode::new("01001")).is_none());
        assert_eq!(step.default_option().unwrap().steps[0], StepId::new("nobody"));
    }

    #[test]
    fn test_step_from_json() {
        let step: BranchStep = serde_json::from_str(
            r#"{
                "id": "check_house",
                "condition": {"type": "campaign_log", "section": "campaign_notes", "id": "house_burned"},
                "options": [
                    {"boolCondition": true, "steps": ["lita_joins"]},
                    {"bool_condition": false, "steps": ["house_stands"]}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(step.id, StepId::new("check_house"));
        assert_eq!(step.text, None);
        assert_eq!(step.options.len(), 2);
        assert_eq!(step.options[0].bool_condition, Some(true));
        assert_eq!(step.options[1].bool_condition, Some(false));
    }
}
