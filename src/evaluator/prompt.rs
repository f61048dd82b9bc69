//! Prompt descriptors produced by evaluation, and answer resolution.

use serde::{Deserialize, Serialize};

use crate::core::{CardCode, StepId};
use crate::steps::BranchOption;

/// What the guide should show for a branch step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PromptDescriptor {
    /// A yes/no question.
    Binary {
        step_id: StepId,
        text: String,
        true_option: Option<BranchOption>,
        false_option: Option<BranchOption>,
    },
    /// A number picker with inclusive bounds.
    Numeric {
        step_id: StepId,
        prompt: String,
        min: u32,
        max: u32,
        options: Vec<BranchOption>,
    },
    /// Plain text; no choice is made here.
    Info { text: String },
    /// A card needed for the prompt is still loading.
    Pending { code: CardCode },
}

/// A player's answer to a prompt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    Yes,
    No,
    Number(u32),
}

impl PromptDescriptor {
    /// Create an informational descriptor.
    pub fn info(text: impl Into<String>) -> Self {
        Self::Info { text: text.into() }
    }

    /// The `kind` tag.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            PromptDescriptor::Binary { .. } => "binary",
            PromptDescriptor::Numeric { .. } => "numeric",
            PromptDescriptor::Info { .. } => "info",
            PromptDescriptor::Pending { .. } => "pending",
        }
    }

    /// The displayed text, if this descriptor has any.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            PromptDescriptor::Binary { text, .. } | PromptDescriptor::Info { text } => Some(text),
            PromptDescriptor::Numeric { prompt, .. } => Some(prompt),
            PromptDescriptor::Pending { .. } => None,
        }
    }

    /// Check if the descriptor is waiting on a card.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, PromptDescriptor::Pending { .. })
    }

    /// Map an answer to the option it selects.
    ///
    /// Binary prompts take `Yes`/`No`. Numeric prompts take a number within
    /// bounds and select the first option with that `num_condition`, or the
    /// first default option. Any other pairing selects nothing.
    #[must_use]
    pub fn resolve(&self, answer: Answer) -> Option<&BranchOption> {
        match (self, answer) {
            (PromptDescriptor::Binary { true_option, .. }, Answer::Yes) => true_option.as_ref(),
            (PromptDescriptor::Binary { false_option, .. }, Answer::No) => false_option.as_ref(),
            (
                PromptDescriptor::Numeric {
                    min, max, options, ..
                },
                Answer::Number(n),
            ) => {
                if n < *min || n > *max {
                    return None;
                }
                options
                    .iter()
                    .find(|o| o.num_condition == Some(n))
                    .or_else(|| options.iter().find(|o| o.default))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binary() -> PromptDescriptor {
        PromptDescriptor::Binary {
            step_id: StepId::new("s"),
            text: "Did it happen?".to_string(),
            true_option: Some(BranchOption::when(true).then("yes_path")),
            false_option: None,
        }
    }

    fn numeric() -> PromptDescriptor {
        PromptDescriptor::Numeric {
            step_id: StepId::new("count"),
            prompt: "How many players?".to_string(),
            min: 1,
            max: 4,
            options: vec![
                BranchOption::for_count(1).then("solo"),
                BranchOption::fallback().then("group"),
            ],
        }
    }

    #[test]
    fn test_binary_resolution() {
        let prompt = binary();
        assert_eq!(
            prompt.resolve(Answer::Yes).map(|o| o.steps[0].as_str()),
            Some("yes_path")
        );
        // Empty slot is a dead end for the caller
        assert!(prompt.resolve(Answer::No).is_none());
        assert!(prompt.resolve(Answer::Number(1)).is_none());
    }

    #[test]
    fn test_numeric_resolution() {
        let prompt = numeric();
        assert_eq!(
            prompt.resolve(Answer::Number(1)).map(|o| o.steps[0].as_str()),
            Some("solo")
        );
        assert_eq!(
            prompt.resolve(Answer::Number(3)).map(|o| o.steps[0].as_str()),
            Some("group")
        );
        assert!(prompt.resolve(Answer::Number(0)).is_none());
        assert!(prompt.resolve(Answer::Number(5)).is_none());
        assert!(prompt.resolve(Answer::Yes).is_none());
    }

    #[test]
    fn test_info_and_pending_resolve_nothing() {
        assert!(PromptDescriptor::info("x").resolve(Answer::Yes).is_none());
        let pending = PromptDescriptor::Pending {
            code: CardCode::new("01117"),
        };
        assert!(pending.is_pending());
        assert_eq!(pending.text(), None);
        assert!(pending.resolve(Answer::No).is_none());
    }

    #[test]
    fn test_kind_and_text() {
        assert_eq!(binary().kind(), "binary");
        assert_eq!(numeric().kind(), "numeric");
        assert_eq!(numeric().text(), Some("How many players?"));
        assert_eq!(PromptDescriptor::info("hi").text(), Some("hi"));
    }

    #[test]
    fn test_descriptor_json_tag() {
        let value = serde_json::to_value(PromptDescriptor::info("Check campaign difficulty.")).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"kind": "info", "text": "Check campaign difficulty."})
        );
    }
}
