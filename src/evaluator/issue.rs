//! Problems the evaluator recovers from.
//!
//! None of these stop evaluation. They are collected alongside the prompt
//! so callers (and the `guide-eval` tool) can report broken guide data.

use serde::Serialize;
use thiserror::Error;

use crate::core::CardCode;

/// A recovered evaluation problem.
#[derive(Clone, Debug, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "issue", rename_all = "snake_case")]
pub enum EvalIssue {
    /// Scenario code not in the guide; the raw code was shown instead.
    #[error("unknown scenario {code}")]
    UnresolvedScenario { code: String },

    /// Campaign log entry not in the guide.
    #[error("unknown campaign log entry {section}.{id}")]
    UnresolvedLogEntry { section: String, id: String },

    /// Card code not in the card database.
    #[error("unknown card {code}")]
    UnresolvedCard { code: CardCode },

    /// Binary prompt has no option for "yes".
    #[error("no option matches a true answer")]
    MissingTrueOption,

    /// Binary prompt has no option for "no".
    #[error("no option matches a false answer")]
    MissingFalseOption,

    /// More than one option carries the same yes/no value; the first is used.
    #[error("several options match a {value} answer; using the first")]
    DuplicateBoolOption { value: bool },
}

impl EvalIssue {
    /// Check if this issue is a reference to something that doesn't exist.
    #[must_use]
    pub fn is_unresolved_reference(&self) -> bool {
        matches!(
            self,
            EvalIssue::UnresolvedScenario { .. }
                | EvalIssue::UnresolvedLogEntry { .. }
                | EvalIssue::UnresolvedCard { .. }
        )
    }

    /// Check if this issue comes from an option list that doesn't fit the prompt.
    #[must_use]
    pub fn is_ambiguous_options(&self) -> bool {
        !self.is_unresolved_reference()
    }
}
