//! Scenario and campaign log records.

use serde::{Deserialize, Serialize};

use crate::core::CardCode;

/// A scenario in the campaign guide.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioInfo {
    /// Scenario code (e.g. `"the_gathering"`).
    pub code: String,

    /// Display name (e.g. `"The Gathering"`).
    pub scenario_name: String,
}

impl ScenarioInfo {
    /// Create a scenario record.
    pub fn new(code: impl Into<String>, scenario_name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            scenario_name: scenario_name.into(),
        }
    }
}

/// A campaign log entry definition.
///
/// Entries are either a line of text or a reference to a card (for
/// example, a story asset earned during a scenario).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LogEntry {
    /// A text entry.
    Text {
        /// Section title.
        section: String,
        /// Entry id within the section.
        id: String,
        /// Entry text.
        text: String,
    },
    /// A card entry.
    Card {
        /// Section title.
        section: String,
        /// Entry id within the section.
        id: String,
        /// Referenced card.
        code: CardCode,
    },
}

impl LogEntry {
    /// Create a text entry.
    pub fn text(section: impl Into<String>, id: impl Into<String>, text: impl Into<String>) -> Self {
        Self::Text {
            section: section.into(),
            id: id.into(),
            text: text.into(),
        }
    }

    /// Create a card entry.
    pub fn card(section: impl Into<String>, id: impl Into<String>, code: impl Into<String>) -> Self {
        Self::Card {
            section: section.into(),
            id: id.into(),
            code: CardCode::new(code),
        }
    }

    /// Section title.
    #[must_use]
    pub fn section(&self) -> &str {
        match self {
            LogEntry::Text { section, .. } | LogEntry::Card { section, .. } => section,
        }
    }

    /// Entry id.
    #[must_use]
    pub fn id(&self) -> &str {
        match self {
            LogEntry::Text { id, .. } | LogEntry::Card { id, .. } => id,
        }
    }
}
