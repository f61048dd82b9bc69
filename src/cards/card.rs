//! Card records as returned by the card database.
//!
//! Only the fields the guide needs are modeled: the code, the printed name,
//! and which pool and taboo list the record came from.

use serde::{Deserialize, Serialize};

use crate::core::CardCode;

/// Which card pool a card belongs to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardKind {
    /// Investigator and player deck cards.
    #[default]
    Player,
    /// Scenario, location, and enemy cards.
    Encounter,
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardKind::Player => f.write_str("player"),
            CardKind::Encounter => f.write_str("encounter"),
        }
    }
}

/// A single card record.
///
/// ## Example
///
/// ```
/// use arkham_guide::cards::Card;
///
/// let card = Card::new("01006", "Wendy Adams").with_subname("The Urchin");
/// assert_eq!(card.display_name(), "Wendy Adams (The Urchin)");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Database code.
    pub code: CardCode,

    /// Printed name.
    pub name: String,

    /// Printed subtitle, if the card has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subname: Option<String>,

    /// Pool the card belongs to.
    #[serde(default)]
    pub kind: CardKind,

    /// Taboo list this printing applies to (`None` for the base printing).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub taboo_id: Option<u32>,
}

impl Card {
    /// Create a base-printing player card.
    #[must_use]
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: CardCode::new(code),
            name: name.into(),
            subname: None,
            kind: CardKind::Player,
            taboo_id: None,
        }
    }

    /// Set the subtitle (builder pattern).
    #[must_use]
    pub fn with_subname(mut self, subname: impl Into<String>) -> Self {
        self.subname = Some(subname.into());
        self
    }

    /// Set the pool (builder pattern).
    #[must_use]
    pub fn with_kind(mut self, kind: CardKind) -> Self {
        self.kind = kind;
        self
    }

    /// Mark this record as a taboo printing (builder pattern).
    #[must_use]
    pub fn with_taboo(mut self, taboo_id: u32) -> Self {
        self.taboo_id = Some(taboo_id);
        self
    }

    /// Name with the subtitle appended in parentheses when present.
    #[must_use]
    pub fn display_name(&self) -> String {
        match &self.subname {
            Some(subname) => format!("{} ({})", self.name, subname),
            None => self.name.clone(),
        }
    }
}
