//! Evaluator configuration.

use serde::{Deserialize, Serialize};

use crate::cards::CardKind;

/// Lowest player count a numeric player-count prompt accepts.
pub const MIN_PLAYERS: u32 = 1;

/// Highest player count a numeric player-count prompt accepts.
pub const MAX_PLAYERS: u32 = 4;

/// Settings applied to every evaluation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluatorConfig {
    /// Taboo list forwarded to card lookups (`None` = no taboo list).
    pub taboo_id: Option<u32>,

    /// Card pool used when resolving investigator and campaign-log cards.
    pub card_kind: CardKind,
}

impl EvaluatorConfig {
    /// Create the default config (no taboo list, player cards).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a taboo list for card lookups.
    #[must_use]
    pub fn with_taboo(mut self, taboo_id: u32) -> Self {
        self.taboo_id = Some(taboo_id);
        self
    }

    /// Resolve cards from a different pool.
    #[must_use]
    pub fn with_card_kind(mut self, kind: CardKind) -> Self {
        self.card_kind = kind;
        self
    }
}
