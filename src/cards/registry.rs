//! In-memory card registry.
//!
//! The `CardRegistry` stores card records keyed by code and taboo list,
//! and serves them through [`CardLookup`]. Codes can be flagged as pending
//! to stand in for a card cache that is still filling.

use log::trace;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::core::{CardCode, GuideError};

use super::card::{Card, CardKind};
use super::lookup::{CardLookup, CardResolution};

/// Registry of card records.
///
/// ## Example
///
/// ```
/// use arkham_guide::cards::{Card, CardKind, CardLookup, CardRegistry};
/// use arkham_guide::core::CardCode;
///
/// let mut registry = CardRegistry::new();
/// registry.register(Card::new("01006", "Wendy Adams")).unwrap();
///
/// let found = registry
///     .card(&CardCode::new("01006"), CardKind::Player, None)
///     .found()
///     .unwrap();
/// assert_eq!(found.name, "Wendy Adams");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<(CardCode, Option<u32>), Card>,
    codes: FxHashSet<CardCode>,
    pending: FxHashSet<CardCode>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a registry from a JSON array of cards.
    pub fn from_json(json: &str) -> Result<Self, GuideError> {
        let cards: Vec<Card> = serde_json::from_str(json)?;
        let mut registry = Self::new();
        for card in cards {
            registry.register(card)?;
        }
        Ok(registry)
    }

    /// Register a card record.
    ///
    /// Fails if a record with the same code and taboo list exists.
    pub fn register(&mut self, card: Card) -> Result<(), GuideError> {
        let key = (card.code.clone(), card.taboo_id);
        if self.cards.contains_key(&key) {
            return Err(GuideError::DuplicateCard(card.code));
        }
        self.codes.insert(card.code.clone());
        self.cards.insert(key, card);
        Ok(())
    }

    /// Register a card record (builder pattern).
    pub fn with_card(mut self, card: Card) -> Result<Self, GuideError> {
        self.register(card)?;
        Ok(self)
    }

    /// Flag a code as still loading.
    ///
    /// Lookups for the code report [`CardResolution::Pending`] until
    /// [`resolve_pending`](Self::resolve_pending) is called.
    pub fn mark_pending(&mut self, code: CardCode) {
        self.pending.insert(code);
    }

    /// Clear the pending flag for a code.
    pub fn resolve_pending(&mut self, code: &CardCode) {
        self.pending.remove(code);
    }

    /// Get a record by code and taboo list, without falling back.
    #[must_use]
    pub fn get(&self, code: &CardCode, taboo_id: Option<u32>) -> Option<&Card> {
        self.cards.get(&(code.clone(), taboo_id))
    }

    /// Check if any printing of a code is registered.
    #[must_use]
    pub fn contains(&self, code: &CardCode) -> bool {
        self.codes.contains(code)
    }

    /// Get the number of registered records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all records.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }
}

impl CardLookup for CardRegistry {
    fn card(&self, code: &CardCode, kind: CardKind, taboo_id: Option<u32>) -> CardResolution {
        if self.pending.contains(code) {
            trace!("card {} still pending", code);
            return CardResolution::Pending;
        }

        // A taboo printing wins over the base printing when one exists.
        let record = taboo_id
            .and_then(|taboo| self.get(code, Some(taboo)))
            .or_else(|| self.get(code, None));

        match record {
            Some(card) if card.kind == kind => CardResolution::Found(card.clone()),
            Some(card) => {
                trace!("card {} is a {} card, wanted {}", code, card.kind, kind);
                CardResolution::Missing
            }
            None => {
                trace!("card {} not found", code);
                CardResolution::Missing
            }
        }
    }
}
