//! Card lookup service.
//!
//! The card database is an external collaborator. Lookups may be served
//! from a cache that hasn't been filled yet, so a lookup can report that
//! the card is still loading instead of blocking.

use crate::core::CardCode;

use super::card::{Card, CardKind};

/// Outcome of a card lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardResolution {
    /// The card is available.
    Found(Card),
    /// No card with that code exists in the requested pool.
    Missing,
    /// The card is still being fetched; ask again later.
    Pending,
}

impl CardResolution {
    /// Get the card if it was found.
    #[must_use]
    pub fn found(self) -> Option<Card> {
        match self {
            CardResolution::Found(card) => Some(card),
            _ => None,
        }
    }

    /// Check if the lookup is still in flight.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self, CardResolution::Pending)
    }
}

/// Card lookup trait.
///
/// Implementations must not block: a cache miss is reported as
/// [`CardResolution::Pending`] and the caller decides when to retry.
pub trait CardLookup {
    /// Look up a card by code in the given pool, applying a taboo list if set.
    fn card(&self, code: &CardCode, kind: CardKind, taboo_id: Option<u32>) -> CardResolution;
}

impl<T: CardLookup + ?Sized> CardLookup for &T {
    fn card(&self, code: &CardCode, kind: CardKind, taboo_id: Option<u32>) -> CardResolution {
        (**self).card(code, kind, taboo_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct AlwaysPending;

    impl CardLookup for AlwaysPending {
        fn card(&self, _code: &CardCode, _kind: CardKind, _taboo_id: Option<u32>) -> CardResolution {
            CardResolution::Pending
        }
    }

    #[test]
    fn test_resolution_accessors() {
        let found = CardResolution::Found(Card::new("01001", "Roland Banks"));
        assert!(!found.is_pending());
        assert_eq!(found.found().map(|c| c.name), Some("Roland Banks".to_string()));

        assert!(CardResolution::Pending.is_pending());
        assert_eq!(CardResolution::Missing.found(), None);
    }

    #[test]
    fn test_lookup_through_reference() {
        let lookup = AlwaysPending;
        let by_ref: &dyn CardLookup = &lookup;
        assert!(by_ref
            .card(&CardCode::new("01001"), CardKind::Player, None)
            .is_pending());
    }
}
