//! Card system: records, lookup service, and an in-memory registry.
//!
//! ## Key Types
//!
//! - `Card`: A card record (code, name, pool, taboo list)
//! - `CardKind`: Player or encounter pool
//! - `CardLookup`: Non-blocking lookup service trait
//! - `CardResolution`: Found / missing / still loading
//! - `CardRegistry`: `CardLookup` backed by a hash map

pub mod card;
pub mod lookup;
pub mod registry;

pub use card::{Card, CardKind};
pub use lookup::{CardLookup, CardResolution};
pub use registry::CardRegistry;
