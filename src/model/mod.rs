//! Strict domain entities for both catalogs.
//!
//! Everything here is an immutable value: built by [`crate::decode`],
//! held by a published state, dropped when that state is replaced.

mod catalog;
mod envelope;
mod id;
mod party_game;
mod recipe;
mod timestamp;

pub use catalog::Catalog;
pub use envelope::ListEnvelope;
pub use id::ItemId;
pub use party_game::PartyGame;
pub use recipe::{Dosage, Ingredient, Recipe};
pub use timestamp::parse_timestamp;
