use std::fmt::Debug;

use serde_json::Value;

use crate::decode::{decode_party_game, decode_recipe, DecodeError};
use crate::model::{Catalog, ItemId, PartyGame, Recipe};

/// An entity that can be listed and looked up in a catalog.
pub trait CatalogItem: Clone + PartialEq + Debug + Send + Sync + 'static {
    const CATALOG: Catalog;

    fn id(&self) -> ItemId;

    fn decode(raw: Value) -> Result<Self, DecodeError>;
}

impl CatalogItem for Recipe {
    const CATALOG: Catalog = Catalog::Recipes;

    fn id(&self) -> ItemId {
        self.id
    }

    fn decode(raw: Value) -> Result<Self, DecodeError> {
        decode_recipe(raw)
    }
}

impl CatalogItem for PartyGame {
    const CATALOG: Catalog = Catalog::PartyGames;

    fn id(&self) -> ItemId {
        self.id
    }

    fn decode(raw: Value) -> Result<Self, DecodeError> {
        decode_party_game(raw)
    }
}
