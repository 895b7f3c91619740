use thiserror::Error;

use crate::model::{Catalog, ItemId};

/// Errors raised while decoding backend payloads.
///
/// Boolean fields never produce one of these.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("malformed {entity}: {source}")]
    Structure {
        entity: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{entity} has non-positive id {raw}")]
    InvalidId { entity: &'static str, raw: u32 },

    #[error("recipe {recipe} lists ingredient {ingredient} more than once")]
    DuplicateIngredient { recipe: ItemId, ingredient: ItemId },

    #[error("dosage of ingredient {ingredient} belongs to recipe {found}, not {expected}")]
    ForeignDosage {
        ingredient: ItemId,
        expected: ItemId,
        found: u32,
    },

    #[error("dosage nested under ingredient {ingredient} describes ingredient {found}")]
    MismatchedDosage { ingredient: ItemId, found: u32 },

    #[error("{catalog} list has no items array")]
    MissingItems { catalog: Catalog },

    #[error("{catalog} list is neither an object nor an array")]
    NotAList { catalog: Catalog },
}
