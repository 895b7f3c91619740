//! Raw backend JSON to strict domain entities.
//!
//! The backend is loose about types: booleans arrive as `true`/`false` or
//! `0`/`1`, optional fields are sometimes `null` and sometimes missing, and
//! list endpoints have shipped three different envelope shapes. All of that
//! is absorbed here so the rest of the crate only sees [`crate::model`].

mod error;
mod flag;
mod records;

use serde_json::Value;

use crate::model::{Catalog, ListEnvelope, PartyGame, Recipe};

pub use error::DecodeError;
pub use flag::decode_flag;

/// Decode a single recipe object.
pub fn decode_recipe(raw: Value) -> Result<Recipe, DecodeError> {
    let record: records::RecipeRecord =
        serde_json::from_value(raw).map_err(|source| DecodeError::Structure {
            entity: "recipe",
            source,
        })?;
    record.into_recipe()
}

/// Decode a single party game object.
pub fn decode_party_game(raw: Value) -> Result<PartyGame, DecodeError> {
    let record: records::PartyGameRecord =
        serde_json::from_value(raw).map_err(|source| DecodeError::Structure {
            entity: "party game",
            source,
        })?;
    record.into_party_game()
}

/// Decode a list response for `catalog`.
///
/// Accepted shapes, in order of preference:
/// - `{"total": n, "items": [...]}`
/// - `{"total": n, "<legacy key>": [...]}` (`tragos` / `juegos`)
/// - a bare array, whose length becomes the total
///
/// A missing `total` is replaced by the item count. Any item that fails to
/// decode fails the whole list.
pub fn decode_list<T>(
    raw: Value,
    catalog: Catalog,
    decode_item: fn(Value) -> Result<T, DecodeError>,
) -> Result<ListEnvelope<T>, DecodeError> {
    let (total, raw_items) = match raw {
        Value::Array(items) => (None, items),
        Value::Object(mut fields) => {
            let total = fields.get("total").and_then(Value::as_u64);
            let items = fields
                .remove("items")
                .or_else(|| fields.remove(catalog.legacy_items_key()))
                .ok_or(DecodeError::MissingItems { catalog })?;
            match items {
                Value::Array(items) => (total, items),
                _ => return Err(DecodeError::MissingItems { catalog }),
            }
        }
        _ => return Err(DecodeError::NotAList { catalog }),
    };

    let items = raw_items
        .into_iter()
        .map(decode_item)
        .collect::<Result<Vec<_>, _>>()?;
    let total = total.unwrap_or_else(|| u64::try_from(items.len()).unwrap_or(u64::MAX));

    Ok(ListEnvelope { total, items })
}
