use std::fmt;

use chrono::NaiveDateTime;

use super::id::ItemId;
use super::timestamp::parse_timestamp;

/// A cocktail recipe.
#[derive(Debug, Clone, PartialEq)]
pub struct Recipe {
    pub id: ItemId,
    pub name: String,
    pub description: String,
    pub instructions: String,
    pub tips: String,
    pub history: String,
    pub alcoholic: bool,
    pub image_url: Option<String>,
    pub difficulty: String,
    pub prep_time_minutes: u32,
    /// Raw ISO 8601 string as sent by the backend.
    pub created_at: String,
    /// Raw ISO 8601 string as sent by the backend.
    pub updated_at: String,
    /// Present only on detail responses, in backend order.
    pub ingredients: Option<Vec<Ingredient>>,
}

impl Recipe {
    pub fn created_at_datetime(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.created_at)
    }

    pub fn updated_at_datetime(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.updated_at)
    }

    /// Ingredients, or an empty slice when the response omitted them.
    pub fn ingredients(&self) -> &[Ingredient] {
        self.ingredients.as_deref().unwrap_or_default()
    }
}

/// An ingredient as used by one specific recipe.
#[derive(Debug, Clone, PartialEq)]
pub struct Ingredient {
    pub id: ItemId,
    pub name: String,
    pub contains_alcohol: bool,
    pub category: String,
    pub created_at: String,
    pub updated_at: String,
    /// How much of this ingredient the enclosing recipe uses.
    pub dosage: Dosage,
}

impl Ingredient {
    pub fn created_at_datetime(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.created_at)
    }

    pub fn updated_at_datetime(&self) -> Option<NaiveDateTime> {
        parse_timestamp(&self.updated_at)
    }
}

/// Quantity of an ingredient within the recipe that embeds it.
///
/// The owning recipe is implied by nesting and not stored.
#[derive(Debug, Clone, PartialEq)]
pub struct Dosage {
    pub quantity: String,
    pub unit: String,
    pub note: Option<String>,
}

impl fmt::Display for Dosage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.quantity, self.unit)
    }
}
