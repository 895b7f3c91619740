//! Wire shapes, field-for-field as the backend sends them.

use std::collections::HashSet;

use serde::Deserialize;

use crate::model::{Dosage, Ingredient, ItemId, PartyGame, Recipe};

use super::error::DecodeError;
use super::flag::flag;

fn item_id(entity: &'static str, raw: u32) -> Result<ItemId, DecodeError> {
    ItemId::new(raw).ok_or(DecodeError::InvalidId { entity, raw })
}

#[derive(Debug, Deserialize)]
pub(super) struct RecipeRecord {
    id: u32,
    #[serde(rename = "nombre")]
    name: String,
    #[serde(rename = "descripcion")]
    description: String,
    #[serde(rename = "instrucciones")]
    instructions: String,
    tips: String,
    #[serde(rename = "historia")]
    history: String,
    #[serde(rename = "es_alcoholico", default, deserialize_with = "flag")]
    alcoholic: bool,
    #[serde(rename = "imagen_url", default)]
    image_url: Option<String>,
    #[serde(rename = "dificultad")]
    difficulty: String,
    #[serde(rename = "tiempo_preparacion_minutos")]
    prep_time_minutes: u32,
    created_at: String,
    updated_at: String,
    #[serde(rename = "ingredientes", default)]
    ingredients: Option<Vec<IngredientRecord>>,
}

#[derive(Debug, Deserialize)]
struct IngredientRecord {
    id: u32,
    #[serde(rename = "nombre")]
    name: String,
    #[serde(rename = "es_alcohol", default, deserialize_with = "flag")]
    contains_alcohol: bool,
    #[serde(rename = "categoria")]
    category: String,
    created_at: String,
    updated_at: String,
    pivot: DosageRecord,
}

#[derive(Debug, Deserialize)]
struct DosageRecord {
    #[serde(rename = "trago_id", default)]
    recipe_id: Option<u32>,
    #[serde(rename = "ingrediente_id", default)]
    ingredient_id: Option<u32>,
    #[serde(rename = "cantidad")]
    quantity: String,
    #[serde(rename = "unidad")]
    unit: String,
    #[serde(rename = "notas", default)]
    note: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct PartyGameRecord {
    id: u32,
    #[serde(rename = "nombre")]
    name: String,
    #[serde(rename = "descripcion")]
    description: String,
    #[serde(rename = "categoria")]
    category: String,
    #[serde(rename = "materiales")]
    materials: String,
    #[serde(rename = "min_jugadores")]
    min_players: u32,
    #[serde(rename = "max_jugadores", default)]
    max_players: Option<u32>,
    #[serde(rename = "es_para_beber", default, deserialize_with = "flag")]
    requires_drinking: bool,
    created_at: String,
    updated_at: String,
}

impl RecipeRecord {
    pub(super) fn into_recipe(self) -> Result<Recipe, DecodeError> {
        let id = item_id("recipe", self.id)?;

        let ingredients = match self.ingredients {
            Some(records) => {
                let mut seen = HashSet::with_capacity(records.len());
                let mut ingredients = Vec::with_capacity(records.len());
                for record in records {
                    let ingredient = record.into_ingredient(id)?;
                    if !seen.insert(ingredient.id) {
                        return Err(DecodeError::DuplicateIngredient {
                            recipe: id,
                            ingredient: ingredient.id,
                        });
                    }
                    ingredients.push(ingredient);
                }
                Some(ingredients)
            }
            None => None,
        };

        Ok(Recipe {
            id,
            name: self.name,
            description: self.description,
            instructions: self.instructions,
            tips: self.tips,
            history: self.history,
            alcoholic: self.alcoholic,
            image_url: self.image_url,
            difficulty: self.difficulty,
            prep_time_minutes: self.prep_time_minutes,
            created_at: self.created_at,
            updated_at: self.updated_at,
            ingredients,
        })
    }
}

impl IngredientRecord {
    /// The pivot's ids are checked against the enclosing recipe and this
    /// ingredient, then dropped.
    fn into_ingredient(self, recipe: ItemId) -> Result<Ingredient, DecodeError> {
        let id = item_id("ingredient", self.id)?;
        let pivot = self.pivot;

        if let Some(found) = pivot.recipe_id.filter(|raw| *raw != recipe.get()) {
            return Err(DecodeError::ForeignDosage {
                ingredient: id,
                expected: recipe,
                found,
            });
        }
        if let Some(found) = pivot.ingredient_id.filter(|raw| *raw != id.get()) {
            return Err(DecodeError::MismatchedDosage {
                ingredient: id,
                found,
            });
        }

        Ok(Ingredient {
            id,
            name: self.name,
            contains_alcohol: self.contains_alcohol,
            category: self.category,
            created_at: self.created_at,
            updated_at: self.updated_at,
            dosage: Dosage {
                quantity: pivot.quantity,
                unit: pivot.unit,
                note: pivot.note.filter(|note| !note.trim().is_empty()),
            },
        })
    }
}

impl PartyGameRecord {
    pub(super) fn into_party_game(self) -> Result<PartyGame, DecodeError> {
        Ok(PartyGame {
            id: item_id("party game", self.id)?,
            name: self.name,
            description: self.description,
            category: self.category,
            materials: self.materials,
            min_players: self.min_players,
            max_players: self.max_players,
            requires_drinking: self.requires_drinking,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
