//! Single-shot, fail-fast access to one catalog: fetch, validate, decode.

mod error;
mod item;
mod repository;

pub use error::RepositoryError;
pub use item::CatalogItem;
pub use repository::{CatalogRepository, CatalogSource, PartyGameRepository, RecipeRepository};
