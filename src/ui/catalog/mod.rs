//! Catalog screen state: a list sub-machine and a detail-dialog
//! sub-machine per controller.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - List and detail state enums
//! - `intent.rs` - Fetch lifecycle and dialog actions
//! - `reducer.rs` - State transitions
//! - `controller.rs` - Runs fetches and publishes states

mod controller;
mod intent;
mod reducer;
mod state;

pub use controller::{CatalogController, PartyGamesController, RecipesController};
pub use intent::{DetailIntent, ListIntent};
pub use reducer::{DetailReducer, ListReducer};
pub use state::{DetailState, ListState};
