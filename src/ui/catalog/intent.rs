//! Intents for catalog screens.

use crate::catalog::CatalogItem;
use crate::ui::mvi::Intent;

/// Intents that drive the list state.
#[derive(Debug, Clone)]
pub enum ListIntent<E> {
    /// A list fetch started.
    Started,

    /// The list fetch succeeded.
    Loaded { items: Vec<E> },

    /// The list fetch failed.
    Failed { message: String },
}

impl<E: CatalogItem> Intent for ListIntent<E> {}

/// Intents that drive the detail dialog.
#[derive(Debug, Clone)]
pub enum DetailIntent<E> {
    /// User opened an item; its fetch started.
    Opened,

    /// The detail fetch succeeded.
    Loaded { item: E },

    /// The detail fetch failed.
    Failed { message: String },

    /// User dismissed the dialog.
    Closed,
}

impl<E: CatalogItem> Intent for DetailIntent<E> {}
