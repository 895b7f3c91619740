//! States for catalog screens.

use crate::catalog::CatalogItem;
use crate::ui::mvi::UiState;

/// State of a catalog list.
#[derive(Debug, Clone, PartialEq)]
pub enum ListState<E> {
    /// A fetch is in progress. Also the initial state.
    Loading,

    /// Items in backend order.
    Success { items: Vec<E> },

    /// The last fetch failed; retrying is always allowed.
    Error { message: String },
}

impl<E> Default for ListState<E> {
    fn default() -> Self {
        Self::Loading
    }
}

impl<E: CatalogItem> UiState for ListState<E> {}

impl<E> ListState<E> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success { .. })
    }

    pub fn items(&self) -> Option<&[E]> {
        match self {
            Self::Success { items } => Some(items),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message } => Some(message),
            _ => None,
        }
    }
}

/// State of the item detail dialog.
#[derive(Debug, Clone, PartialEq)]
pub enum DetailState<E> {
    /// No dialog shown.
    Absent,

    /// Dialog open, item being fetched.
    Loading,

    Success { item: E },

    Error { message: String },
}

impl<E> Default for DetailState<E> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<E: CatalogItem> UiState for DetailState<E> {}

impl<E> DetailState<E> {
    /// Check if the dialog should be visible.
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Absent)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn item(&self) -> Option<&E> {
        match self {
            Self::Success { item } => Some(item),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message } => Some(message),
            _ => None,
        }
    }
}
