//! Reducers for catalog screens.

use std::marker::PhantomData;

use crate::catalog::CatalogItem;
use crate::ui::mvi::Reducer;

use super::intent::{DetailIntent, ListIntent};
use super::state::{DetailState, ListState};

/// Reducer for list state transitions.
pub struct ListReducer<E>(PhantomData<fn() -> E>);

impl<E: CatalogItem> Reducer for ListReducer<E> {
    type State = ListState<E>;
    type Intent = ListIntent<E>;

    fn reduce(_state: Self::State, intent: Self::Intent) -> Self::State {
        // Last write wins: every outcome replaces whatever is shown.
        match intent {
            ListIntent::Started => ListState::Loading,
            ListIntent::Loaded { items } => ListState::Success { items },
            ListIntent::Failed { message } => ListState::Error { message },
        }
    }
}

/// Reducer for detail dialog state transitions.
pub struct DetailReducer<E>(PhantomData<fn() -> E>);

impl<E: CatalogItem> Reducer for DetailReducer<E> {
    type State = DetailState<E>;
    type Intent = DetailIntent<E>;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DetailIntent::Opened => DetailState::Loading,

            // Outcomes only land on a dialog that is still waiting for them.
            DetailIntent::Loaded { item } => match state {
                DetailState::Loading => DetailState::Success { item },
                other => other,
            },
            DetailIntent::Failed { message } => match state {
                DetailState::Loading => DetailState::Error { message },
                other => other,
            },

            DetailIntent::Closed => DetailState::Absent,
        }
    }
}
