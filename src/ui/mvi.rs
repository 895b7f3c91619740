//! Unidirectional state primitives shared by every screen controller.
//!
//! ```text
//! fetch outcome / user action ──→ Intent ──→ Reducer ──→ State ──→ watch
//! ```
//!
//! Controllers never mutate a published state in place: they hand the
//! previous value and an intent to a reducer and publish whatever comes
//! back.

/// A value published to observers.
///
/// Observers compare snapshots and clone them out of the channel, and the
/// channel lives across tasks, hence the bounds.
pub trait UiState: Clone + PartialEq + Default + Send + Sync + 'static {}

/// Something that happened: a user action or the outcome of a fetch.
pub trait Intent: Send + 'static {}

/// Pure transition function from one state to the next.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
