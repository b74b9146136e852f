//! Reducer trait.

use super::intent::Intent;
use super::state::UiState;

/// Pure `(State, Intent) -> State` transition.
///
/// Side effects (spawning fetches, logging rejected actions) belong to
/// the caller around the dispatch.
pub trait Reducer {
    type State: UiState;

    type Intent: Intent;

    /// Consume the current state and return the next one.
    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
