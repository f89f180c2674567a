use super::intent::Intent;
use super::state::UiState;

/// Owns every transition of one screen.
///
/// `reduce` performs no I/O. When a transition needs a fetch, the new state
/// carries the request and the app sends it after dispatch.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
