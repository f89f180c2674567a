use std::marker::PhantomData;

use crate::ui::detail::intent::DetailIntent;
use crate::ui::detail::state::{DetailEntity, DetailState, DetailStatus};
use crate::ui::mvi::Reducer;

pub struct DetailReducer<T>(PhantomData<T>);

impl<T: DetailEntity> Reducer for DetailReducer<T> {
    type State = DetailState<T>;
    type Intent = DetailIntent<T>;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            DetailIntent::Load { id, generation } => DetailState {
                status: DetailStatus::Loading { id, generation },
                selected: 0,
            },

            DetailIntent::Loaded { generation, result } => {
                let id = match state.status {
                    DetailStatus::Loading {
                        id,
                        generation: expected,
                    } if expected == generation => id,
                    // Stale or unsolicited response
                    _ => return state,
                };
                let status = match result {
                    Ok(Some(record)) => DetailStatus::Loaded(record),
                    Ok(None) => DetailStatus::NotFound { id },
                    Err(_) => DetailStatus::Failed {
                        id,
                        message: T::LOAD_FAILED.to_string(),
                    },
                };
                DetailState {
                    status,
                    selected: 0,
                }
            }

            DetailIntent::SelectNext => {
                let count = state.record().map(T::link_count).unwrap_or(0);
                let selected = if count == 0 || state.selected + 1 >= count {
                    0
                } else {
                    state.selected + 1
                };
                DetailState { selected, ..state }
            }

            DetailIntent::SelectPrev => {
                let count = state.record().map(T::link_count).unwrap_or(0);
                let selected = if state.selected == 0 {
                    count.saturating_sub(1)
                } else {
                    state.selected - 1
                };
                DetailState { selected, ..state }
            }
        }
    }
}
