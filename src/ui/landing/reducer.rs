use crate::ui::landing::intent::LandingIntent;
use crate::ui::landing::state::{LandingState, LOAD_FAILED};
use crate::ui::mvi::Reducer;

pub struct LandingReducer;

impl Reducer for LandingReducer {
    type State = LandingState;
    type Intent = LandingIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            LandingIntent::Load { generation } => LandingState {
                loading: true,
                in_flight: Some(generation),
                ..state
            },

            LandingIntent::Loaded { generation, result } => {
                if state.in_flight != Some(generation) {
                    return state;
                }
                match result {
                    Ok((top_films, top_actors)) => LandingState {
                        loading: false,
                        top_films,
                        top_actors,
                        error: None,
                        in_flight: None,
                        selected: 0,
                    },
                    Err(_) => LandingState {
                        loading: false,
                        error: Some(LOAD_FAILED.to_string()),
                        in_flight: None,
                        ..state
                    },
                }
            }

            LandingIntent::SelectNext => {
                let count = state.link_count();
                let selected = if count == 0 || state.selected + 1 >= count {
                    0
                } else {
                    state.selected + 1
                };
                LandingState { selected, ..state }
            }

            LandingIntent::SelectPrev => {
                let selected = if state.selected == 0 {
                    state.link_count().saturating_sub(1)
                } else {
                    state.selected - 1
                };
                LandingState { selected, ..state }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Actor, Film, RequestError};
    use crate::ui::router::Route;

    fn film(id: u32) -> Film {
        Film {
            id,
            title: format!("F{id}"),
            category: None,
            description: None,
            release_year: None,
            length: None,
            rating: None,
            rental_rate: None,
            rental_count: 30,
        }
    }

    fn actor(id: u32) -> Actor {
        Actor {
            id,
            first_name: "A".to_string(),
            last_name: format!("{id}"),
            film_count: Some(40),
            top_films: Vec::new(),
        }
    }

    fn loaded() -> LandingState {
        let state = LandingReducer::reduce(LandingState::default(), LandingIntent::Load { generation: 1 });
        LandingReducer::reduce(
            state,
            LandingIntent::Loaded {
                generation: 1,
                result: Ok((vec![film(1), film(2)], vec![actor(5)])),
            },
        )
    }

    #[test]
    fn loaded_fills_both_sections() {
        let state = loaded();
        assert!(!state.loading);
        assert_eq!(state.top_films.len(), 2);
        assert_eq!(state.top_actors.len(), 1);
    }

    #[test]
    fn selection_crosses_from_films_to_actors() {
        let state = loaded();
        assert_eq!(state.selected_route(), Some(Route::FilmDetail { film_id: 1 }));
        let state = LandingReducer::reduce(state, LandingIntent::SelectNext);
        let state = LandingReducer::reduce(state, LandingIntent::SelectNext);
        assert_eq!(state.selected_route(), Some(Route::ActorDetail { actor_id: 5 }));
        let state = LandingReducer::reduce(state, LandingIntent::SelectNext);
        assert_eq!(state.selected, 0);
    }

    #[test]
    fn failure_sets_generic_message() {
        let state = LandingReducer::reduce(LandingState::default(), LandingIntent::Load { generation: 3 });
        let state = LandingReducer::reduce(
            state,
            LandingIntent::Loaded {
                generation: 3,
                result: Err(RequestError::new("Request failed", None)),
            },
        );
        assert_eq!(state.error.as_deref(), Some("failed to load"));
    }

    #[test]
    fn stale_result_is_dropped() {
        let state = LandingReducer::reduce(LandingState::default(), LandingIntent::Load { generation: 2 });
        let state = LandingReducer::reduce(
            state,
            LandingIntent::Loaded {
                generation: 1,
                result: Ok((vec![film(1)], Vec::new())),
            },
        );
        assert!(state.loading);
        assert!(state.top_films.is_empty());
    }
}
