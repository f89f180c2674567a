use crate::api::{Actor, Film};
use crate::ui::mvi::UiState;
use crate::ui::router::Route;

pub const LOAD_FAILED: &str = "failed to load";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LandingState {
    pub loading: bool,
    pub top_films: Vec<Film>,
    pub top_actors: Vec<Actor>,
    pub error: Option<String>,
    pub in_flight: Option<u64>,
    /// Index over films first, then actors.
    pub selected: usize,
}

impl UiState for LandingState {}

impl LandingState {
    pub fn link_count(&self) -> usize {
        self.top_films.len() + self.top_actors.len()
    }

    /// Where the focused card leads.
    pub fn selected_route(&self) -> Option<Route> {
        if let Some(film) = self.top_films.get(self.selected) {
            return Some(Route::FilmDetail { film_id: film.id });
        }
        let actor_index = self.selected.checked_sub(self.top_films.len())?;
        self.top_actors
            .get(actor_index)
            .map(|actor| Route::ActorDetail { actor_id: actor.id })
    }
}
