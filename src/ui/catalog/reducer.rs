use std::marker::PhantomData;

use crate::ui::catalog::entity::CatalogEntity;
use crate::ui::catalog::intent::ListIntent;
use crate::ui::catalog::state::{
    page_count, page_slice, InFlight, ListRequest, ListState, Phase, PAGE_SIZE,
};
use crate::ui::mvi::Reducer;

/// Browse/search/paginate state machine shared by the film and customer lists.
///
/// Pure: a transition that needs the network leaves a [`ListRequest`] in
/// `state.pending` for the shell to send.
pub struct ListReducer<T>(PhantomData<T>);

impl<T: CatalogEntity> Reducer for ListReducer<T> {
    type State = ListState<T>;
    type Intent = ListIntent<T>;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ListIntent::Mount { generation } => {
                if state.is_searching() {
                    return state;
                }
                let page = state.page;
                request_page(state, page, generation)
            }

            ListIntent::Reload { generation } => {
                let search = match &state.phase {
                    Phase::Searching { query, mode, .. } => Some((query.clone(), *mode)),
                    Phase::Browsing => None,
                };
                match search {
                    Some((query, mode)) => request_search(state, query, mode, generation),
                    None => {
                        let page = state.page;
                        request_page(state, page, generation)
                    }
                }
            }

            ListIntent::SetQuery(query) => ListState {
                query,
                validation_error: None,
                ..state
            },

            ListIntent::SetMode(mode) => ListState {
                mode,
                validation_error: None,
                ..state
            },

            ListIntent::Submit { generation } => match T::validate(&state.query, state.mode) {
                Err(err) => ListState {
                    validation_error: Some(err),
                    ..state
                },
                Ok(query) => {
                    let mode = state.mode;
                    request_search(state, query, mode, generation)
                }
            },

            ListIntent::GoToPage { page, generation } => change_page(state, page, generation),

            ListIntent::NextPage { generation } => {
                let target = target_base(&state).saturating_add(1);
                change_page(state, target, generation)
            }

            ListIntent::PrevPage { generation } => {
                let target = target_base(&state).saturating_sub(1);
                change_page(state, target, generation)
            }

            ListIntent::Clear { generation } => {
                let cleared = ListState {
                    query: String::new(),
                    phase: Phase::Browsing,
                    page: 1,
                    total_pages: 1,
                    items: Vec::new(),
                    selected: 0,
                    error: None,
                    validation_error: None,
                    ..state
                };
                request_page(cleared, 1, generation)
            }

            ListIntent::SelectNext => {
                let selected = if state.items.is_empty() || state.selected + 1 >= state.items.len()
                {
                    0
                } else {
                    state.selected + 1
                };
                ListState { selected, ..state }
            }

            ListIntent::SelectPrev => {
                let selected = if state.selected == 0 {
                    state.items.len().saturating_sub(1)
                } else {
                    state.selected - 1
                };
                ListState { selected, ..state }
            }

            ListIntent::PageLoaded { generation, result } => {
                let Some(in_flight) = matching(&state, generation) else {
                    return state;
                };
                match result {
                    Ok(page) => ListState {
                        page: in_flight.page,
                        total_pages: page.total_pages.max(1),
                        items: page.items,
                        selected: 0,
                        loading: false,
                        error: None,
                        in_flight: None,
                        ..state
                    },
                    // Rows, page and page count stay as they were.
                    Err(_) => ListState {
                        loading: false,
                        error: Some(T::LOAD_FAILED.to_string()),
                        in_flight: None,
                        ..state
                    },
                }
            }

            ListIntent::SearchLoaded { generation, result } => {
                if matching(&state, generation).is_none() {
                    return state;
                }
                let (query, mode) = match &state.phase {
                    Phase::Searching { query, mode, .. } => (query.clone(), *mode),
                    Phase::Browsing => return state,
                };
                match result {
                    Ok(results) => ListState {
                        page: 1,
                        total_pages: page_count(results.len()),
                        items: page_slice(&results, 1),
                        phase: Phase::Searching {
                            query,
                            mode,
                            results,
                        },
                        selected: 0,
                        loading: false,
                        error: None,
                        in_flight: None,
                        ..state
                    },
                    // Stays in Searching until the user resubmits or clears.
                    Err(_) => ListState {
                        page: 1,
                        total_pages: 1,
                        items: Vec::new(),
                        phase: Phase::Searching {
                            query,
                            mode,
                            results: Vec::new(),
                        },
                        selected: 0,
                        loading: false,
                        error: Some(T::SEARCH_FAILED.to_string()),
                        in_flight: None,
                        ..state
                    },
                }
            }
        }
    }
}

fn matching<T: CatalogEntity>(state: &ListState<T>, generation: u64) -> Option<InFlight> {
    state
        .in_flight
        .filter(|in_flight| in_flight.generation == generation)
}

/// Page that relative moves start from: the one being fetched if a browse
/// fetch is outstanding, otherwise the one on screen.
fn target_base<T: CatalogEntity>(state: &ListState<T>) -> u32 {
    match (&state.phase, state.in_flight) {
        (Phase::Browsing, Some(in_flight)) => in_flight.page,
        _ => state.page,
    }
}

fn change_page<T: CatalogEntity>(state: ListState<T>, target: u32, generation: u64) -> ListState<T> {
    let target = target.clamp(1, state.total_pages.max(1));
    if target == target_base(&state) {
        return state;
    }

    if !state.is_searching() {
        return request_page(state, target, generation);
    }
    // Results are still on their way; there is nothing to slice yet.
    if state.in_flight.is_some() {
        return state;
    }
    let items = match &state.phase {
        Phase::Searching { results, .. } => page_slice(results, target),
        Phase::Browsing => Vec::new(),
    };
    ListState {
        page: target,
        items,
        selected: 0,
        ..state
    }
}

fn request_page<T: CatalogEntity>(state: ListState<T>, page: u32, generation: u64) -> ListState<T> {
    ListState {
        loading: true,
        in_flight: Some(InFlight { generation, page }),
        pending: Some(ListRequest::Page {
            generation,
            page,
            limit: PAGE_SIZE,
        }),
        ..state
    }
}

fn request_search<T: CatalogEntity>(
    state: ListState<T>,
    query: String,
    mode: T::Mode,
    generation: u64,
) -> ListState<T> {
    ListState {
        phase: Phase::Searching {
            query: query.clone(),
            mode,
            results: Vec::new(),
        },
        page: 1,
        selected: 0,
        loading: true,
        validation_error: None,
        in_flight: Some(InFlight {
            generation,
            page: 1,
        }),
        pending: Some(ListRequest::Search {
            generation,
            query,
            mode,
        }),
        ..state
    }
}
