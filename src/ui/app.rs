use crate::api::{ApiCommand, ApiCommandSender, ApiEvent, Actor, Customer, Film};
use crate::ui::catalog::{CatalogEntity, ListIntent, ListReducer, ListState};
use crate::ui::detail::{DetailIntent, DetailReducer, DetailState};
use crate::ui::landing::{LandingIntent, LandingReducer, LandingState};
use crate::ui::mvi::Reducer;
use crate::ui::router::{Navigator, Route};
use tokio::sync::mpsc::error::TrySendError;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($state:expr, $reducer:ty, $intent:expr) => {
        *$state = <$reducer>::reduce(std::mem::take($state), $intent);
    };
}

/// Dispatches into whichever list screen is shown and issues the request
/// the transition recorded. `|generation|` allocates a fresh token first and
/// rolls the screen back if the request could not be queued, so the request
/// already in flight still owns the state.
macro_rules! dispatch_list {
    (@run $self:ident, $intent:expr) => {{
        let command = match &mut $self.screen {
            Screen::Films(state) => {
                dispatch_mvi!(state, ListReducer<Film>, $intent);
                state.take_pending().map(Film::command)
            }
            Screen::Customers(state) => {
                dispatch_mvi!(state, ListReducer<Customer>, $intent);
                state.take_pending().map(Customer::command)
            }
            _ => None,
        };
        match command {
            Some(command) => $self.send_command(command),
            None => true,
        }
    }};
    ($self:ident, |$generation:ident| $intent:expr) => {{
        let $generation = $self.next_generation();
        let previous = $self.screen.clone();
        if !dispatch_list!(@run $self, $intent) {
            $self.screen = previous;
        }
    }};
    ($self:ident, $intent:expr) => {{
        dispatch_list!(@run $self, $intent);
    }};
}

/// State of the screen for the current route. Rebuilt on every navigation.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Landing(LandingState),
    Films(ListState<Film>),
    FilmDetail(DetailState<Film>),
    ActorDetail(DetailState<Actor>),
    Customers(ListState<Customer>),
}

/// Where typed characters go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    /// Editing the search box of a list screen.
    Search,
    /// Typing a route path into the go-to prompt.
    GoTo(String),
}

pub struct App {
    should_quit: bool,
    navigator: Navigator,
    screen: Screen,
    input_mode: InputMode,
    api_sender: Option<ApiCommandSender>,
    /// Last token handed out. Shared by every screen so that a response
    /// can never match a state built after it was requested.
    generation: u64,
    notice: Option<String>,
    ticks: u64,
}

impl App {
    pub fn new(start: Route) -> Self {
        Self {
            should_quit: false,
            navigator: Navigator::new(start),
            screen: Screen::Landing(LandingState::default()),
            input_mode: InputMode::Normal,
            api_sender: None,
            generation: 0,
            notice: None,
            ticks: 0,
        }
    }

    pub fn set_api_sender(&mut self, sender: ApiCommandSender) {
        self.api_sender = Some(sender);
    }

    /// Mounts the start route. Call once the sender is attached.
    pub fn start(&mut self) {
        tracing::info!(route = %self.route(), "starting");
        self.mount();
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn route(&self) -> Route {
        self.navigator.current()
    }

    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    pub fn input_mode(&self) -> &InputMode {
        &self.input_mode
    }

    /// One-line message about the last failed shell action.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn can_go_back(&self) -> bool {
        self.navigator.can_go_back()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn on_tick(&mut self) {
        self.ticks = self.ticks.wrapping_add(1);
    }

    pub fn navigate(&mut self, route: Route) {
        if self.navigator.push(route) {
            tracing::info!(route = %route, "navigate");
            self.mount();
        }
    }

    pub fn back(&mut self) {
        if let Some(route) = self.navigator.back() {
            tracing::info!(route = %route, "navigate back");
            self.mount();
        }
    }

    /// Re-issues the current screen's request.
    pub fn reload(&mut self) {
        self.notice = None;
        match self.screen {
            Screen::Films(_) | Screen::Customers(_) => {
                dispatch_list!(self, |generation| ListIntent::Reload { generation })
            }
            _ => self.mount(),
        }
    }

    pub fn on_api_event(&mut self, event: ApiEvent) {
        match (event, &mut self.screen) {
            (ApiEvent::FilmPage { generation, result }, Screen::Films(state)) => {
                dispatch_mvi!(
                    state,
                    ListReducer<Film>,
                    ListIntent::PageLoaded { generation, result }
                );
            }
            (ApiEvent::FilmSearch { generation, result }, Screen::Films(state)) => {
                dispatch_mvi!(
                    state,
                    ListReducer<Film>,
                    ListIntent::SearchLoaded { generation, result }
                );
            }
            (ApiEvent::CustomerPage { generation, result }, Screen::Customers(state)) => {
                dispatch_mvi!(
                    state,
                    ListReducer<Customer>,
                    ListIntent::PageLoaded { generation, result }
                );
            }
            (ApiEvent::CustomerSearch { generation, result }, Screen::Customers(state)) => {
                dispatch_mvi!(
                    state,
                    ListReducer<Customer>,
                    ListIntent::SearchLoaded { generation, result }
                );
            }
            (ApiEvent::Film { generation, result }, Screen::FilmDetail(state)) => {
                dispatch_mvi!(
                    state,
                    DetailReducer<Film>,
                    DetailIntent::Loaded { generation, result }
                );
            }
            (ApiEvent::Actor { generation, result }, Screen::ActorDetail(state)) => {
                dispatch_mvi!(
                    state,
                    DetailReducer<Actor>,
                    DetailIntent::Loaded { generation, result }
                );
            }
            (ApiEvent::Landing { generation, result }, Screen::Landing(state)) => {
                dispatch_mvi!(
                    state,
                    LandingReducer,
                    LandingIntent::Loaded { generation, result }
                );
            }
            (event, _) => {
                tracing::debug!(
                    generation = event.generation(),
                    "dropping response for a screen that is no longer shown"
                );
            }
        }
    }

    // Search box

    pub fn start_search_edit(&mut self) {
        if matches!(self.screen, Screen::Films(_) | Screen::Customers(_)) {
            self.input_mode = InputMode::Search;
        }
    }

    pub fn push_query_char(&mut self, ch: char) {
        let Some(mut query) = self.list_query().map(str::to_owned) else {
            return;
        };
        query.push(ch);
        dispatch_list!(self, ListIntent::SetQuery(query));
    }

    pub fn pop_query_char(&mut self) {
        let Some(mut query) = self.list_query().map(str::to_owned) else {
            return;
        };
        if query.pop().is_some() {
            dispatch_list!(self, ListIntent::SetQuery(query));
        }
    }

    pub fn submit_search(&mut self) {
        self.input_mode = InputMode::Normal;
        dispatch_list!(self, |generation| ListIntent::Submit { generation });
    }

    pub fn clear_search(&mut self) {
        self.input_mode = InputMode::Normal;
        dispatch_list!(self, |generation| ListIntent::Clear { generation });
    }

    /// Advances the film search qualifier. No-op elsewhere.
    pub fn cycle_search_type(&mut self) {
        if let Screen::Films(state) = &mut self.screen {
            let mode = state.mode.cycle();
            dispatch_mvi!(state, ListReducer<Film>, ListIntent::SetMode(mode));
        }
    }

    pub fn next_page(&mut self) {
        dispatch_list!(self, |generation| ListIntent::NextPage { generation });
    }

    pub fn prev_page(&mut self) {
        dispatch_list!(self, |generation| ListIntent::PrevPage { generation });
    }

    // Selection

    pub fn select_next(&mut self) {
        match &mut self.screen {
            Screen::Landing(state) => {
                dispatch_mvi!(state, LandingReducer, LandingIntent::SelectNext);
            }
            Screen::ActorDetail(state) => {
                dispatch_mvi!(state, DetailReducer<Actor>, DetailIntent::SelectNext);
            }
            Screen::FilmDetail(_) => {}
            Screen::Films(_) | Screen::Customers(_) => {
                dispatch_list!(self, ListIntent::SelectNext)
            }
        }
    }

    pub fn select_prev(&mut self) {
        match &mut self.screen {
            Screen::Landing(state) => {
                dispatch_mvi!(state, LandingReducer, LandingIntent::SelectPrev);
            }
            Screen::ActorDetail(state) => {
                dispatch_mvi!(state, DetailReducer<Actor>, DetailIntent::SelectPrev);
            }
            Screen::FilmDetail(_) => {}
            Screen::Films(_) | Screen::Customers(_) => {
                dispatch_list!(self, ListIntent::SelectPrev)
            }
        }
    }

    /// Follows the focused card, if it links anywhere.
    pub fn open_selected(&mut self) {
        let target = match &self.screen {
            Screen::Landing(state) => state.selected_route(),
            Screen::Films(state) => state
                .selected_item()
                .map(|film| Route::FilmDetail { film_id: film.id }),
            Screen::ActorDetail(state) => state
                .record()
                .and_then(|actor| actor.top_films.get(state.selected))
                .map(|film| Route::FilmDetail { film_id: film.id }),
            Screen::FilmDetail(_) | Screen::Customers(_) => None,
        };
        if let Some(route) = target {
            self.navigate(route);
        }
    }

    // Go-to prompt

    pub fn open_goto(&mut self) {
        self.input_mode = InputMode::GoTo(String::new());
    }

    pub fn push_goto_char(&mut self, ch: char) {
        if let InputMode::GoTo(buffer) = &mut self.input_mode {
            buffer.push(ch);
        }
    }

    pub fn pop_goto_char(&mut self) {
        if let InputMode::GoTo(buffer) = &mut self.input_mode {
            buffer.pop();
        }
    }

    pub fn submit_goto(&mut self) {
        let InputMode::GoTo(buffer) = std::mem::replace(&mut self.input_mode, InputMode::Normal)
        else {
            return;
        };
        match Route::parse(&buffer) {
            Ok(route) => {
                self.notice = None;
                self.navigate(route);
            }
            Err(err) => {
                tracing::debug!(input = %buffer, error = %err, "rejected go-to path");
                self.notice = Some(err.to_string());
            }
        }
    }

    /// Leaves the search box or go-to prompt without acting.
    pub fn cancel_input(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    fn list_query(&self) -> Option<&str> {
        match &self.screen {
            Screen::Films(state) => Some(&state.query),
            Screen::Customers(state) => Some(&state.query),
            _ => None,
        }
    }

    fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Builds a fresh state for the current route and issues its fetch.
    fn mount(&mut self) {
        self.input_mode = InputMode::Normal;
        let generation = self.next_generation();
        let (screen, command) = match self.navigator.current() {
            Route::Landing => {
                let state =
                    LandingReducer::reduce(LandingState::default(), LandingIntent::Load { generation });
                (Screen::Landing(state), Some(ApiCommand::Landing { generation }))
            }
            Route::Films => {
                let mut state =
                    ListReducer::<Film>::reduce(ListState::default(), ListIntent::Mount { generation });
                let command = state.take_pending().map(Film::command);
                (Screen::Films(state), command)
            }
            Route::Customers => {
                let mut state = ListReducer::<Customer>::reduce(
                    ListState::default(),
                    ListIntent::Mount { generation },
                );
                let command = state.take_pending().map(Customer::command);
                (Screen::Customers(state), command)
            }
            Route::FilmDetail { film_id } => {
                let state = DetailReducer::<Film>::reduce(
                    DetailState::default(),
                    DetailIntent::Load {
                        id: film_id,
                        generation,
                    },
                );
                (
                    Screen::FilmDetail(state),
                    Some(ApiCommand::Film {
                        generation,
                        film_id,
                    }),
                )
            }
            Route::ActorDetail { actor_id } => {
                let state = DetailReducer::<Actor>::reduce(
                    DetailState::default(),
                    DetailIntent::Load {
                        id: actor_id,
                        generation,
                    },
                );
                (
                    Screen::ActorDetail(state),
                    Some(ApiCommand::Actor {
                        generation,
                        actor_id,
                    }),
                )
            }
        };
        self.screen = screen;
        if let Some(command) = command {
            // The fresh screen keeps its spinner; `r` remounts it.
            let _ = self.send_command(command);
        }
    }

    /// Queues `command` for the worker. Without a worker attached (tests that
    /// only drive state) the command is dropped and counts as sent.
    fn send_command(&mut self, command: ApiCommand) -> bool {
        let Some(sender) = self.api_sender.as_ref() else {
            return true;
        };
        match sender.try_send(command) {
            Ok(()) => true,
            Err(TrySendError::Full(command)) => {
                tracing::warn!(generation = command.generation(), "request queue full");
                self.notice = Some("too many requests in flight, press r to retry".to_string());
                false
            }
            Err(TrySendError::Closed(command)) => {
                tracing::error!(generation = command.generation(), "request worker stopped");
                self.notice = Some("request worker stopped".to_string());
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Page, RequestError};
    use tokio::sync::mpsc;

    fn film(id: u32) -> Film {
        Film {
            id,
            title: format!("FILM {id}"),
            category: None,
            description: None,
            release_year: None,
            length: None,
            rating: None,
            rental_rate: None,
            rental_count: 0,
        }
    }

    fn app_at(route: Route) -> (App, mpsc::Receiver<ApiCommand>) {
        let (tx, rx) = mpsc::channel(16);
        let mut app = App::new(route);
        app.set_api_sender(tx);
        app.start();
        (app, rx)
    }

    #[test]
    fn start_issues_the_mount_request() {
        let (_app, mut rx) = app_at(Route::Films);
        assert_eq!(
            rx.try_recv().unwrap(),
            ApiCommand::FilmPage {
                generation: 1,
                page: 1,
                limit: 21
            }
        );
    }

    #[test]
    fn response_for_previous_screen_is_dropped() {
        let (mut app, mut rx) = app_at(Route::Films);
        let first = rx.try_recv().unwrap();
        app.navigate(Route::Customers);

        app.on_api_event(ApiEvent::FilmPage {
            generation: first.generation(),
            result: Ok(Page::new(vec![film(1)], Some(3))),
        });
        let Screen::Customers(state) = app.screen() else {
            panic!("expected customers screen");
        };
        assert!(state.items.is_empty());
        assert!(state.loading);
    }

    #[test]
    fn film_card_opens_detail_and_back_returns() {
        let (mut app, mut rx) = app_at(Route::Films);
        let generation = rx.try_recv().unwrap().generation();
        app.on_api_event(ApiEvent::FilmPage {
            generation,
            result: Ok(Page::new(vec![film(7), film(8)], Some(1))),
        });
        app.select_next();
        app.open_selected();

        assert_eq!(app.route(), Route::FilmDetail { film_id: 8 });
        assert!(matches!(
            rx.try_recv().unwrap(),
            ApiCommand::Film { film_id: 8, .. }
        ));

        app.back();
        assert_eq!(app.route(), Route::Films);
        assert!(matches!(rx.try_recv().unwrap(), ApiCommand::FilmPage { .. }));
    }

    #[test]
    fn typing_and_submitting_a_search() {
        let (mut app, mut rx) = app_at(Route::Films);
        rx.try_recv().unwrap();

        app.start_search_edit();
        assert_eq!(app.input_mode(), &InputMode::Search);
        for ch in "ace".chars() {
            app.push_query_char(ch);
        }
        app.submit_search();

        assert_eq!(app.input_mode(), &InputMode::Normal);
        match rx.try_recv().unwrap() {
            ApiCommand::FilmSearch { query, .. } => assert_eq!(query, "ace"),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn rejected_query_sends_nothing() {
        let (mut app, mut rx) = app_at(Route::Films);
        rx.try_recv().unwrap();

        app.push_query_char('a');
        app.submit_search();
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn goto_prompt_navigates_or_reports() {
        let (mut app, _rx) = app_at(Route::Landing);
        app.open_goto();
        for ch in "/actors/0".chars() {
            app.push_goto_char(ch);
        }
        app.submit_goto();
        assert_eq!(app.route(), Route::Landing);
        assert_eq!(app.notice(), Some("invalid actor id '0'"));

        app.open_goto();
        for ch in "/actors/12".chars() {
            app.push_goto_char(ch);
        }
        app.submit_goto();
        assert_eq!(app.route(), Route::ActorDetail { actor_id: 12 });
        assert_eq!(app.notice(), None);
    }

    #[test]
    fn detail_error_is_kept_on_screen() {
        let (mut app, mut rx) = app_at(Route::FilmDetail { film_id: 3 });
        let generation = rx.try_recv().unwrap().generation();
        app.on_api_event(ApiEvent::Film {
            generation,
            result: Err(RequestError::new("boom", None)),
        });
        let Screen::FilmDetail(state) = app.screen() else {
            panic!("expected film detail");
        };
        assert!(!state.is_loading());
    }

    #[test]
    fn full_queue_keeps_the_request_already_in_flight() {
        let (tx, mut rx) = mpsc::channel(1);
        let mut app = App::new(Route::Customers);
        app.set_api_sender(tx);
        app.start();
        let before = app.screen().clone();

        // The mount request still occupies the only slot.
        app.clear_search();
        assert_eq!(
            app.notice(),
            Some("too many requests in flight, press r to retry")
        );
        assert_eq!(app.screen(), &before);

        let mounted = rx.try_recv().unwrap();
        assert!(rx.try_recv().is_err());
        app.on_api_event(ApiEvent::CustomerPage {
            generation: mounted.generation(),
            result: Ok(Page::new(
                vec![Customer {
                    id: 1,
                    first_name: "MARY".to_string(),
                    last_name: "SMITH".to_string(),
                    email: "mary@sakilacustomer.org".to_string(),
                }],
                Some(29),
            )),
        });
        let Screen::Customers(state) = app.screen() else {
            panic!("expected customers screen");
        };
        assert!(!state.loading);
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.total_pages, 29);
    }

    #[test]
    fn closed_worker_surfaces_a_notice() {
        let (tx, rx) = mpsc::channel(1);
        drop(rx);
        let mut app = App::new(Route::Films);
        app.set_api_sender(tx);
        app.start();
        assert_eq!(app.notice(), Some("request worker stopped"));
    }
}
