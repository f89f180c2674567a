//! Route paths, their parsing, and the back stack.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

const MAX_HISTORY: usize = 64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/`
    Landing,
    /// `/films`
    Films,
    /// `/films/:filmId`
    FilmDetail { film_id: u32 },
    /// `/actors/:actorId`
    ActorDetail { actor_id: u32 },
    /// `/customers`
    Customers,
}

/// Entries of the persistent navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavLink {
    Home,
    Films,
    Customers,
}

impl NavLink {
    pub const ALL: [NavLink; 3] = [NavLink::Home, NavLink::Films, NavLink::Customers];

    pub fn label(self) -> &'static str {
        match self {
            NavLink::Home => "Home",
            NavLink::Films => "Films",
            NavLink::Customers => "Customers",
        }
    }

    pub fn route(self) -> Route {
        match self {
            NavLink::Home => Route::Landing,
            NavLink::Films => Route::Films,
            NavLink::Customers => Route::Customers,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("no page at '{0}'")]
    Unknown(String),
    #[error("invalid {kind} id '{raw}'")]
    InvalidId { kind: &'static str, raw: String },
}

impl Route {
    pub fn parse(path: &str) -> Result<Self, RouteError> {
        let trimmed = path.trim();
        let without_query = trimmed
            .split(['?', '#'])
            .next()
            .unwrap_or_default();
        let segments: Vec<&str> = without_query
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect();

        match segments.as_slice() {
            [] => Ok(Route::Landing),
            ["films"] => Ok(Route::Films),
            ["films", id] => Ok(Route::FilmDetail {
                film_id: parse_id("film", id)?,
            }),
            ["actors", id] => Ok(Route::ActorDetail {
                actor_id: parse_id("actor", id)?,
            }),
            ["customers"] => Ok(Route::Customers),
            _ => Err(RouteError::Unknown(trimmed.to_string())),
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Landing => "/".to_string(),
            Route::Films => "/films".to_string(),
            Route::FilmDetail { film_id } => format!("/films/{film_id}"),
            Route::ActorDetail { actor_id } => format!("/actors/{actor_id}"),
            Route::Customers => "/customers".to_string(),
        }
    }

    /// The nav bar entry highlighted while this route is shown.
    pub fn nav_link(&self) -> Option<NavLink> {
        match self {
            Route::Landing => Some(NavLink::Home),
            Route::Films | Route::FilmDetail { .. } => Some(NavLink::Films),
            Route::Customers => Some(NavLink::Customers),
            Route::ActorDetail { .. } => None,
        }
    }
}

fn parse_id(kind: &'static str, raw: &str) -> Result<u32, RouteError> {
    match raw.parse::<u32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(RouteError::InvalidId {
            kind,
            raw: raw.to_string(),
        }),
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::parse(s)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// Current route plus the routes visited before it.
#[derive(Debug, Clone)]
pub struct Navigator {
    current: Route,
    history: Vec<Route>,
}

impl Navigator {
    pub fn new(start: Route) -> Self {
        Self {
            current: start,
            history: Vec::new(),
        }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    pub fn can_go_back(&self) -> bool {
        !self.history.is_empty()
    }

    /// Moves to `route`. Returns false when already there.
    pub fn push(&mut self, route: Route) -> bool {
        if route == self.current {
            return false;
        }
        if self.history.len() == MAX_HISTORY {
            self.history.remove(0);
        }
        self.history.push(self.current);
        self.current = route;
        true
    }

    /// Returns to the previous route, if there is one.
    pub fn back(&mut self) -> Option<Route> {
        let previous = self.history.pop()?;
        self.current = previous;
        Some(previous)
    }
}
