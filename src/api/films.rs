//! Film queries.

use std::fmt;

use crate::api::client::ApiClient;
use crate::api::error::RequestError;
use crate::api::types::{Film, FilmPageBody, Page};

/// Field a film search matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilmSearchType {
    #[default]
    Title,
    Category,
    Actor,
}

impl FilmSearchType {
    pub const ALL: [FilmSearchType; 3] = [Self::Title, Self::Category, Self::Actor];

    /// Value of the `type` query parameter.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Category => "category",
            Self::Actor => "actor",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Title => "Film Name",
            Self::Category => "Category",
            Self::Actor => "Actor Name",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Title => "Enter film name...",
            Self::Category => "Enter category...",
            Self::Actor => "Enter actor name...",
        }
    }

    /// Next type in selector order, wrapping around.
    pub fn cycle(self) -> Self {
        match self {
            Self::Title => Self::Category,
            Self::Category => Self::Actor,
            Self::Actor => Self::Title,
        }
    }
}

impl fmt::Display for FilmSearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `GET /films?page=&limit=`
pub async fn list(client: &ApiClient, page: u32, limit: u32) -> Result<Page<Film>, RequestError> {
    let body: FilmPageBody = client
        .get(
            "/films",
            &[("page", page.to_string()), ("limit", limit.to_string())],
        )
        .await?;
    Ok(body.into())
}

/// `GET /films/top-rented`
pub async fn top_rented(client: &ApiClient) -> Result<Vec<Film>, RequestError> {
    let films: Option<Vec<Film>> = client.get("/films/top-rented", &[]).await?;
    Ok(films.unwrap_or_default())
}

/// `GET /films/:id`. A 404 or a `null` body means the film does not exist.
pub async fn get(client: &ApiClient, film_id: u32) -> Result<Option<Film>, RequestError> {
    match client.get::<Option<Film>>(&format!("/films/{film_id}"), &[]).await {
        Ok(film) => Ok(film),
        Err(err) if err.is_not_found() => Ok(None),
        Err(err) => Err(err),
    }
}

/// `GET /films/search?q=&type=`. The server returns the full, unpaginated match set.
pub async fn search(
    client: &ApiClient,
    query: &str,
    search_type: FilmSearchType,
) -> Result<Vec<Film>, RequestError> {
    let films: Option<Vec<Film>> = client
        .get(
            "/films/search",
            &[
                ("q", query.to_string()),
                ("type", search_type.as_str().to_string()),
            ],
        )
        .await?;
    Ok(films.unwrap_or_default())
}
