use std::fmt::Debug;

use crate::api::{ApiCommand, Customer, Film, FilmSearchType};
use crate::ui::catalog::state::ListRequest;
use crate::ui::catalog::validation::{
    validate_customer_query, validate_film_query, ValidationError,
};

/// What the list machine needs to know about the record type it pages over.
pub trait CatalogEntity: Clone + PartialEq + Debug + Send + 'static {
    /// Search qualifier chosen next to the query box. `()` when there is none.
    type Mode: Copy + PartialEq + Default + Debug + Send + 'static;

    /// Shown when a browse page comes back empty.
    const EMPTY_BROWSE: &'static str;
    /// Shown when a search matches nothing.
    const EMPTY_SEARCH: &'static str;
    /// Banner text for a failed browse fetch.
    const LOAD_FAILED: &'static str;
    /// Banner text for a failed search.
    const SEARCH_FAILED: &'static str = "search failed";

    /// Returns the trimmed query to submit, or why it was rejected.
    fn validate(query: &str, mode: Self::Mode) -> Result<String, ValidationError>;

    fn command(request: ListRequest<Self::Mode>) -> ApiCommand;
}

impl CatalogEntity for Film {
    type Mode = FilmSearchType;

    const EMPTY_BROWSE: &'static str = "No films found.";
    const EMPTY_SEARCH: &'static str = "no results found";
    const LOAD_FAILED: &'static str = "failed to load films";

    fn validate(query: &str, mode: FilmSearchType) -> Result<String, ValidationError> {
        validate_film_query(query, mode)
    }

    fn command(request: ListRequest<FilmSearchType>) -> ApiCommand {
        match request {
            ListRequest::Page {
                generation,
                page,
                limit,
            } => ApiCommand::FilmPage {
                generation,
                page,
                limit,
            },
            ListRequest::Search {
                generation,
                query,
                mode,
            } => ApiCommand::FilmSearch {
                generation,
                query,
                search_type: mode,
            },
        }
    }
}

impl CatalogEntity for Customer {
    type Mode = ();

    const EMPTY_BROWSE: &'static str = "No customers found.";
    const EMPTY_SEARCH: &'static str = "no customers found";
    const LOAD_FAILED: &'static str = "failed to load customers";

    fn validate(query: &str, _mode: ()) -> Result<String, ValidationError> {
        validate_customer_query(query)
    }

    fn command(request: ListRequest<()>) -> ApiCommand {
        match request {
            ListRequest::Page {
                generation,
                page,
                limit,
            } => ApiCommand::CustomerPage {
                generation,
                page,
                limit,
            },
            ListRequest::Search {
                generation, query, ..
            } => ApiCommand::CustomerSearch { generation, query },
        }
    }
}
