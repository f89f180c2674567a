use crate::api::{Page, RequestError};
use crate::ui::catalog::entity::CatalogEntity;
use crate::ui::mvi::Intent;

/// Every event the list machine reacts to.
///
/// Intents that may start a request carry the generation the shell allocated
/// for it; the reducer only uses it if a request is actually issued.
#[derive(Debug)]
pub enum ListIntent<T: CatalogEntity> {
    /// Screen shown. Fetches the current page unless a search is held.
    Mount { generation: u64 },
    /// Re-run whatever produced the current rows.
    Reload { generation: u64 },
    /// Search box text changed.
    SetQuery(String),
    /// Search qualifier changed.
    SetMode(T::Mode),
    Submit { generation: u64 },
    GoToPage { page: u32, generation: u64 },
    NextPage { generation: u64 },
    PrevPage { generation: u64 },
    Clear { generation: u64 },
    SelectNext,
    SelectPrev,
    PageLoaded {
        generation: u64,
        result: Result<Page<T>, RequestError>,
    },
    SearchLoaded {
        generation: u64,
        result: Result<Vec<T>, RequestError>,
    },
}

impl<T: CatalogEntity> Intent for ListIntent<T> {}
