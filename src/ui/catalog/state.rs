use crate::ui::catalog::entity::CatalogEntity;
use crate::ui::catalog::validation::ValidationError;
use crate::ui::mvi::UiState;

/// Rows per page, both for server paging and for slicing search results.
pub const PAGE_SIZE: u32 = 21;

#[derive(Debug, Clone, PartialEq)]
pub enum Phase<T: CatalogEntity> {
    /// Server-paginated listing.
    Browsing,
    /// Client-paginated view over one fully fetched result set.
    Searching {
        query: String,
        mode: T::Mode,
        results: Vec<T>,
    },
}

/// A request the shell must issue after a transition.
#[derive(Debug, Clone, PartialEq)]
pub enum ListRequest<M> {
    Page {
        generation: u64,
        page: u32,
        limit: u32,
    },
    Search {
        generation: u64,
        query: String,
        mode: M,
    },
}

/// The request this state is waiting on. Responses with another generation
/// are dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InFlight {
    pub generation: u64,
    /// Page the response will be shown as.
    pub page: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListState<T: CatalogEntity> {
    /// Raw text in the search box.
    pub query: String,
    pub mode: T::Mode,
    /// Page currently displayed, `>= 1`.
    pub page: u32,
    /// `>= 1`.
    pub total_pages: u32,
    pub phase: Phase<T>,
    /// Rows currently displayed.
    pub items: Vec<T>,
    pub selected: usize,
    pub loading: bool,
    pub error: Option<String>,
    pub validation_error: Option<ValidationError>,
    pub in_flight: Option<InFlight>,
    /// Drained by the shell right after dispatch.
    pub pending: Option<ListRequest<T::Mode>>,
}

impl<T: CatalogEntity> Default for ListState<T> {
    fn default() -> Self {
        Self {
            query: String::new(),
            mode: T::Mode::default(),
            page: 1,
            total_pages: 1,
            phase: Phase::Browsing,
            items: Vec::new(),
            selected: 0,
            loading: false,
            error: None,
            validation_error: None,
            in_flight: None,
            pending: None,
        }
    }
}

impl<T: CatalogEntity> UiState for ListState<T> {}

impl<T: CatalogEntity> ListState<T> {
    pub fn is_searching(&self) -> bool {
        matches!(self.phase, Phase::Searching { .. })
    }

    /// Size of the held search result set; 0 while browsing.
    pub fn result_count(&self) -> usize {
        match &self.phase {
            Phase::Searching { results, .. } => results.len(),
            Phase::Browsing => 0,
        }
    }

    /// Query text of the active search, if any.
    pub fn submitted_query(&self) -> Option<&str> {
        match &self.phase {
            Phase::Searching { query, .. } => Some(query),
            Phase::Browsing => None,
        }
    }

    pub fn empty_message(&self) -> &'static str {
        if self.is_searching() {
            T::EMPTY_SEARCH
        } else {
            T::EMPTY_BROWSE
        }
    }

    pub fn selected_item(&self) -> Option<&T> {
        self.items.get(self.selected)
    }

    pub fn has_prev_page(&self) -> bool {
        self.page > 1
    }

    pub fn has_next_page(&self) -> bool {
        self.page < self.total_pages
    }

    /// Takes the request recorded by the last transition.
    pub fn take_pending(&mut self) -> Option<ListRequest<T::Mode>> {
        self.pending.take()
    }
}

/// Number of pages needed for `count` rows. Never less than 1.
pub fn page_count(count: usize) -> u32 {
    let pages = count.div_ceil(PAGE_SIZE as usize).max(1);
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Rows `[(page-1)*PAGE_SIZE, page*PAGE_SIZE)` of `results`, clipped to its end.
pub fn page_slice<T: Clone>(results: &[T], page: u32) -> Vec<T> {
    let size = PAGE_SIZE as usize;
    let start = (page.max(1) as usize - 1).saturating_mul(size);
    if start >= results.len() {
        return Vec::new();
    }
    let end = (start + size).min(results.len());
    results[start..end].to_vec()
}
