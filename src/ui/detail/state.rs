use crate::api::{Actor, Film};
use crate::ui::mvi::UiState;

/// Record types a detail screen can show.
pub trait DetailEntity: Clone + PartialEq + std::fmt::Debug + Send + 'static {
    const NOT_FOUND: &'static str;
    const LOAD_FAILED: &'static str;

    /// Number of selectable links the screen renders for this record.
    fn link_count(&self) -> usize;
}

impl DetailEntity for Film {
    const NOT_FOUND: &'static str = "Film not found";
    const LOAD_FAILED: &'static str = "failed to load film";

    fn link_count(&self) -> usize {
        0
    }
}

impl DetailEntity for Actor {
    const NOT_FOUND: &'static str = "Actor not found";
    const LOAD_FAILED: &'static str = "failed to load actor";

    fn link_count(&self) -> usize {
        self.top_films.len()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum DetailStatus<T> {
    Idle,
    Loading { id: u32, generation: u64 },
    Loaded(T),
    /// The API answered, but has no such record.
    NotFound { id: u32 },
    /// The request itself failed.
    Failed { id: u32, message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailState<T> {
    pub status: DetailStatus<T>,
    /// Focused link, for records that have any.
    pub selected: usize,
}

impl<T> Default for DetailState<T> {
    fn default() -> Self {
        Self {
            status: DetailStatus::Idle,
            selected: 0,
        }
    }
}

impl<T: DetailEntity> UiState for DetailState<T> {}

impl<T: DetailEntity> DetailState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self.status, DetailStatus::Loading { .. })
    }

    pub fn record(&self) -> Option<&T> {
        match &self.status {
            DetailStatus::Loaded(record) => Some(record),
            _ => None,
        }
    }
}
