//! Paginated list with search, shared by the film and customer screens.
//!
//! # Architecture
//!
//! - `entity.rs` - per-record rules: search qualifier, validation, messages
//! - `validation.rs` - query checks run before anything is sent
//! - `state.rs` - Browsing / Searching phases, page window helpers
//! - `intent.rs` - user actions and API results
//! - `reducer.rs` - the transitions (pure)

mod entity;
mod intent;
mod reducer;
mod state;
pub mod validation;

pub use entity::CatalogEntity;
pub use intent::ListIntent;
pub use reducer::ListReducer;
pub use state::{page_count, page_slice, InFlight, ListRequest, ListState, Phase, PAGE_SIZE};
pub use validation::ValidationError;
