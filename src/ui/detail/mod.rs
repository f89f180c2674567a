//! Single-record screens (film, actor): load by id, then show the record,
//! a not-found notice, or a load failure.

mod intent;
mod reducer;
mod state;

pub use intent::DetailIntent;
pub use reducer::DetailReducer;
pub use state::{DetailEntity, DetailState, DetailStatus};
