//! Screen state machines.
//!
//! ```text
//! key / ApiEvent ──→ Intent ──→ Reducer ──→ State ──→ views::render_*
//!       ↑                          │
//!       │                    pending request
//!       └──── ApiWorker ←──────────┘
//! ```
//!
//! Implemented by `catalog` (film and customer lists), `detail` (film and
//! actor pages) and `landing`.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
