//! Client for the movie-rental catalog API.
//!
//! - `client` / `error` - GET transport and its single error type
//! - `types` - records and explicit wire schemas
//! - `films`, `actors`, `customers` - one function per endpoint
//! - `worker` - async executor bridging the UI thread and the transport

pub mod actors;
pub mod client;
pub mod customers;
pub mod error;
pub mod films;
pub mod types;
pub mod worker;

pub use client::ApiClient;
pub use error::RequestError;
pub use films::FilmSearchType;
pub use types::{Actor, Customer, Film, Page};
pub use worker::{ApiCommand, ApiCommandSender, ApiEvent, ApiWorker, EventSink};
