//! Background executor for catalog requests.
//!
//! The UI thread never awaits. It pushes an [`ApiCommand`] onto a bounded
//! channel and later receives the matching [`ApiEvent`] through the event
//! sink. Each command carries the generation the issuing view allocated for
//! it; the event echoes it back so the view can drop stale results.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::api::client::ApiClient;
use crate::api::error::RequestError;
use crate::api::films::FilmSearchType;
use crate::api::types::{Actor, Customer, Film, Page};
use crate::api::{actors, customers, films};

const COMMAND_BUFFER: usize = 32;

#[derive(Debug, Clone, PartialEq)]
pub enum ApiCommand {
    FilmPage {
        generation: u64,
        page: u32,
        limit: u32,
    },
    FilmSearch {
        generation: u64,
        query: String,
        search_type: FilmSearchType,
    },
    CustomerPage {
        generation: u64,
        page: u32,
        limit: u32,
    },
    CustomerSearch {
        generation: u64,
        query: String,
    },
    Film {
        generation: u64,
        film_id: u32,
    },
    Actor {
        generation: u64,
        actor_id: u32,
    },
    /// Top-rented films and top actors for the landing screen.
    Landing {
        generation: u64,
    },
}

impl ApiCommand {
    pub fn generation(&self) -> u64 {
        match self {
            ApiCommand::FilmPage { generation, .. }
            | ApiCommand::FilmSearch { generation, .. }
            | ApiCommand::CustomerPage { generation, .. }
            | ApiCommand::CustomerSearch { generation, .. }
            | ApiCommand::Film { generation, .. }
            | ApiCommand::Actor { generation, .. }
            | ApiCommand::Landing { generation } => *generation,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ApiEvent {
    FilmPage {
        generation: u64,
        result: Result<Page<Film>, RequestError>,
    },
    FilmSearch {
        generation: u64,
        result: Result<Vec<Film>, RequestError>,
    },
    CustomerPage {
        generation: u64,
        result: Result<Page<Customer>, RequestError>,
    },
    CustomerSearch {
        generation: u64,
        result: Result<Vec<Customer>, RequestError>,
    },
    Film {
        generation: u64,
        result: Result<Option<Film>, RequestError>,
    },
    Actor {
        generation: u64,
        result: Result<Option<Actor>, RequestError>,
    },
    Landing {
        generation: u64,
        result: Result<(Vec<Film>, Vec<Actor>), RequestError>,
    },
}

impl ApiEvent {
    pub fn generation(&self) -> u64 {
        match self {
            ApiEvent::FilmPage { generation, .. }
            | ApiEvent::FilmSearch { generation, .. }
            | ApiEvent::CustomerPage { generation, .. }
            | ApiEvent::CustomerSearch { generation, .. }
            | ApiEvent::Film { generation, .. }
            | ApiEvent::Actor { generation, .. }
            | ApiEvent::Landing { generation, .. } => *generation,
        }
    }
}

pub type ApiCommandSender = mpsc::Sender<ApiCommand>;

/// Callback the worker delivers results through.
pub type EventSink = Arc<dyn Fn(ApiEvent) + Send + Sync>;

pub struct ApiWorker {
    client: ApiClient,
    receiver: mpsc::Receiver<ApiCommand>,
}

impl ApiWorker {
    pub fn new(client: ApiClient) -> (ApiCommandSender, Self) {
        let (sender, receiver) = mpsc::channel(COMMAND_BUFFER);
        (sender, Self { client, receiver })
    }

    /// Runs until every sender is dropped.
    ///
    /// Each command gets its own task so a slow search never holds up a page
    /// fetch issued after it.
    pub async fn run(mut self, sink: EventSink) {
        while let Some(command) = self.receiver.recv().await {
            tracing::debug!(?command, "api command");
            let client = self.client.clone();
            let sink = Arc::clone(&sink);
            tokio::spawn(async move {
                let event = execute(&client, command).await;
                sink(event);
            });
        }
        tracing::debug!("api worker stopped: command channel closed");
    }
}

/// Runs one command against the API and wraps the outcome.
pub async fn execute(client: &ApiClient, command: ApiCommand) -> ApiEvent {
    match command {
        ApiCommand::FilmPage {
            generation,
            page,
            limit,
        } => ApiEvent::FilmPage {
            generation,
            result: films::list(client, page, limit).await,
        },
        ApiCommand::FilmSearch {
            generation,
            query,
            search_type,
        } => ApiEvent::FilmSearch {
            generation,
            result: films::search(client, &query, search_type).await,
        },
        ApiCommand::CustomerPage {
            generation,
            page,
            limit,
        } => ApiEvent::CustomerPage {
            generation,
            result: customers::list(client, page, limit).await,
        },
        ApiCommand::CustomerSearch { generation, query } => ApiEvent::CustomerSearch {
            generation,
            result: customers::search(client, &query).await,
        },
        ApiCommand::Film {
            generation,
            film_id,
        } => ApiEvent::Film {
            generation,
            result: films::get(client, film_id).await,
        },
        ApiCommand::Actor {
            generation,
            actor_id,
        } => ApiEvent::Actor {
            generation,
            result: actors::get(client, actor_id).await,
        },
        ApiCommand::Landing { generation } => {
            let result = tokio::try_join!(films::top_rented(client), actors::top(client));
            ApiEvent::Landing { generation, result }
        }
    }
}
