//! Actor queries.

use crate::api::client::ApiClient;
use crate::api::error::RequestError;
use crate::api::types::Actor;

/// `GET /actors/top`
pub async fn top(client: &ApiClient) -> Result<Vec<Actor>, RequestError> {
    let actors: Option<Vec<Actor>> = client.get("/actors/top", &[]).await?;
    Ok(actors.unwrap_or_default())
}

/// `GET /actors/:id`, optionally embedding the actor's top films.
pub async fn get(client: &ApiClient, actor_id: u32) -> Result<Option<Actor>, RequestError> {
    match client.get::<Option<Actor>>(&format!("/actors/{actor_id}"), &[]).await {
        Ok(actor) => Ok(actor),
        Err(err) if err.is_not_found() => Ok(None),
        Err(err) => Err(err),
    }
}
