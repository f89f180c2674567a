//! Customer queries.

use crate::api::client::ApiClient;
use crate::api::error::RequestError;
use crate::api::types::{Customer, CustomerPageBody, Page};

/// `GET /customers?page=&limit=`
pub async fn list(
    client: &ApiClient,
    page: u32,
    limit: u32,
) -> Result<Page<Customer>, RequestError> {
    let body: CustomerPageBody = client
        .get(
            "/customers",
            &[("page", page.to_string()), ("limit", limit.to_string())],
        )
        .await?;
    Ok(body.into())
}

/// `GET /customers/search?q=`
pub async fn search(client: &ApiClient, query: &str) -> Result<Vec<Customer>, RequestError> {
    let customers: Option<Vec<Customer>> = client
        .get("/customers/search", &[("q", query.to_string())])
        .await?;
    Ok(customers.unwrap_or_default())
}
