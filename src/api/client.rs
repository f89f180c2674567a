use reqwest::{Client, Url};
use serde::de::DeserializeOwned;

use crate::api::error::RequestError;

const USER_AGENT: &str = concat!("sakila-tui/", env!("CARGO_PKG_VERSION"));

/// Thin GET-only client bound to the catalog API base URL.
///
/// No retries, no timeouts: the first failure is surfaced to the caller.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(base_url: Url) -> Result<Self, RequestError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| RequestError::transport(&e))?;

        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Builds `base_url + path` with percent-encoded query pairs.
    pub fn url(&self, path: &str, query: &[(&str, String)]) -> Result<Url, RequestError> {
        let raw = format!(
            "{}/{}",
            self.base_url.as_str().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        let mut url = Url::parse(&raw)
            .map_err(|e| RequestError::new(format!("invalid request url '{raw}': {e}"), None))?;
        if !query.is_empty() {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in query {
                pairs.append_pair(key, value);
            }
        }
        Ok(url)
    }

    /// Performs a GET and decodes the body into `T`.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, RequestError> {
        let url = self.url(path, query)?;
        tracing::debug!(%url, "api request");

        let response = match self.client.get(url.clone()).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!(%url, error = %e, "api request failed to send");
                return Err(RequestError::transport(&e));
            }
        };

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            tracing::warn!(%url, error = %e, "failed to read api response body");
            RequestError::transport(&e)
        })?;
        tracing::debug!(%url, status = status.as_u16(), bytes = body.len(), "api response");

        if !status.is_success() {
            let err = RequestError::from_error_body(status, &body);
            tracing::warn!(%url, status = status.as_u16(), reason = err.message(), "api error response");
            return Err(err);
        }

        serde_json::from_slice(&body).map_err(|e| {
            tracing::warn!(%url, error = %e, "api response did not match schema");
            RequestError::invalid_body(&e)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(Url::parse(base).unwrap()).unwrap()
    }

    #[test]
    fn url_keeps_base_path() {
        let api = client("http://localhost:5001/api");
        let url = api.url("/films/top-rented", &[]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5001/api/films/top-rented");
    }

    #[test]
    fn url_tolerates_trailing_slash() {
        let api = client("http://localhost:5001/api/");
        let url = api.url("/actors/7", &[]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:5001/api/actors/7");
    }

    #[test]
    fn url_encodes_query_values() {
        let api = client("http://localhost:5001/api");
        let url = api
            .url(
                "/films/search",
                &[("q", "ace & goldfinger".to_string()), ("type", "title".to_string())],
            )
            .unwrap();
        assert_eq!(url.path(), "/api/films/search");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            pairs,
            vec![
                ("q".to_string(), "ace & goldfinger".to_string()),
                ("type".to_string(), "title".to_string()),
            ]
        );
        assert!(!url.as_str().contains(' '));
    }
}
