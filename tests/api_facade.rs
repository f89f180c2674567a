//! Endpoint functions: paths, parameters and response shapes.

mod common;

use common::{client_for, customer_json, film_array, film_json, MockApi, MockResponse};
use sakila_tui::api::{actors, customers, films, FilmSearchType};
use serde_json::json;

#[tokio::test]
async fn test_film_list_envelope() {
    let api = MockApi::start().await;
    api.route(
        "/api/films",
        MockResponse::json(json!({"films": film_array(21), "totalPages": 48})),
    )
    .await;

    let page = films::list(&client_for(&api), 2, 21).await.unwrap();
    assert_eq!(page.items.len(), 21);
    assert_eq!(page.total_pages, 48);

    let requests = api.captured_requests().await;
    assert_eq!(requests[0].param("page"), Some("2"));
    assert_eq!(requests[0].param("limit"), Some("21"));
}

#[tokio::test]
async fn test_film_list_bare_array() {
    let api = MockApi::start().await;
    api.route("/api/films", MockResponse::json(film_array(4))).await;

    let page = films::list(&client_for(&api), 1, 21).await.unwrap();
    assert_eq!(page.items.len(), 4);
    assert_eq!(page.total_pages, 1);
}

#[tokio::test]
async fn test_film_search_sends_type() {
    let api = MockApi::start().await;
    api.route("/api/films/search", MockResponse::json(film_array(3)))
        .await;

    let results = films::search(&client_for(&api), "penelope", FilmSearchType::Actor)
        .await
        .unwrap();
    assert_eq!(results.len(), 3);

    let requests = api.captured_requests().await;
    assert_eq!(requests[0].param("q"), Some("penelope"));
    assert_eq!(requests[0].param("type"), Some("actor"));
}

#[tokio::test]
async fn test_null_search_result_is_empty() {
    let api = MockApi::start().await;
    api.route("/api/customers/search", MockResponse::json(json!(null)))
        .await;

    let results = customers::search(&client_for(&api), "mary").await.unwrap();
    assert!(results.is_empty());
}

#[tokio::test]
async fn test_missing_film_is_none() {
    let api = MockApi::start().await;

    let film = films::get(&client_for(&api), 9999).await.unwrap();
    assert!(film.is_none());
    assert_eq!(api.captured_requests().await[0].path, "/api/films/9999");
}

#[tokio::test]
async fn test_film_server_error_is_err() {
    let api = MockApi::start().await;
    api.route(
        "/api/films/3",
        MockResponse::error(500, json!({"message": "boom"})),
    )
    .await;

    let err = films::get(&client_for(&api), 3).await.unwrap_err();
    assert_eq!(err.message(), "boom");
}

#[tokio::test]
async fn test_top_rented_films() {
    let api = MockApi::start().await;
    api.route(
        "/api/films/top-rented",
        MockResponse::json(json!([
            {"film_id": 103, "title": "BUCKET BROTHERHOOD", "category": "Travel", "rented": 34},
            {"film_id": 738, "title": "ROCKETEER MOTHER", "category": "Foreign", "rented": 33}
        ])),
    )
    .await;

    let top = films::top_rented(&client_for(&api)).await.unwrap();
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].rental_count, 34);
    assert_eq!(top[1].category.as_deref(), Some("Foreign"));
}

#[tokio::test]
async fn test_actor_with_top_films() {
    let api = MockApi::start().await;
    api.route(
        "/api/actors/107",
        MockResponse::json(json!({
            "actor_id": 107,
            "first_name": "GINA",
            "last_name": "DEGENERES",
            "top_films": [film_json(1, "A"), film_json(2, "B")]
        })),
    )
    .await;

    let actor = actors::get(&client_for(&api), 107).await.unwrap().unwrap();
    assert_eq!(actor.full_name(), "GINA DEGENERES");
    assert_eq!(actor.top_films.len(), 2);
}

#[tokio::test]
async fn test_top_actors_film_count_names() {
    let api = MockApi::start().await;
    api.route(
        "/api/actors/top",
        MockResponse::json(json!([
            {"actor_id": 1, "first_name": "A", "last_name": "ONE", "movies": 42},
            {"actor_id": 2, "first_name": "B", "last_name": "TWO", "film_count": 41}
        ])),
    )
    .await;

    let top = actors::top(&client_for(&api)).await.unwrap();
    assert_eq!(top[0].film_count, Some(42));
    assert_eq!(top[1].film_count, Some(41));
}

#[tokio::test]
async fn test_customer_list_envelope() {
    let api = MockApi::start().await;
    api.route(
        "/api/customers",
        MockResponse::json(json!({
            "customers": [customer_json(1, "MARY", "SMITH"), customer_json(2, "PATRICIA", "JOHNSON")],
            "totalPages": 29
        })),
    )
    .await;

    let page = customers::list(&client_for(&api), 1, 21).await.unwrap();
    assert_eq!(page.total_pages, 29);
    assert_eq!(page.items[1].full_name(), "PATRICIA JOHNSON");
    assert_eq!(page.items[0].email, "MARY.SMITH@sakilacustomer.org");
}
