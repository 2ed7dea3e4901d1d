use std::sync::Arc;
use std::time::Duration;

use axum_test::TestServer;
use serde_json::json;
use wiremock::matchers::{method, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use marquee_api::api::{create_router, AppState};
use marquee_api::services::{
    providers::{MovieProvider, OmdbProvider},
    SearchController,
};

fn create_test_server(omdb_url: &str, debounce: Duration) -> TestServer {
    let provider: Arc<dyn MovieProvider> = Arc::new(OmdbProvider::new(
        "test_key".to_string(),
        omdb_url.to_string(),
    ));
    let controller = SearchController::new(provider.clone(), debounce);
    let state = AppState::new(controller, provider);
    let app = create_router(state);
    TestServer::new(app).unwrap()
}

/// Polls the state endpoint until the predicate holds
async fn wait_for_state(
    server: &TestServer,
    predicate: impl Fn(&serde_json::Value) -> bool,
) -> serde_json::Value {
    for _ in 0..150 {
        let response = server.get("/search/state").await;
        let state: serde_json::Value = response.json();
        if predicate(&state) {
            return state;
        }
        tokio::time::sleep(Duration::from_millis(20)).await;
    }
    panic!("timed out waiting for search state");
}

#[tokio::test]
async fn test_health_check() {
    let server = create_test_server("http://127.0.0.1:1", Duration::from_millis(25));
    let response = server.get("/health").await;
    response.assert_status_ok();
}

#[tokio::test]
async fn test_initial_search_state_is_empty() {
    let server = create_test_server("http://127.0.0.1:1", Duration::from_millis(25));

    let response = server.get("/search/state").await;
    response.assert_status_ok();
    let state: serde_json::Value = response.json();
    assert_eq!(state["movies"].as_array().unwrap().len(), 0);
    assert_eq!(state["loading_completed"], false);
}

#[tokio::test]
async fn test_debounced_search_populates_state() {
    let omdb = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("s", "inception"))
        .and(query_param("page", "2"))
        .and(query_param("apiKey", "test_key"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"Search":[{"Title":"Inception","Year":"2010"}],"Response":"True"}"#,
            "application/json",
        ))
        .mount(&omdb)
        .await;

    let server = create_test_server(&omdb.uri(), Duration::from_millis(25));

    let response = server
        .post("/search/text")
        .json(&json!({ "text": "inception" }))
        .await;
    response.assert_status(axum::http::StatusCode::ACCEPTED);

    let state = wait_for_state(&server, |s| s["loading_completed"] == true).await;
    assert_eq!(state["movies"][0]["title"], "Inception");
    assert_eq!(state["movies"][0]["year"], "2010");
}

#[tokio::test]
async fn test_rapid_typing_fetches_only_final_text() {
    let omdb = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("s", "inception"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"Search":[{"Title":"Inception","Year":"2010"}],"Response":"True"}"#,
            "application/json",
        ))
        .expect(1)
        .mount(&omdb)
        .await;

    let server = create_test_server(&omdb.uri(), Duration::from_millis(100));

    for text in ["i", "in", "inception"] {
        let response = server
            .post("/search/text")
            .json(&json!({ "text": text }))
            .await;
        response.assert_status(axum::http::StatusCode::ACCEPTED);
    }

    let state = wait_for_state(&server, |s| s["movies"][0]["title"] == "Inception").await;
    assert_eq!(state["loading_completed"], true);
}

#[tokio::test]
async fn test_pipeline_swallows_malformed_upstream_body() {
    let omdb = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("definitely not json"))
        .mount(&omdb)
        .await;

    let server = create_test_server(&omdb.uri(), Duration::from_millis(25));

    server
        .post("/search/text")
        .json(&json!({ "text": "xyz" }))
        .await;

    let state = wait_for_state(&server, |s| s["loading_completed"] == true).await;
    assert_eq!(state["movies"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_direct_search_returns_movies() {
    let omdb = MockServer::start().await;
    Mock::given(method("GET"))
        .and(query_param("s", "star wars"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            r#"{"Search":[{"Title":"Star Wars","Year":"1977"}],"Response":"True"}"#,
            "application/json",
        ))
        .mount(&omdb)
        .await;

    let server = create_test_server(&omdb.uri(), Duration::from_millis(25));

    let response = server
        .get("/search/movies")
        .add_query_param("q", "star wars")
        .await;
    response.assert_status_ok();
    let movies: Vec<serde_json::Value> = response.json();
    assert_eq!(movies.len(), 1);
    assert_eq!(movies[0]["title"], "Star Wars");
    assert_eq!(movies[0]["year"], "1977");
}

#[tokio::test]
async fn test_direct_search_rejects_unencodable_query() {
    let server = create_test_server("http://127.0.0.1:1", Duration::from_millis(25));

    let response = server
        .get("/search/movies")
        .add_query_param("q", "bad\u{0}query")
        .await;
    response.assert_status(axum::http::StatusCode::BAD_REQUEST);
    let body: serde_json::Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("unencodable"));
}
