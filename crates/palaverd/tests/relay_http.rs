//! HTTP-level tests for the relay endpoints, driven through the router
//! with a stub generation API bound to an ephemeral port.

use axum::body::Body;
use axum::extract::Query;
use axum::http::{Request, StatusCode};
use axum::routing::post;
use axum::Json;
use http_body_util::BodyExt;
use palaverd::config::Config;
use palaverd::server::{self, AppState};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::Arc;
use tower::ServiceExt;

/// What the stubbed generation API should answer.
enum Upstream {
    Reply(&'static str),
    /// Answer with the api key taken from the query string, so tests can
    /// observe which handle a relay actually used.
    EchoKey,
    Fail,
}

async fn spawn_upstream(mode: Upstream) -> String {
    let app = match mode {
        Upstream::Reply(text) => axum::Router::new().route(
            "/models/:call",
            post(move || async move { candidates(text.to_string()) }),
        ),
        Upstream::EchoKey => axum::Router::new().route(
            "/models/:call",
            post(|Query(params): Query<HashMap<String, String>>| async move {
                let key = params.get("key").cloned().unwrap_or_default();
                candidates(key)
            }),
        ),
        Upstream::Fail => axum::Router::new().route(
            "/models/:call",
            post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "quota exceeded") }),
        ),
    };

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{addr}/models")
}

fn candidates(text: String) -> Json<Value> {
    Json(json!({
        "candidates": [{ "content": { "parts": [{ "text": text }] } }]
    }))
}

fn relay_router(api_base: String) -> axum::Router {
    let config = Config {
        api_base,
        ..Config::default()
    };
    server::router(Arc::new(AppState::new(config)))
}

async fn post_json(app: &axum::Router, path: &str, body: Value) -> (StatusCode, Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(path)
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let parsed = serde_json::from_slice(&bytes).unwrap();
    (status, parsed)
}

#[tokio::test]
async fn chat_before_set_key_is_rejected() {
    let app = relay_router("http://127.0.0.1:1/models".to_string());

    let (status, body) = post_json(&app, "/api/chat", json!({ "message": "Hi" })).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "API key not set" }));
}

#[tokio::test]
async fn set_key_always_reports_success() {
    // No upstream is contacted at all; even a dead api_base accepts a key.
    let app = relay_router("http://127.0.0.1:1/models".to_string());

    let (status, body) = post_json(&app, "/api/set-key", json!({ "apiKey": "sk-valid" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "API key set successfully" }));
}

#[tokio::test]
async fn relay_returns_upstream_text_verbatim() {
    let api_base = spawn_upstream(Upstream::Reply("Hello there")).await;
    let app = relay_router(api_base);

    post_json(&app, "/api/set-key", json!({ "apiKey": "sk-valid" })).await;
    let (status, body) = post_json(&app, "/api/chat", json!({ "message": "Hi" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "reply": "Hello there" }));
}

#[tokio::test]
async fn upstream_failure_maps_to_generic_500() {
    let api_base = spawn_upstream(Upstream::Fail).await;
    let app = relay_router(api_base);

    post_json(&app, "/api/set-key", json!({ "apiKey": "sk-valid" })).await;
    let (status, body) = post_json(&app, "/api/chat", json!({ "message": "Hi" })).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({ "error": "An error occurred while processing your request" })
    );
}

#[tokio::test]
async fn latest_key_wins() {
    let api_base = spawn_upstream(Upstream::EchoKey).await;
    let app = relay_router(api_base);

    post_json(&app, "/api/set-key", json!({ "apiKey": "sk-first" })).await;
    post_json(&app, "/api/set-key", json!({ "apiKey": "sk-second" })).await;
    let (status, body) = post_json(&app, "/api/chat", json!({ "message": "which key?" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "reply": "sk-second" }));
}
