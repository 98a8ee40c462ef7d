//! Items API contract, driven in-process.

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use itemdash_store::{ItemStore, MemoryItemStore};
use itemdash_web::{create_router, state::AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app(store: Arc<MemoryItemStore>) -> Router {
    // The API never calls the page client.
    create_router(AppState::new(store, "http://127.0.0.1:9"))
}

async fn send(app: &Router, method: Method, body: Option<&str>) -> (StatusCode, Value) {
    let content_type = body.map(|_| "application/json");
    send_as(app, method, body, content_type).await
}

async fn send_as(
    app: &Router,
    method: Method,
    body: Option<&str>,
    content_type: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri("/api/dashboard");
    if let Some(content_type) = content_type {
        builder = builder.header(header::CONTENT_TYPE, content_type);
    }
    let request = builder
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn list_empty_collection() {
    let app = app(Arc::new(MemoryItemStore::new()));
    let (status, body) = send(&app, Method::GET, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "items": [] }));
}

#[tokio::test]
async fn create_defaults_status_to_pending() {
    let store = Arc::new(MemoryItemStore::new());
    let app = app(store.clone());

    let (status, body) = send(
        &app,
        Method::POST,
        Some(r#"{ "title": "Fix login bug", "description": "Users cannot log in with SSO" }"#),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Item created successfully");
    let id = body["id"].as_str().unwrap().to_string();
    assert!(!id.is_empty());

    let (status, body) = send(&app, Method::GET, None).await;
    assert_eq!(status, StatusCode::OK);
    let items = body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], id.as_str());
    assert_eq!(items[0]["title"], "Fix login bug");
    assert_eq!(items[0]["description"], "Users cannot log in with SSO");
    assert_eq!(items[0]["status"], "pending");
    assert!(items[0]["createdAt"]["_seconds"].is_i64());
}

#[tokio::test]
async fn create_keeps_given_status() {
    let app = app(Arc::new(MemoryItemStore::new()));
    send(
        &app,
        Method::POST,
        Some(r#"{ "title": "Ship", "description": "Release 1.0", "status": "in-progress" }"#),
    )
    .await;
    let (_, body) = send(&app, Method::GET, None).await;
    assert_eq!(body["items"][0]["status"], "in-progress");
}

#[tokio::test]
async fn create_rejects_missing_fields() {
    let store = Arc::new(MemoryItemStore::new());
    let app = app(store.clone());

    for payload in [
        r#"{ "title": "", "description": "x" }"#,
        r#"{ "title": "x" }"#,
        r#"{ "description": "x" }"#,
        r#"{ "title": null, "description": "x" }"#,
        r#"{ "title": 0, "description": "x" }"#,
        r#"{ "title": "x", "description": false }"#,
        r#"{}"#,
        r#"[]"#,
        r#""title""#,
    ] {
        let (status, body) = send(&app, Method::POST, Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "payload: {}", payload);
        assert_eq!(body, json!({ "error": "Title and description are required" }));
    }
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn list_is_newest_first() {
    let app = app(Arc::new(MemoryItemStore::new()));
    for title in ["A", "B", "C"] {
        let payload = json!({ "title": title, "description": "d" }).to_string();
        let (status, _) = send(&app, Method::POST, Some(&payload)).await;
        assert_eq!(status, StatusCode::OK);
    }

    let (_, body) = send(&app, Method::GET, None).await;
    let titles: Vec<&str> = body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|i| i["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["C", "B", "A"]);
}

#[tokio::test]
async fn store_outage_on_list() {
    let store = Arc::new(MemoryItemStore::new());
    store.set_offline(true);
    let app = app(store);

    let (status, body) = send(&app, Method::GET, None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to fetch dashboard items" }));
}

#[tokio::test]
async fn store_outage_on_create() {
    let store = Arc::new(MemoryItemStore::new());
    store.set_offline(true);
    let app = app(store.clone());

    let payload = r#"{ "title": "t", "description": "d" }"#;
    let (status, body) = send(&app, Method::POST, Some(payload)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Failed to create dashboard item" }));

    store.set_offline(false);
    assert!(store.list_newest_first().await.unwrap().is_empty());
}

#[tokio::test]
async fn malformed_body_is_a_create_failure() {
    let store = Arc::new(MemoryItemStore::new());
    let app = app(store.clone());

    for payload in ["{ not json", "", "null"] {
        let (status, body) = send(&app, Method::POST, Some(payload)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "payload: {:?}", payload);
        assert_eq!(body, json!({ "error": "Failed to create dashboard item" }));
    }
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn create_reads_json_whatever_the_content_type() {
    let store = Arc::new(MemoryItemStore::new());
    let app = app(store.clone());
    let payload = r#"{ "title": "t", "description": "d" }"#;

    for content_type in [None, Some("text/plain"), Some("application/x-www-form-urlencoded")] {
        let (status, body) = send_as(&app, Method::POST, Some(payload), content_type).await;
        assert_eq!(status, StatusCode::OK, "content type: {:?}", content_type);
        assert_eq!(body["message"], "Item created successfully");
    }
    assert_eq!(store.len().await, 3);

    let (status, body) = send_as(&app, Method::POST, Some("{}"), Some("text/plain")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "Title and description are required" }));
}

#[tokio::test]
async fn create_stores_truthy_non_strings_as_text() {
    let app = app(Arc::new(MemoryItemStore::new()));
    let payload = r#"{ "title": 5, "description": true, "status": 0 }"#;
    let (status, _) = send(&app, Method::POST, Some(payload)).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) = send(&app, Method::GET, None).await;
    let item = &body["items"][0];
    assert_eq!(item["title"], "5");
    assert_eq!(item["description"], "true");
    assert_eq!(item["status"], "pending");
}

#[tokio::test]
async fn list_disables_caching() {
    let app = app(Arc::new(MemoryItemStore::new()));
    let request = Request::builder()
        .uri("/api/dashboard")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.headers()[header::CACHE_CONTROL], "no-store");
}
